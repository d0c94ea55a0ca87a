use crate::domain::common::{RecordId, RecordMeta, Resource, ResourceKind};
use crate::shared::form_fields::{
    datetime_input_value, flag_or, join_list, split_list, ImageField, ListDelimiter,
};
use crate::shared::form_model::{require, FormModel};
use crate::shared::lenient;
use crate::shared::media::ApiEndpoint;
use crate::shared::payload::FormPayload;
use crate::shared::slug::{stored_slug, sync_slug};
use serde::{Deserialize, Serialize};

/// Publication state of an article
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsStatus {
    Draft,
    Published,
    Archived,
}

impl NewsStatus {
    pub const ALL: [NewsStatus; 3] = [NewsStatus::Draft, NewsStatus::Published, NewsStatus::Archived];

    pub fn as_str(&self) -> &'static str {
        match self {
            NewsStatus::Draft => "draft",
            NewsStatus::Published => "published",
            NewsStatus::Archived => "archived",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NewsStatus::Draft => "Draft",
            NewsStatus::Published => "Published",
            NewsStatus::Archived => "Archived",
        }
    }

    /// Unknown or blank values read as draft
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "published" => NewsStatus::Published,
            "archived" => NewsStatus::Archived,
            _ => NewsStatus::Draft,
        }
    }
}

// ============================================================================
// Record
// ============================================================================

/// News article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct News {
    #[serde(default)]
    pub id: Option<RecordId>,
    /// Document key of backends that expose `_id`, alone or next to `id`
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub document_id: Option<RecordId>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub slug: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub excerpt: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub content: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub image: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub author: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient::comma_list")]
    pub tags: Vec<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub published_at: String,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_featured: Option<bool>,

    #[serde(flatten)]
    pub meta: RecordMeta,
}

impl News {
    pub fn status(&self) -> NewsStatus {
        NewsStatus::parse(&self.status)
    }

    pub fn is_published(&self) -> bool {
        self.status() == NewsStatus::Published
    }
}

impl Resource for News {
    const KIND: ResourceKind = ResourceKind::News;

    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref().or(self.document_id.as_ref())
    }

    fn display_name(&self) -> &str {
        &self.title
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsForm {
    pub id: Option<RecordId>,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub image: ImageField,
    pub author: String,
    pub category: String,
    /// Comma-separated
    pub tags: String,
    pub status: String,
    /// `datetime-local` input value
    pub published_at: String,
    pub is_featured: bool,
}

impl Default for NewsForm {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            slug: String::new(),
            excerpt: String::new(),
            content: String::new(),
            image: ImageField::default(),
            author: String::new(),
            category: String::new(),
            tags: String::new(),
            status: NewsStatus::Draft.as_str().to_string(),
            published_at: String::new(),
            is_featured: false,
        }
    }
}

impl NewsForm {
    pub fn set_title(&mut self, title: String) {
        sync_slug(self.is_edit(), &mut self.slug, &title);
        self.title = title;
    }
}

impl FormModel for NewsForm {
    type Record = News;

    fn from_record(record: &News, endpoint: &ApiEndpoint) -> Self {
        Self {
            id: record.id().cloned(),
            title: record.title.clone(),
            slug: stored_slug(&record.slug, record.display_name()),
            excerpt: record.excerpt.clone(),
            content: record.content.clone(),
            image: ImageField::from_existing(endpoint.resolve_media_url(&record.image)),
            author: record.author.clone(),
            category: record.category.clone(),
            tags: join_list(&record.tags, ListDelimiter::Comma),
            status: record.status().as_str().to_string(),
            published_at: datetime_input_value(&record.published_at),
            is_featured: flag_or(record.is_featured, false),
        }
    }

    fn to_payload(&self) -> FormPayload {
        FormPayload::new()
            .text("title", self.title.trim())
            .text("slug", self.slug.trim())
            .text("excerpt", self.excerpt.trim())
            .text("content", self.content.trim())
            .text("author", self.author.trim())
            .text("category", self.category.trim())
            .list("tags", split_list(&self.tags, ListDelimiter::Comma))
            .text("status", NewsStatus::parse(&self.status).as_str())
            .opt_text("published_at", &self.published_at)
            .flag("is_featured", self.is_featured)
    }

    fn record_id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn validate(&self) -> Result<(), String> {
        require(&self.title, "Title")?;
        require(&self.slug, "Slug")?;
        require(&self.content, "Content")
    }

    fn image_fields() -> &'static [&'static str] {
        &["image"]
    }

    fn image_field(&self, name: &str) -> Option<&ImageField> {
        (name == "image").then_some(&self.image)
    }

    fn image_field_mut(&mut self, name: &str) -> Option<&mut ImageField> {
        (name == "image").then_some(&mut self.image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::payload::PayloadValue;
    use serde_json::json;

    #[test]
    fn test_tags_round_trip() {
        let record: News = serde_json::from_value(json!({
            "id": 12,
            "title": "Launch",
            "tags": "rust, , wasm",
            "status": "PUBLISHED",
            "published_at": "2024-03-15T14:02:26.000Z"
        }))
        .unwrap();

        let form = NewsForm::from_record(&record, &ApiEndpoint::new("http://h/api"));
        assert_eq!(form.tags, "rust, wasm");
        assert_eq!(form.status, "published");
        assert_eq!(form.published_at, "2024-03-15T14:02");

        let payload = form.to_payload();
        assert_eq!(
            payload.get("tags"),
            Some(&PayloadValue::List(vec!["rust".to_string(), "wasm".to_string()]))
        );
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!(NewsStatus::parse(""), NewsStatus::Draft);
        assert_eq!(NewsStatus::parse(" archived "), NewsStatus::Archived);
        let draft: News = serde_json::from_value(json!({"title": "x"})).unwrap();
        assert!(!draft.is_published());
    }

    #[test]
    fn test_content_required() {
        let mut form = NewsForm::default();
        form.set_title("Hello World".to_string());
        assert_eq!(form.slug, "hello-world");
        assert_eq!(form.validate(), Err("Content is required".to_string()));
        assert!(!form.to_payload().contains("published_at"));
    }
}
