use crate::domain::common::{RecordId, RecordMeta, Resource, ResourceKind};
use crate::shared::form_fields::{flag_or, ImageField};
use crate::shared::form_model::{require, FormModel};
use crate::shared::lenient;
use crate::shared::media::ApiEndpoint;
use crate::shared::payload::FormPayload;
use serde::{Deserialize, Serialize};

// ============================================================================
// Record
// ============================================================================

/// Landing-page hero banner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    #[serde(default)]
    pub id: Option<RecordId>,
    /// Document key of backends that expose `_id`, alone or next to `id`
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub document_id: Option<RecordId>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub subtitle: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub image: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub button_text: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub button_link: String,

    #[serde(default, deserialize_with = "lenient::int")]
    pub order_number: i32,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_active: Option<bool>,

    #[serde(flatten)]
    pub meta: RecordMeta,
}

impl Resource for Hero {
    const KIND: ResourceKind = ResourceKind::Hero;

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
pub struct HeroForm {
    pub id: Option<RecordId>,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image: ImageField,
    pub button_text: String,
    pub button_link: String,
    pub order_number: i32,
    pub is_active: bool,
}

impl Default for HeroForm {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            subtitle: String::new(),
            description: String::new(),
            image: ImageField::default(),
            button_text: String::new(),
            button_link: String::new(),
            order_number: 0,
            is_active: true,
        }
    }
}

impl FormModel for HeroForm {
    type Record = Hero;

    fn from_record(record: &Hero, endpoint: &ApiEndpoint) -> Self {
        Self {
            id: record.id().cloned(),
            title: record.title.clone(),
            subtitle: record.subtitle.clone(),
            description: record.description.clone(),
            image: ImageField::from_existing(endpoint.resolve_media_url(&record.image)),
            button_text: record.button_text.clone(),
            button_link: record.button_link.clone(),
            order_number: record.order_number,
            is_active: flag_or(record.is_active, true),
        }
    }

    fn to_payload(&self) -> FormPayload {
        FormPayload::new()
            .text("title", self.title.trim())
            .text("subtitle", self.subtitle.trim())
            .text("description", self.description.trim())
            .text("button_text", self.button_text.trim())
            .text("button_link", self.button_link.trim())
            .int("order_number", self.order_number.into())
            .flag("is_active", self.is_active)
    }

    fn record_id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn validate(&self) -> Result<(), String> {
        require(&self.title, "Title")
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
    use serde_json::json;

    #[test]
    fn test_absolute_image_kept() {
        let record: Hero = serde_json::from_value(json!({
            "id": "h1",
            "title": "Build faster",
            "image": "https://cdn.example.com/hero.jpg"
        }))
        .unwrap();
        let form = HeroForm::from_record(&record, &ApiEndpoint::new("http://h/api"));
        assert_eq!(form.image.preview.as_deref(), Some("https://cdn.example.com/hero.jpg"));
        assert!(!form.image.has_new_file());
        assert!(!form.to_payload().contains("image"));
    }

    #[test]
    fn test_validate_requires_title() {
        let form = HeroForm {
            title: "   ".to_string(),
            ..HeroForm::default()
        };
        assert_eq!(form.validate(), Err("Title is required".to_string()));
    }

    #[test]
    fn test_image_field_by_name() {
        let mut form = HeroForm::default();
        assert!(form.image_field("logo").is_none());
        if let Some(field) = form.image_field_mut("image") {
            field.select("hero.png".to_string(), Some("blob:x".to_string()));
        }
        assert_eq!(form.image_field("image").and_then(|f| f.selected_name.as_deref()), Some("hero.png"));
    }
}
