use crate::domain::common::{RecordId, RecordMeta, Resource, ResourceKind};
use crate::shared::bulk_import::{BulkColumn, BulkImportable, BulkRow};
use crate::shared::form_fields::{flag_or, join_list, split_list, ImageField, ListDelimiter};
use crate::shared::form_model::{require, FormModel};
use crate::shared::lenient;
use crate::shared::media::ApiEndpoint;
use crate::shared::payload::FormPayload;
use crate::shared::slug::{stored_slug, sync_slug};
use serde::{Deserialize, Serialize};

// ============================================================================
// Record
// ============================================================================

/// Service offered by the company
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
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
    pub short_description: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub icon: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub image: String,
    #[serde(default, deserialize_with = "lenient::newline_list")]
    pub features: Vec<String>,

    #[serde(default, deserialize_with = "lenient::int")]
    pub order_number: i32,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_featured: Option<bool>,

    #[serde(flatten)]
    pub meta: RecordMeta,
}

impl Resource for Service {
    const KIND: ResourceKind = ResourceKind::Service;

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
pub struct ServiceForm {
    pub id: Option<RecordId>,
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub description: String,
    pub icon: String,
    pub image: ImageField,
    /// One feature per line
    pub features: String,
    pub order_number: i32,
    pub is_active: bool,
    pub is_featured: bool,
}

impl Default for ServiceForm {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            slug: String::new(),
            short_description: String::new(),
            description: String::new(),
            icon: String::new(),
            image: ImageField::default(),
            features: String::new(),
            order_number: 0,
            is_active: true,
            is_featured: false,
        }
    }
}

impl ServiceForm {
    pub fn set_title(&mut self, title: String) {
        sync_slug(self.is_edit(), &mut self.slug, &title);
        self.title = title;
    }
}

impl FormModel for ServiceForm {
    type Record = Service;

    fn from_record(record: &Service, endpoint: &ApiEndpoint) -> Self {
        Self {
            id: record.id().cloned(),
            title: record.title.clone(),
            slug: stored_slug(&record.slug, record.display_name()),
            short_description: record.short_description.clone(),
            description: record.description.clone(),
            icon: record.icon.clone(),
            image: ImageField::from_existing(endpoint.resolve_media_url(&record.image)),
            features: join_list(&record.features, ListDelimiter::Newline),
            order_number: record.order_number,
            is_active: flag_or(record.is_active, true),
            is_featured: flag_or(record.is_featured, false),
        }
    }

    fn to_payload(&self) -> FormPayload {
        FormPayload::new()
            .text("title", self.title.trim())
            .text("slug", self.slug.trim())
            .text("short_description", self.short_description.trim())
            .text("description", self.description.trim())
            .text("icon", self.icon.trim())
            .list("features", split_list(&self.features, ListDelimiter::Newline))
            .int("order_number", self.order_number.into())
            .flag("is_active", self.is_active)
            .flag("is_featured", self.is_featured)
    }

    fn record_id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn validate(&self) -> Result<(), String> {
        require(&self.title, "Title")?;
        require(&self.slug, "Slug")
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

impl BulkImportable for ServiceForm {
    const BULK_COLUMNS: &'static [BulkColumn] = &[
        BulkColumn::new("title", "Title"),
        BulkColumn::new("short_description", "Short description"),
        BulkColumn::new("icon", "Icon"),
    ];

    fn from_bulk_row(row: &BulkRow) -> Self {
        Self {
            title: row.name().to_string(),
            slug: row.slug.clone(),
            short_description: row.value(1).to_string(),
            icon: row.value(2).to_string(),
            order_number: row.position as i32,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::payload::PayloadValue;
    use serde_json::json;

    #[test]
    fn test_features_round_trip() {
        let record: Service = serde_json::from_value(json!({
            "id": 4,
            "title": "Cloud Migration",
            "slug": "cloud-migration",
            "features": ["Assessment", "  ", "Cutover plan"],
            "is_featured": 1
        }))
        .unwrap();

        let mut form = ServiceForm::from_record(&record, &ApiEndpoint::new("http://h/api"));
        assert_eq!(form.features, "Assessment\nCutover plan");
        assert!(form.is_featured);

        form.features.push_str("\n\n  24/7 support ");
        let payload = form.to_payload();
        assert_eq!(
            payload.get("features"),
            Some(&PayloadValue::List(vec![
                "Assessment".to_string(),
                "Cutover plan".to_string(),
                "24/7 support".to_string(),
            ]))
        );
    }

    #[test]
    fn test_features_from_joined_text() {
        let record: Service =
            serde_json::from_value(json!({"title": "Audit", "features": "One\r\nTwo\n"})).unwrap();
        assert_eq!(record.features, vec!["One", "Two"]);
    }

    #[test]
    fn test_title_drives_slug_until_saved() {
        let mut form = ServiceForm::default();
        form.set_title("Web & Mobile Apps".to_string());
        assert_eq!(form.slug, "web-mobile-apps");

        form.id = Some(RecordId::Number(9));
        form.set_title("Mobile Apps".to_string());
        assert_eq!(form.slug, "web-mobile-apps");
    }
}
