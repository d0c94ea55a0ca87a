use crate::domain::common::{RecordId, RecordMeta, Resource, ResourceKind};
use crate::shared::bulk_import::{BulkColumn, BulkImportable, BulkRow};
use crate::shared::form_fields::{flag_or, ImageField};
use crate::shared::form_model::{require, FormModel};
use crate::shared::lenient;
use crate::shared::media::ApiEndpoint;
use crate::shared::payload::FormPayload;
use crate::shared::slug::{stored_slug, sync_slug};
use serde::{Deserialize, Serialize};

// ============================================================================
// Record
// ============================================================================

/// Client company ("trusted by") with an optional testimonial
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    #[serde(default)]
    pub id: Option<RecordId>,
    /// Document key of backends that expose `_id`, alone or next to `id`
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub document_id: Option<RecordId>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub slug: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub website: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub industry: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub testimonial: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub logo: String,

    #[serde(default, deserialize_with = "lenient::int")]
    pub order_number: i32,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_featured: Option<bool>,

    #[serde(flatten)]
    pub meta: RecordMeta,
}

impl Resource for Client {
    const KIND: ResourceKind = ResourceKind::Client;

    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref().or(self.document_id.as_ref())
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientForm {
    pub id: Option<RecordId>,
    pub name: String,
    pub slug: String,
    pub website: String,
    pub industry: String,
    pub testimonial: String,
    pub logo: ImageField,
    pub order_number: i32,
    pub is_active: bool,
    pub is_featured: bool,
}

impl Default for ClientForm {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            slug: String::new(),
            website: String::new(),
            industry: String::new(),
            testimonial: String::new(),
            logo: ImageField::default(),
            order_number: 0,
            is_active: true,
            is_featured: false,
        }
    }
}

impl ClientForm {
    pub fn set_name(&mut self, name: String) {
        sync_slug(self.is_edit(), &mut self.slug, &name);
        self.name = name;
    }
}

impl FormModel for ClientForm {
    type Record = Client;

    fn from_record(record: &Client, endpoint: &ApiEndpoint) -> Self {
        Self {
            id: record.id().cloned(),
            name: record.name.clone(),
            slug: stored_slug(&record.slug, record.display_name()),
            website: record.website.clone(),
            industry: record.industry.clone(),
            testimonial: record.testimonial.clone(),
            logo: ImageField::from_existing(endpoint.resolve_media_url(&record.logo)),
            order_number: record.order_number,
            is_active: flag_or(record.is_active, true),
            is_featured: flag_or(record.is_featured, false),
        }
    }

    fn to_payload(&self) -> FormPayload {
        FormPayload::new()
            .text("name", self.name.trim())
            .text("slug", self.slug.trim())
            .text("website", self.website.trim())
            .text("industry", self.industry.trim())
            .text("testimonial", self.testimonial.trim())
            .int("order_number", self.order_number.into())
            .flag("is_active", self.is_active)
            .flag("is_featured", self.is_featured)
    }

    fn record_id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn validate(&self) -> Result<(), String> {
        require(&self.name, "Name")?;
        require(&self.slug, "Slug")
    }

    fn image_fields() -> &'static [&'static str] {
        &["logo"]
    }

    fn image_field(&self, name: &str) -> Option<&ImageField> {
        (name == "logo").then_some(&self.logo)
    }

    fn image_field_mut(&mut self, name: &str) -> Option<&mut ImageField> {
        (name == "logo").then_some(&mut self.logo)
    }
}

impl BulkImportable for ClientForm {
    const BULK_COLUMNS: &'static [BulkColumn] = &[
        BulkColumn::new("name", "Name"),
        BulkColumn::new("website", "Website"),
        BulkColumn::new("industry", "Industry"),
    ];

    fn from_bulk_row(row: &BulkRow) -> Self {
        Self {
            name: row.name().to_string(),
            slug: row.slug.clone(),
            website: row.value(1).to_string(),
            industry: row.value(2).to_string(),
            order_number: row.position as i32,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flags_default_when_absent() {
        let record: Client = serde_json::from_value(json!({"id": "c-1", "name": "Globex"})).unwrap();
        let form = ClientForm::from_record(&record, &ApiEndpoint::new("http://h/api"));
        assert!(form.is_active);
        assert!(!form.is_featured);
        assert!(form.logo.preview.is_none());
    }

    #[test]
    fn test_existing_flags_are_kept() {
        let record: Client = serde_json::from_value(json!({
            "id": 2, "name": "Globex", "is_active": 0, "is_featured": "true"
        }))
        .unwrap();
        let form = ClientForm::from_record(&record, &ApiEndpoint::new("http://h/api"));
        assert!(!form.is_active);
        assert!(form.is_featured);
    }
}
