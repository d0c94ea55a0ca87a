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

/// Partner company shown in the partners strip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Partner {
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
    pub category: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    /// Server-relative logo path
    #[serde(default, deserialize_with = "lenient::text")]
    pub logo: String,

    #[serde(default, deserialize_with = "lenient::int")]
    pub order_number: i32,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_active: Option<bool>,

    #[serde(flatten)]
    pub meta: RecordMeta,
}

impl Resource for Partner {
    const KIND: ResourceKind = ResourceKind::Partner;

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

/// Editable state of the partner form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerForm {
    pub id: Option<RecordId>,
    pub name: String,
    pub slug: String,
    pub website: String,
    pub category: String,
    pub description: String,
    pub logo: ImageField,
    pub order_number: i32,
    pub is_active: bool,
}

impl Default for PartnerForm {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            slug: String::new(),
            website: String::new(),
            category: String::new(),
            description: String::new(),
            logo: ImageField::default(),
            order_number: 0,
            is_active: true,
        }
    }
}

impl PartnerForm {
    /// Name input; drives the slug while creating
    pub fn set_name(&mut self, name: String) {
        sync_slug(self.is_edit(), &mut self.slug, &name);
        self.name = name;
    }
}

impl FormModel for PartnerForm {
    type Record = Partner;

    fn from_record(record: &Partner, endpoint: &ApiEndpoint) -> Self {
        Self {
            id: record.id().cloned(),
            name: record.name.clone(),
            slug: stored_slug(&record.slug, record.display_name()),
            website: record.website.clone(),
            category: record.category.clone(),
            description: record.description.clone(),
            logo: ImageField::from_existing(endpoint.resolve_media_url(&record.logo)),
            order_number: record.order_number,
            is_active: flag_or(record.is_active, true),
        }
    }

    fn to_payload(&self) -> FormPayload {
        FormPayload::new()
            .text("name", self.name.trim())
            .text("slug", self.slug.trim())
            .text("website", self.website.trim())
            .text("category", self.category.trim())
            .text("description", self.description.trim())
            .int("order_number", self.order_number.into())
            .flag("is_active", self.is_active)
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

impl BulkImportable for PartnerForm {
    const BULK_COLUMNS: &'static [BulkColumn] = &[
        BulkColumn::new("name", "Name"),
        BulkColumn::new("website", "Website"),
        BulkColumn::new("category", "Category"),
    ];

    fn from_bulk_row(row: &BulkRow) -> Self {
        Self {
            name: row.name().to_string(),
            slug: row.slug.clone(),
            website: row.value(1).to_string(),
            category: row.value(2).to_string(),
            order_number: row.position as i32,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::bulk_import::parse_bulk_text;
    use crate::shared::payload::PayloadValue;
    use serde_json::json;

    fn endpoint() -> ApiEndpoint {
        ApiEndpoint::new("http://localhost:3000/api")
    }

    #[test]
    fn test_record_to_form() {
        let record: Partner = serde_json::from_value(json!({
            "id": 7,
            "name": "Acme",
            "slug": "acme",
            "website": "https://acme.io",
            "logo": "/uploads/partners/acme.png",
            "order_number": "3",
            "is_active": null,
            "created_at": "2024-03-15T14:02:26Z"
        }))
        .unwrap();

        let form = PartnerForm::from_record(&record, &endpoint());
        assert!(form.is_edit());
        assert!(form.is_active);
        assert_eq!(form.order_number, 3);
        assert_eq!(
            form.logo.preview.as_deref(),
            Some("http://localhost:3000/uploads/partners/acme.png")
        );
    }

    #[test]
    fn test_slug_follows_name_only_while_creating() {
        let mut form = PartnerForm::default();
        form.set_name("Acme Holdings".to_string());
        assert_eq!(form.slug, "acme-holdings");

        let mut form = PartnerForm {
            id: Some(RecordId::Number(1)),
            slug: "acme".to_string(),
            ..PartnerForm::default()
        };
        form.set_name("Acme Holdings".to_string());
        assert_eq!(form.name, "Acme Holdings");
        assert_eq!(form.slug, "acme");
    }

    #[test]
    fn test_bulk_row_to_payload() {
        let preview = parse_bulk_text("Beta,,\nAcme, https://acme.io, Tech", PartnerForm::BULK_COLUMNS);
        let form = PartnerForm::from_bulk_row(&preview.rows[1]);
        let payload = form.to_payload();

        assert_eq!(payload.get("name"), Some(&PayloadValue::Text("Acme".to_string())));
        assert_eq!(payload.get("slug"), Some(&PayloadValue::Text("acme".to_string())));
        assert_eq!(payload.get("category"), Some(&PayloadValue::Text("Tech".to_string())));
        assert_eq!(payload.get("order_number"), Some(&PayloadValue::Int(2)));
        assert_eq!(payload.get("is_active"), Some(&PayloadValue::Bool(true)));
        assert!(!payload.contains("logo"));
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_id_and_document_key() {
        use crate::shared::envelope::unwrap_envelope;

        let partners: Vec<Partner> = unwrap_envelope(json!({"data": [
            {"_id": "65f0", "id": "65f0", "name": "Acme"},
            {"_id": "65f1", "name": "Globex"},
            {"id": 7, "name": "Initech"}
        ]}))
        .unwrap();

        let ids: Vec<Option<&RecordId>> = partners.iter().map(|p| p.id()).collect();
        assert_eq!(
            ids,
            vec![
                Some(&RecordId::Text("65f0".to_string())),
                Some(&RecordId::Text("65f1".to_string())),
                Some(&RecordId::Number(7)),
            ]
        );

        let form = PartnerForm::from_record(&partners[1], &ApiEndpoint::new("http://h/api"));
        assert!(form.is_edit());
        assert_eq!(form.slug, "globex");
    }

    #[test]
    fn test_validate() {
        assert!(PartnerForm::default().validate().is_err());
    }
}
