use crate::domain::common::{RecordId, RecordMeta, Resource, ResourceKind};
use crate::shared::form_fields::ImageField;
use crate::shared::form_model::{require, FormModel};
use crate::shared::lenient;
use crate::shared::media::ApiEndpoint;
use crate::shared::payload::FormPayload;
use serde::{Deserialize, Serialize};

// ============================================================================
// Record
// ============================================================================

/// Company profile. The backend keeps a single current record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyInfo {
    #[serde(default)]
    pub id: Option<RecordId>,
    /// Document key of backends that expose `_id`, alone or next to `id`
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub document_id: Option<RecordId>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub tagline: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub vision: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub mission: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub address: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub phone: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub website: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub founded_year: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub linkedin: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub instagram: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub logo: String,

    #[serde(flatten)]
    pub meta: RecordMeta,
}

impl Resource for CompanyInfo {
    const KIND: ResourceKind = ResourceKind::CompanyInfo;

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

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyInfoForm {
    pub id: Option<RecordId>,
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub vision: String,
    pub mission: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub founded_year: String,
    pub linkedin: String,
    pub instagram: String,
    pub logo: ImageField,
}

impl FormModel for CompanyInfoForm {
    type Record = CompanyInfo;

    fn from_record(record: &CompanyInfo, endpoint: &ApiEndpoint) -> Self {
        Self {
            id: record.id().cloned(),
            name: record.name.clone(),
            tagline: record.tagline.clone(),
            description: record.description.clone(),
            vision: record.vision.clone(),
            mission: record.mission.clone(),
            address: record.address.clone(),
            phone: record.phone.clone(),
            email: record.email.clone(),
            website: record.website.clone(),
            founded_year: record.founded_year.clone(),
            linkedin: record.linkedin.clone(),
            instagram: record.instagram.clone(),
            logo: ImageField::from_existing(endpoint.resolve_media_url(&record.logo)),
        }
    }

    fn to_payload(&self) -> FormPayload {
        FormPayload::new()
            .text("name", self.name.trim())
            .text("tagline", self.tagline.trim())
            .text("description", self.description.trim())
            .text("vision", self.vision.trim())
            .text("mission", self.mission.trim())
            .text("address", self.address.trim())
            .text("phone", self.phone.trim())
            .text("email", self.email.trim())
            .text("website", self.website.trim())
            .opt_text("founded_year", &self.founded_year)
            .text("linkedin", self.linkedin.trim())
            .text("instagram", self.instagram.trim())
    }

    fn record_id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn validate(&self) -> Result<(), String> {
        require(&self.name, "Company name")
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::payload::PayloadValue;
    use serde_json::json;

    #[test]
    fn test_numeric_year_and_missing_id() {
        let record: CompanyInfo = serde_json::from_value(json!({
            "name": "Acme Corp",
            "founded_year": 1998,
            "logo": "uploads/logo.svg"
        }))
        .unwrap();

        let form = CompanyInfoForm::from_record(&record, &ApiEndpoint::new("https://cms.example.com/api/"));
        assert!(!form.is_edit());
        assert_eq!(form.founded_year, "1998");
        assert_eq!(
            form.logo.preview.as_deref(),
            Some("https://cms.example.com/uploads/logo.svg")
        );
        assert_eq!(
            form.to_payload().get("founded_year"),
            Some(&PayloadValue::Text("1998".to_string()))
        );
    }

    #[test]
    fn test_blank_year_is_omitted() {
        let form = CompanyInfoForm {
            name: "Acme".to_string(),
            ..CompanyInfoForm::default()
        };
        assert!(!form.to_payload().contains("founded_year"));
        assert!(form.validate().is_ok());
    }
}
