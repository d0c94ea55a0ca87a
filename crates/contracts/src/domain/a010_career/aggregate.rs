use crate::domain::common::{RecordId, RecordMeta, Resource, ResourceKind, StatusTracked};
use crate::shared::form_fields::{date_input_value, flag_or, join_list, split_list, ListDelimiter};
use crate::shared::form_model::{require, FormModel};
use crate::shared::lenient;
use crate::shared::media::ApiEndpoint;
use crate::shared::payload::FormPayload;
use crate::shared::slug::{stored_slug, sync_slug};
use serde::{Deserialize, Serialize};

/// Hiring state of a vacancy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CareerStatus {
    Open,
    Closed,
}

impl CareerStatus {
    pub const ALL: [CareerStatus; 2] = [CareerStatus::Open, CareerStatus::Closed];

    pub fn as_str(&self) -> &'static str {
        match self {
            CareerStatus::Open => "open",
            CareerStatus::Closed => "closed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CareerStatus::Open => "Open",
            CareerStatus::Closed => "Closed",
        }
    }

    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("closed") {
            CareerStatus::Closed
        } else {
            CareerStatus::Open
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            CareerStatus::Open => CareerStatus::Closed,
            CareerStatus::Closed => CareerStatus::Open,
        }
    }
}

// ============================================================================
// Record
// ============================================================================

/// Job vacancy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Career {
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
    pub department: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub employment_type: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,

    #[serde(default, deserialize_with = "lenient::newline_list")]
    pub requirements: Vec<String>,
    #[serde(default, deserialize_with = "lenient::newline_list")]
    pub responsibilities: Vec<String>,
    #[serde(default, deserialize_with = "lenient::newline_list")]
    pub benefits: Vec<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub salary_range: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub deadline: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_active: Option<bool>,

    #[serde(flatten)]
    pub meta: RecordMeta,
}

impl Career {
    pub fn status(&self) -> CareerStatus {
        CareerStatus::parse(&self.status)
    }
}

impl Resource for Career {
    const KIND: ResourceKind = ResourceKind::Career;

    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref().or(self.document_id.as_ref())
    }

    fn display_name(&self) -> &str {
        &self.title
    }
}

impl StatusTracked for Career {
    fn status_value(&self) -> &str {
        &self.status
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerForm {
    pub id: Option<RecordId>,
    pub title: String,
    pub slug: String,
    pub department: String,
    pub location: String,
    pub employment_type: String,
    pub description: String,
    pub requirements: String,
    pub responsibilities: String,
    pub benefits: String,
    pub salary_range: String,
    pub deadline: String,
    pub status: String,
    pub is_active: bool,
}

impl Default for CareerForm {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            slug: String::new(),
            department: String::new(),
            location: String::new(),
            employment_type: "full-time".to_string(),
            description: String::new(),
            requirements: String::new(),
            responsibilities: String::new(),
            benefits: String::new(),
            salary_range: String::new(),
            deadline: String::new(),
            status: CareerStatus::Open.as_str().to_string(),
            is_active: true,
        }
    }
}

impl CareerForm {
    pub const EMPLOYMENT_TYPES: [&'static str; 4] = ["full-time", "part-time", "contract", "internship"];

    pub fn set_title(&mut self, title: String) {
        sync_slug(self.is_edit(), &mut self.slug, &title);
        self.title = title;
    }
}

impl FormModel for CareerForm {
    type Record = Career;

    fn from_record(record: &Career, _endpoint: &ApiEndpoint) -> Self {
        Self {
            id: record.id().cloned(),
            title: record.title.clone(),
            slug: stored_slug(&record.slug, record.display_name()),
            department: record.department.clone(),
            location: record.location.clone(),
            employment_type: record.employment_type.clone(),
            description: record.description.clone(),
            requirements: join_list(&record.requirements, ListDelimiter::Newline),
            responsibilities: join_list(&record.responsibilities, ListDelimiter::Newline),
            benefits: join_list(&record.benefits, ListDelimiter::Newline),
            salary_range: record.salary_range.clone(),
            deadline: date_input_value(&record.deadline),
            status: record.status().as_str().to_string(),
            is_active: flag_or(record.is_active, true),
        }
    }

    fn to_payload(&self) -> FormPayload {
        FormPayload::new()
            .text("title", self.title.trim())
            .text("slug", self.slug.trim())
            .text("department", self.department.trim())
            .text("location", self.location.trim())
            .text("employment_type", self.employment_type.trim())
            .text("description", self.description.trim())
            .list("requirements", split_list(&self.requirements, ListDelimiter::Newline))
            .list(
                "responsibilities",
                split_list(&self.responsibilities, ListDelimiter::Newline),
            )
            .list("benefits", split_list(&self.benefits, ListDelimiter::Newline))
            .text("salary_range", self.salary_range.trim())
            .opt_text("deadline", &self.deadline)
            .text("status", CareerStatus::parse(&self.status).as_str())
            .flag("is_active", self.is_active)
    }

    fn record_id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn validate(&self) -> Result<(), String> {
        require(&self.title, "Title")?;
        require(&self.slug, "Slug")?;
        require(&self.description, "Description")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::payload::{MultipartPart, PayloadValue, RequestBody};
    use serde_json::json;

    fn record() -> Career {
        serde_json::from_value(json!({
            "id": "c7",
            "title": "Rust Engineer",
            "slug": "rust-engineer",
            "description": "Build things",
            "requirements": ["3+ years Rust", "", "  async experience "],
            "responsibilities": "Own services\nReview code",
            "benefits": null,
            "status": "closed",
            "is_active": "0"
        }))
        .unwrap()
    }

    #[test]
    fn test_list_fields_round_trip() {
        let form = CareerForm::from_record(&record(), &ApiEndpoint::new("http://h/api"));
        assert_eq!(form.requirements, "3+ years Rust\nasync experience");
        assert_eq!(form.responsibilities, "Own services\nReview code");
        assert_eq!(form.benefits, "");
        assert_eq!(form.status, "closed");
        assert!(!form.is_active);

        let payload = form.to_payload();
        assert_eq!(
            payload.get("requirements"),
            Some(&PayloadValue::List(vec![
                "3+ years Rust".to_string(),
                "async experience".to_string()
            ]))
        );
        assert_eq!(payload.get("benefits"), Some(&PayloadValue::List(Vec::new())));
    }

    #[test]
    fn test_lists_become_repeated_parts() {
        let form = CareerForm::from_record(&record(), &ApiEndpoint::new("http://h/api"));
        let body = form.to_payload().into_body(vec![("attachment".to_string(), ())]);
        let RequestBody::Multipart(parts) = body else {
            panic!("expected multipart");
        };
        let responsibilities: Vec<&str> = parts
            .iter()
            .filter_map(|p| match p {
                MultipartPart::Text { name, value } if name == "responsibilities" => {
                    Some(value.as_str())
                }
                _ => None,
            })
            .collect();
        assert_eq!(responsibilities, vec!["Own services", "Review code"]);
    }

    #[test]
    fn test_status_toggle() {
        assert_eq!(CareerStatus::parse("").toggled(), CareerStatus::Closed);
        assert_eq!(record().status().toggled(), CareerStatus::Open);
    }
}
