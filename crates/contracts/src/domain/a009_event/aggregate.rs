use crate::domain::common::{RecordId, RecordMeta, Resource, ResourceKind};
use crate::shared::form_fields::{date_input_value, flag_or, ImageField};
use crate::shared::form_model::{require, FormModel};
use crate::shared::lenient;
use crate::shared::media::ApiEndpoint;
use crate::shared::payload::FormPayload;
use crate::shared::slug::{stored_slug, sync_slug};
use serde::{Deserialize, Serialize};

// ============================================================================
// Record
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
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
    pub description: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub start_date: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub end_date: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub image: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub registration_link: String,

    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_featured: Option<bool>,

    #[serde(flatten)]
    pub meta: RecordMeta,
}

impl Resource for Event {
    const KIND: ResourceKind = ResourceKind::Event;

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
pub struct EventForm {
    pub id: Option<RecordId>,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub location: String,
    /// `YYYY-MM-DD`
    pub start_date: String,
    pub end_date: String,
    pub image: ImageField,
    pub registration_link: String,
    pub is_active: bool,
    pub is_featured: bool,
}

impl Default for EventForm {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            slug: String::new(),
            description: String::new(),
            location: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            image: ImageField::default(),
            registration_link: String::new(),
            is_active: true,
            is_featured: false,
        }
    }
}

impl EventForm {
    pub fn set_title(&mut self, title: String) {
        sync_slug(self.is_edit(), &mut self.slug, &title);
        self.title = title;
    }
}

impl FormModel for EventForm {
    type Record = Event;

    fn from_record(record: &Event, endpoint: &ApiEndpoint) -> Self {
        Self {
            id: record.id().cloned(),
            title: record.title.clone(),
            slug: stored_slug(&record.slug, record.display_name()),
            description: record.description.clone(),
            location: record.location.clone(),
            start_date: date_input_value(&record.start_date),
            end_date: date_input_value(&record.end_date),
            image: ImageField::from_existing(endpoint.resolve_media_url(&record.image)),
            registration_link: record.registration_link.clone(),
            is_active: flag_or(record.is_active, true),
            is_featured: flag_or(record.is_featured, false),
        }
    }

    fn to_payload(&self) -> FormPayload {
        FormPayload::new()
            .text("title", self.title.trim())
            .text("slug", self.slug.trim())
            .text("description", self.description.trim())
            .text("location", self.location.trim())
            .opt_text("start_date", &self.start_date)
            .opt_text("end_date", &self.end_date)
            .text("registration_link", self.registration_link.trim())
            .flag("is_active", self.is_active)
            .flag("is_featured", self.is_featured)
    }

    fn record_id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn validate(&self) -> Result<(), String> {
        require(&self.title, "Title")?;
        require(&self.slug, "Slug")?;
        require(&self.start_date, "Start date")?;
        if !self.end_date.trim().is_empty() && self.end_date.trim() < self.start_date.trim() {
            return Err("End date must not be before start date".to_string());
        }
        Ok(())
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
    fn test_dates_trimmed_to_input_format() {
        let record: Event = serde_json::from_value(json!({
            "id": 3,
            "title": "RustConf",
            "slug": "rustconf",
            "start_date": "2024-09-10T00:00:00.000Z",
            "end_date": "2024-09-12 00:00:00"
        }))
        .unwrap();
        let form = EventForm::from_record(&record, &ApiEndpoint::new("http://h/api"));
        assert_eq!(form.start_date, "2024-09-10");
        assert_eq!(form.end_date, "2024-09-12");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_slugless_record_can_be_saved_again() {
        let record: Event = serde_json::from_value(json!({
            "id": 4,
            "title": "Rust Meetup #7",
            "start_date": "2024-10-01"
        }))
        .unwrap();
        let mut form = EventForm::from_record(&record, &ApiEndpoint::new("http://h/api"));
        assert_eq!(form.slug, "rust-meetup-7");
        assert!(form.validate().is_ok());

        // still an edit: renaming leaves the derived slug alone
        form.set_title("Rust Meetup #8".to_string());
        assert_eq!(form.slug, "rust-meetup-7");
    }

    #[test]
    fn test_end_before_start_rejected() {
        let form = EventForm {
            title: "Meetup".to_string(),
            slug: "meetup".to_string(),
            start_date: "2024-05-02".to_string(),
            end_date: "2024-05-01".to_string(),
            ..EventForm::default()
        };
        assert!(form.validate().is_err());
        assert!(!EventForm {
            end_date: String::new(),
            ..form.clone()
        }
        .to_payload()
        .contains("end_date"));
    }
}
