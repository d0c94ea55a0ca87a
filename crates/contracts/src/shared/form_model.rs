use super::form_fields::ImageField;
use super::media::ApiEndpoint;
use super::payload::FormPayload;
use crate::domain::common::{RecordId, Resource};

/// Editable form state of a resource.
///
/// `from_record` turns a fetched record into form state; `to_payload`
/// serializes the state back into the fields a create/update submits.
pub trait FormModel: Clone + Default + Send + Sync + 'static {
    type Record: Resource;

    /// Build form state from a fetched record
    fn from_record(record: &Self::Record, endpoint: &ApiEndpoint) -> Self;

    /// Serialize form state (image files excluded)
    fn to_payload(&self) -> FormPayload;

    /// Id of the record being edited; `None` while creating
    fn record_id(&self) -> Option<&RecordId>;

    fn is_edit(&self) -> bool {
        self.record_id().is_some()
    }

    /// Required-field check before submission
    fn validate(&self) -> Result<(), String>;

    /// Names of the image fields this form can attach files for
    fn image_fields() -> &'static [&'static str] {
        &[]
    }

    /// Image field state by name; `None` for unknown names
    fn image_field(&self, _name: &str) -> Option<&ImageField> {
        None
    }

    fn image_field_mut(&mut self, _name: &str) -> Option<&mut ImageField> {
        None
    }
}

/// Reject a blank required field with a readable message
pub fn require(value: &str, label: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} is required", label))
    } else {
        Ok(())
    }
}
