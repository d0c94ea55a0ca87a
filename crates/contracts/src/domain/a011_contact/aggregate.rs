use crate::domain::common::{RecordId, RecordMeta, Resource, ResourceKind, StatusTracked};
use crate::shared::lenient;
use serde::{Deserialize, Serialize};

/// Handling state of an inbound message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactStatus {
    New,
    Read,
    Replied,
    Archived,
}

impl ContactStatus {
    pub const ALL: [ContactStatus; 4] = [
        ContactStatus::New,
        ContactStatus::Read,
        ContactStatus::Replied,
        ContactStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::New => "new",
            ContactStatus::Read => "read",
            ContactStatus::Replied => "replied",
            ContactStatus::Archived => "archived",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactStatus::New => "New",
            ContactStatus::Read => "Read",
            ContactStatus::Replied => "Replied",
            ContactStatus::Archived => "Archived",
        }
    }

    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(value.trim()))
            .unwrap_or(ContactStatus::New)
    }
}

// ============================================================================
// Record
// ============================================================================

/// Message submitted through the public contact form.
///
/// Read-mostly: the admin only views these and moves them through
/// [`ContactStatus`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub id: Option<RecordId>,
    /// Document key of backends that expose `_id`, alone or next to `id`
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub document_id: Option<RecordId>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub phone: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub company: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub subject: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub message: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: String,

    #[serde(flatten)]
    pub meta: RecordMeta,
}

impl Contact {
    pub fn status(&self) -> ContactStatus {
        ContactStatus::parse(&self.status)
    }

    pub fn is_unread(&self) -> bool {
        self.status() == ContactStatus::New
    }
}

impl Resource for Contact {
    const KIND: ResourceKind = ResourceKind::Contact;

    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref().or(self.document_id.as_ref())
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl StatusTracked for Contact {
    fn status_value(&self) -> &str {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_defaults_to_new() {
        let contact: Contact = serde_json::from_value(json!({
            "id": 5,
            "name": "Jane",
            "email": "jane@example.com",
            "message": "Hello",
            "created_at": "2024-03-15 09:00:00"
        }))
        .unwrap();
        assert!(contact.is_unread());
        assert_eq!(contact.meta.created_display(), "2024-03-15 09:00:00");
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(ContactStatus::parse("Replied"), ContactStatus::Replied);
        assert_eq!(ContactStatus::parse("spam"), ContactStatus::New);
    }
}
