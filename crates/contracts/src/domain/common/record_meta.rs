use chrono::{DateTime, Utc};
use crate::shared::lenient;
use serde::{Deserialize, Serialize};

/// Server-assigned lifecycle timestamps. Read-only on the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordMeta {
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RecordMeta {
    /// Format creation time for list tables, "-" when the server sent none
    pub fn created_display(&self) -> String {
        format_timestamp(self.created_at)
    }

    pub fn updated_display(&self) -> String {
        format_timestamp(self.updated_at)
    }
}

fn format_timestamp(dt: Option<DateTime<Utc>>) -> String {
    dt.map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamps_are_optional() {
        let meta: RecordMeta = serde_json::from_str("{}").unwrap();
        assert_eq!(meta.created_display(), "-");

        let meta: RecordMeta =
            serde_json::from_str(r#"{"created_at":"2024-03-15T14:02:26Z"}"#).unwrap();
        assert_eq!(meta.created_display(), "2024-03-15 14:02:26");
        assert_eq!(meta.updated_display(), "-");
    }
}
