use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned record identifier.
///
/// Backends hand out either integer keys or string keys (UUIDs); both are
/// accepted and carried as-is. The id is immutable once assigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl RecordId {
    /// Id as used in API paths
    pub fn as_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Number(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_number_and_text() {
        let n: RecordId = serde_json::from_str("42").unwrap();
        assert_eq!(n, RecordId::Number(42));

        let t: RecordId = serde_json::from_str("\"9b2f0c5e-1111-4c7a-9c6e-3d0f3f0b1a22\"").unwrap();
        assert_eq!(t.as_string(), "9b2f0c5e-1111-4c7a-9c6e-3d0f3f0b1a22");
    }
}
