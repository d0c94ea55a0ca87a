use serde::{Deserialize, Serialize};

/// Body of `PATCH {collection}/{id}/status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

impl StatusUpdate {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let body = serde_json::to_value(StatusUpdate::new("read")).unwrap();
        assert_eq!(body, serde_json::json!({"status": "read"}));
    }
}
