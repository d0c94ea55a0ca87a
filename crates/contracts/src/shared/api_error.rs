use thiserror::Error;

/// Failure of a call against the CMS REST API.
///
/// Consumers treat every variant the same way (toast + log); the variants
/// exist for diagnostics and for the 401 side effect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Session expired, please sign in again")]
    Unauthorized,

    #[error("HTTP {status}")]
    Status { status: u16 },

    #[error("Request was rejected by the server")]
    Rejected,

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Failed to encode request: {0}")]
    Encode(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}
