use super::api_error::ApiError;
use std::fmt;
use std::sync::Arc;

/// Explicit session context handed to the resource client at construction.
///
/// Carries the bearer token and the callback fired when the server answers
/// 401. What "unauthorized" means for the application (clear stored token,
/// show sign-in) lives in that callback, not in the client.
#[derive(Clone)]
pub struct Session {
    access_token: Option<String>,
    on_unauthorized: Arc<dyn Fn() + Send + Sync>,
}

impl Session {
    pub fn new(
        access_token: Option<String>,
        on_unauthorized: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self {
            access_token: access_token.filter(|t| !t.trim().is_empty()),
            on_unauthorized: Arc::new(on_unauthorized),
        }
    }

    /// Session without a token whose 401 handler does nothing
    pub fn anonymous() -> Self {
        Self::new(None, || {})
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Value for the `Authorization` header, if a token is present
    pub fn authorization_header(&self) -> Option<String> {
        self.access_token
            .as_ref()
            .map(|token| format!("Bearer {}", token))
    }

    /// Map an HTTP status to the client's error taxonomy.
    ///
    /// A 401 fires the injected callback before the error is returned.
    pub fn check_status(&self, status: u16) -> Result<(), ApiError> {
        match status {
            200..=299 => Ok(()),
            401 => {
                (self.on_unauthorized)();
                Err(ApiError::Unauthorized)
            }
            _ => Err(ApiError::Status { status }),
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("has_token", &self.access_token.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_authorization_header() {
        let session = Session::new(Some("abc".to_string()), || {});
        assert_eq!(session.authorization_header().as_deref(), Some("Bearer abc"));

        let blank = Session::new(Some("  ".to_string()), || {});
        assert!(blank.authorization_header().is_none());
        assert!(Session::anonymous().access_token().is_none());
    }

    #[test]
    fn test_unauthorized_fires_callback_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let session = Session::new(Some("t".to_string()), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(session.check_status(200), Ok(()));
        assert_eq!(session.check_status(204), Ok(()));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(session.check_status(401), Err(ApiError::Unauthorized));
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        assert_eq!(session.check_status(500), Err(ApiError::Status { status: 500 }));
        assert_eq!(session.check_status(403), Err(ApiError::Status { status: 403 }));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
