//! API endpoint and media URL resolution.

/// Resolved API location.
///
/// `api_base` is where REST calls go; `media_base` is the same origin with a
/// trailing `/api` stripped, against which server-relative image paths are
/// resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoint {
    api_base: String,
    media_base: String,
}

impl ApiEndpoint {
    pub fn new(api_base: &str) -> Self {
        let api_base = api_base.trim().trim_end_matches('/').to_string();
        let media_base = api_base
            .strip_suffix("/api")
            .unwrap_or(&api_base)
            .to_string();
        Self {
            api_base,
            media_base,
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn media_base(&self) -> &str {
        &self.media_base
    }

    /// Build a full API URL from path segments joined with `/`
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }

    /// Resolve an image path as returned by the server into a renderable URL.
    ///
    /// Absolute URLs (and `data:`/`blob:` previews) are returned unchanged;
    /// blank paths resolve to `None`.
    pub fn resolve_media_url(&self, path: &str) -> Option<String> {
        let path = path.trim();
        if path.is_empty() {
            return None;
        }
        let lower = path.to_ascii_lowercase();
        if lower.starts_with("http://")
            || lower.starts_with("https://")
            || lower.starts_with("//")
            || lower.starts_with("data:")
            || lower.starts_with("blob:")
        {
            return Some(path.to_string());
        }
        Some(format!("{}/{}", self.media_base, path.trim_start_matches('/')))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_base_strips_api_suffix() {
        let ep = ApiEndpoint::new("https://cms.example.com/api/");
        assert_eq!(ep.api_base(), "https://cms.example.com/api");
        assert_eq!(ep.media_base(), "https://cms.example.com");

        let ep = ApiEndpoint::new("http://localhost:3000");
        assert_eq!(ep.media_base(), "http://localhost:3000");
    }

    #[test]
    fn test_url() {
        let ep = ApiEndpoint::new("http://localhost:3000/api");
        assert_eq!(ep.url("partners/5"), "http://localhost:3000/api/partners/5");
        assert_eq!(ep.url("/partners"), "http://localhost:3000/api/partners");
    }

    #[test]
    fn test_resolve_media_url() {
        let ep = ApiEndpoint::new("http://localhost:3000/api");
        assert_eq!(
            ep.resolve_media_url("/uploads/logo.png").as_deref(),
            Some("http://localhost:3000/uploads/logo.png")
        );
        assert_eq!(
            ep.resolve_media_url("uploads/logo.png").as_deref(),
            Some("http://localhost:3000/uploads/logo.png")
        );
        assert_eq!(
            ep.resolve_media_url("https://cdn.example.com/a.png").as_deref(),
            Some("https://cdn.example.com/a.png")
        );
        assert_eq!(
            ep.resolve_media_url("blob:http://localhost/123").as_deref(),
            Some("blob:http://localhost/123")
        );
        assert!(ep.resolve_media_url("  ").is_none());
    }
}
