use contracts::shared::media::ApiEndpoint;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Empty means "same host as the page, port 3000"
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_notice_timeout_ms")]
    pub notice_timeout_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AuthConfig {
    #[serde(default = "default_token_storage_key")]
    pub token_storage_key: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_storage_key: default_token_storage_key(),
        }
    }
}

fn default_notice_timeout_ms() -> u32 {
    4000
}

fn default_token_storage_key() -> String {
    "auth_access_token".to_string()
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
notice_timeout_ms = 4000

[auth]
token_storage_key = "auth_access_token"
"#;

/// Load configuration.
///
/// Order:
/// 1. `CMS_ADMIN_CONFIG` set at build time (whole TOML document)
/// 2. Embedded default
///
/// `API_BASE_URL` set at build time overrides `api.base_url` in either case.
pub fn load_config() -> AppConfig {
    let mut config = match option_env!("CMS_ADMIN_CONFIG") {
        Some(contents) => match toml::from_str::<AppConfig>(contents) {
            Ok(config) => {
                log::info!("Using build-time configuration");
                config
            }
            Err(e) => {
                log::error!("Invalid CMS_ADMIN_CONFIG, falling back to default: {}", e);
                default_config()
            }
        },
        None => default_config(),
    };

    if let Some(base_url) = option_env!("API_BASE_URL") {
        config.api.base_url = base_url.to_string();
    }
    config
}

fn default_config() -> AppConfig {
    match toml::from_str(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Embedded configuration does not parse: {}", e);
            AppConfig {
                api: ApiConfig {
                    base_url: String::new(),
                    notice_timeout_ms: default_notice_timeout_ms(),
                },
                auth: AuthConfig::default(),
            }
        }
    }
}

impl AppConfig {
    /// Resolved API location
    pub fn endpoint(&self) -> ApiEndpoint {
        let configured = self.api.base_url.trim();
        if configured.is_empty() {
            ApiEndpoint::new(&format!("{}/api", location_base()))
        } else {
            ApiEndpoint::new(configured)
        }
    }
}

// Same host as the page; the backend always listens on port 3000.
fn location_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<AppConfig, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.api.notice_timeout_ms, 4000);
        assert_eq!(config.auth.token_storage_key, "auth_access_token");
    }

    #[test]
    fn test_partial_config_gets_defaults() {
        let config: AppConfig = toml::from_str("[api]\nbase_url = \"https://cms.example.com/api/\"").unwrap();
        assert_eq!(config.api.notice_timeout_ms, 4000);
        assert_eq!(config.auth, AuthConfig::default());

        let endpoint = config.endpoint();
        assert_eq!(endpoint.api_base(), "https://cms.example.com/api");
        assert_eq!(endpoint.media_base(), "https://cms.example.com");
    }
}
