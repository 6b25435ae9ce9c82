//! Backend API endpoint configuration.

use serde::{Deserialize, Serialize};

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

/// Default user agent sent with every request.
fn default_user_agent() -> String {
    "noesis/0.1".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Backend origin (e.g., `https://api.example.org`). Calls are directed
    /// to `<base_url>/api/v1/<endpoint>`.
    #[serde(default)]
    pub base_url: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent header value.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Check if the config carries the minimum required fields.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ApiConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.user_agent, "noesis/0.1");
    }

    #[test]
    fn configured_when_base_url_set() {
        let config = ApiConfig {
            base_url: "https://api.example.org".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
    }
}
