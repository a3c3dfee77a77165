use serde::{Deserialize, Serialize};

use crate::status::ConcurrencyMode;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration, as read from `config.toml`.
///
/// Every key is optional in the file; missing keys take the defaults below.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the backend API (no trailing slash needed).
    pub base_url: String,
    /// Per-request timeout applied by the HTTP transport.
    pub request_timeout_secs: u64,
    /// How overlapping submissions are handled.
    pub concurrency: ConcurrencyMode,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            concurrency: ConcurrencyMode::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: ClientConfig = toml::from_str(r#"concurrency = "shared""#).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.concurrency, ConcurrencyMode::Shared);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let result: Result<ClientConfig, _> = toml::from_str(r#"concurrency = "parallel""#);
        assert!(result.is_err());
    }
}
