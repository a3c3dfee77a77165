//! Client configuration loading.
//!
//! Provides loading of `ClientConfig` from ~/.config/hcp-log/config.toml with
//! environment variable overrides.

use crate::paths::HcpLogPaths;
use hcp_log_core::config::ClientConfig;
use hcp_log_core::error::{HcpLogError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Overrides `base_url`.
pub const ENV_BASE_URL: &str = "HCP_LOG_API_BASE_URL";
/// Overrides `request_timeout_secs`.
pub const ENV_TIMEOUT_SECS: &str = "HCP_LOG_TIMEOUT_SECS";

/// Storage for the client configuration file (config.toml).
///
/// Responsibilities:
/// - Load config.toml from ~/.config/hcp-log/
/// - Parse TOML into the `ClientConfig` domain model
///
/// Does NOT:
/// - Write or modify the file (read-only)
/// - Apply environment overrides (see [`ConfigStorage::load_with_env`])
pub struct ConfigStorage {
    path: PathBuf,
}

impl ConfigStorage {
    /// Creates a new ConfigStorage with the default path.
    pub fn new() -> Result<Self> {
        let path = HcpLogPaths::config_file().map_err(|e| HcpLogError::config(e.to_string()))?;
        Ok(Self { path })
    }

    /// Creates a new ConfigStorage with a custom path (for testing or `--config`).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the config file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the configuration file.
    ///
    /// # Returns
    ///
    /// - `Ok(ClientConfig)`: Parsed file, or defaults when the file doesn't exist
    /// - `Err(HcpLogError::Serialization)`: The file is not valid TOML for `ClientConfig`
    pub fn load(&self) -> Result<ClientConfig> {
        if !self.path.exists() {
            tracing::debug!(
                "[ConfigStorage] No config at {}, using defaults",
                self.path.display()
            );
            return Ok(ClientConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let config = toml::from_str(&content)?;
        tracing::debug!("[ConfigStorage] Loaded {}", self.path.display());
        Ok(config)
    }

    /// Loads the file, then applies overrides from the process environment.
    pub fn load_with_env(&self) -> Result<ClientConfig> {
        apply_env_overrides(self.load()?, |key| std::env::var(key).ok())
    }
}

/// Applies `HCP_LOG_*` overrides using the given variable lookup.
pub fn apply_env_overrides<F>(mut config: ClientConfig, lookup: F) -> Result<ClientConfig>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(base_url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
        config.base_url = base_url.trim().to_string();
    }

    if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
        config.request_timeout_secs = raw.trim().parse().map_err(|_| {
            HcpLogError::config(format!("{ENV_TIMEOUT_SECS} must be a whole number of seconds, got '{raw}'"))
        })?;
    }

    Ok(config)
}
