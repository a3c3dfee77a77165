//! Path management for hcp-log configuration files.

use std::path::PathBuf;

const APP_DIR: &str = "hcp-log";
const CONFIG_FILE: &str = "config.toml";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Path management for hcp-log.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/hcp-log/           # Config directory (platform default via `dirs`)
/// └── config.toml              # Client configuration
/// ```
pub struct HcpLogPaths;

impl HcpLogPaths {
    /// Returns the hcp-log configuration directory.
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to `config.toml`.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_lives_in_app_dir() {
        if let Ok(path) = HcpLogPaths::config_file() {
            assert!(path.ends_with("hcp-log/config.toml"));
        }
    }
}
