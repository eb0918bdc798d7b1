//! XDG config store adapter

use std::env;
use std::fs;
use std::path::PathBuf;

use crate::application::ports::ConfigStore;
use crate::domain::config::UclipConfig;
use crate::domain::error::ConfigError;

/// Environment variable naming an alternate config file
pub const CONFIG_PATH_ENV: &str = "UCLIP_CONFIG";

/// XDG-compliant config store
pub struct XdgConfigStore {
    path: PathBuf,
}

impl XdgConfigStore {
    /// Create a new XDG config store with default path
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("uclip");

        Self {
            path: config_dir.join("config.toml"),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Use `UCLIP_CONFIG` if set, the XDG location otherwise
    pub fn from_env() -> Self {
        match env::var_os(CONFIG_PATH_ENV) {
            Some(path) if !path.is_empty() => Self::with_path(path),
            _ => Self::new(),
        }
    }

    /// Parse TOML content into UclipConfig
    fn parse_toml(content: &str) -> Result<UclipConfig, ConfigError> {
        let config: UclipConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for XdgConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for XdgConfigStore {
    fn load(&self) -> Result<UclipConfig, ConfigError> {
        if !self.exists() {
            // Return empty config if file doesn't exist
            return Ok(UclipConfig::empty());
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| ConfigError::ReadError(e.to_string()))?;

        Self::parse_toml(&content)
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EmptyTextPolicy;

    #[test]
    fn default_path_is_xdg() {
        let store = XdgConfigStore::new();
        let path = store.path();
        assert!(path.to_string_lossy().contains("uclip"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn custom_path() {
        let store = XdgConfigStore::with_path("/custom/path/config.toml");
        assert_eq!(store.path(), PathBuf::from("/custom/path/config.toml"));
    }

    #[test]
    fn missing_file_is_empty_config() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        assert!(!store.exists());
        assert_eq!(store.load().unwrap(), UclipConfig::empty());
    }

    #[test]
    fn loads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "retries = 3\nempty_text = \"set-empty\"\n").unwrap();

        let config = XdgConfigStore::with_path(&path).load().unwrap();
        assert_eq!(config.retries, Some(3));
        assert_eq!(config.cooldown_ms, None);
        assert_eq!(config.empty_text, Some(EmptyTextPolicy::SetEmpty));
    }

    #[test]
    fn parse_rejects_unknown_policy() {
        let err = XdgConfigStore::parse_toml("empty_text = \"wipe\"").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn parse_rejects_zero_retries() {
        let err = XdgConfigStore::parse_toml("retries = 0").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }
}
