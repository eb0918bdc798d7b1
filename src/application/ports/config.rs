//! Configuration port interface

use std::path::PathBuf;

use crate::domain::config::UclipConfig;
use crate::domain::error::ConfigError;

/// Port for configuration storage
pub trait ConfigStore {
    /// Load configuration from storage.
    ///
    /// # Returns
    /// The loaded config (all None fields if the file doesn't exist)
    fn load(&self) -> Result<UclipConfig, ConfigError>;

    /// Get the configuration file path.
    fn path(&self) -> PathBuf;

    /// Check if configuration file exists.
    fn exists(&self) -> bool;
}
