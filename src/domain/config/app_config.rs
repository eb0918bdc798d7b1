//! Application configuration value object

use std::time::Duration;

use serde::Deserialize;

use crate::domain::error::ConfigError;
use crate::domain::policy::{EmptyTextPolicy, RetryPolicy, DEFAULT_COOLDOWN_MS, DEFAULT_RETRIES};

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UclipConfig {
    pub retries: Option<u32>,
    pub cooldown_ms: Option<u64>,
    pub empty_text: Option<EmptyTextPolicy>,
}

impl UclipConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            retries: Some(DEFAULT_RETRIES),
            cooldown_ms: Some(DEFAULT_COOLDOWN_MS),
            empty_text: Some(EmptyTextPolicy::default()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            retries: other.retries.or(self.retries),
            cooldown_ms: other.cooldown_ms.or(self.cooldown_ms),
            empty_text: other.empty_text.or(self.empty_text),
        }
    }

    /// Reject values the write path cannot honour
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.retries == Some(0) {
            return Err(ConfigError::ValidationError {
                key: "retries".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.retries.unwrap_or(DEFAULT_RETRIES),
            Duration::from_millis(self.cooldown_ms.unwrap_or(DEFAULT_COOLDOWN_MS)),
        )
    }

    pub fn empty_text_or_default(&self) -> EmptyTextPolicy {
        self.empty_text.unwrap_or_default()
    }
}
