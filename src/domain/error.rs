//! Domain error types

use thiserror::Error;

/// Error when standard input exceeds the accepted size ceiling
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("input exceeds {limit} bytes, aborting")]
pub struct InputTooLarge {
    pub limit: usize,
}

/// Error when collecting input fails
#[derive(Debug, Error)]
pub enum InputError {
    #[error(transparent)]
    TooLarge(#[from] InputTooLarge),

    #[error("failed to read input: {0}")]
    Read(#[from] std::io::Error),
}

/// Error when an invalid empty-text policy is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid empty-text policy: \"{input}\". Valid policies are: clear, set-empty")]
pub struct InvalidEmptyTextPolicy {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },
}
