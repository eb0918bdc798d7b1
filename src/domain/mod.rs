//! Domain layer - Core value objects
//!
//! Contains text encodings, retry policy, configuration values, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod encoding;
pub mod error;
pub mod policy;

// Re-export common types
pub use config::UclipConfig;
pub use encoding::TextEncoding;
pub use error::*;
pub use policy::{EmptyTextPolicy, RetryPolicy};
