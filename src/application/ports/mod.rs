//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod clipboard;
pub mod config;
pub mod native;
pub mod sleeper;

// Re-export common types
pub use clipboard::{ClipboardError, ManagedClipboard};
pub use config::ConfigStore;
pub use native::{NativeClipboard, NativeError, RawTextHandle};
pub use sleeper::Sleeper;
