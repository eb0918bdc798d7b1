//! Managed clipboard port interface

use thiserror::Error;

use crate::domain::RetryPolicy;

/// Clipboard errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to copy to clipboard: {0}")]
    CopyFailed(String),

    #[error("Failed to clear clipboard: {0}")]
    ClearFailed(String),
}

/// Port for the higher-level clipboard layer.
///
/// Implementations own session handling: each call opens and closes the
/// clipboard itself, retrying the open as the platform library sees fit.
pub trait ManagedClipboard {
    /// Remove all clipboard content.
    fn clear(&self) -> Result<(), ClipboardError>;

    /// Store `text` as the clipboard's text content.
    ///
    /// # Arguments
    /// * `text` - The text to copy
    /// * `retry` - Attempts and cooldown the layer should use internally
    fn set_text(&self, text: &str, retry: RetryPolicy) -> Result<(), ClipboardError>;

    /// Fetch the clipboard's text content.
    ///
    /// # Returns
    /// `Ok(None)` when the clipboard holds no text format, an error when the
    /// clipboard could not be accessed at all
    fn get_text(&self) -> Result<Option<String>, ClipboardError>;
}

impl<T: ManagedClipboard + ?Sized> ManagedClipboard for &T {
    fn clear(&self) -> Result<(), ClipboardError> {
        (**self).clear()
    }

    fn set_text(&self, text: &str, retry: RetryPolicy) -> Result<(), ClipboardError> {
        (**self).set_text(text, retry)
    }

    fn get_text(&self) -> Result<Option<String>, ClipboardError> {
        (**self).get_text()
    }
}
