//! Clipboard read use case

use tracing::debug;

use super::ports::{ClipboardError, ManagedClipboard};

/// Retrieves the clipboard's current text content.
///
/// Session handling and open retries belong to the managed layer.
pub struct ClipboardReader<M: ManagedClipboard> {
    managed: M,
}

impl<M: ManagedClipboard> ClipboardReader<M> {
    pub fn new(managed: M) -> Self {
        Self { managed }
    }

    /// Current text, or `None` if there is none or the clipboard is inaccessible
    pub fn read(&self) -> Option<String> {
        self.try_read().unwrap_or_else(|e| {
            debug!(error = %e, "clipboard read failed");
            None
        })
    }

    /// Like [`read`](Self::read), but keeps "inaccessible" apart from "no text"
    pub fn try_read(&self) -> Result<Option<String>, ClipboardError> {
        self.managed.get_text()
    }
}
