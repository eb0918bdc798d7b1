//! Cross-platform clipboard adapter using arboard
//!
//! Works on Windows, macOS, and Linux (X11/Wayland). Each call opens its own
//! `arboard::Clipboard`, which is where a busy clipboard shows up as an
//! error, so that is the step that gets retried.

use tracing::debug;

use crate::application::ports::{ClipboardError, ManagedClipboard, Sleeper};
use crate::domain::RetryPolicy;
use crate::infrastructure::sleep::ThreadSleeper;

/// Cross-platform clipboard adapter using arboard
pub struct ArboardClipboard {
    open_retry: RetryPolicy,
}

impl ArboardClipboard {
    /// Create a new arboard clipboard adapter
    pub fn new() -> Self {
        Self {
            open_retry: RetryPolicy::default(),
        }
    }

    /// Create an adapter whose reads retry opening the clipboard with `retry`
    pub fn with_open_retry(retry: RetryPolicy) -> Self {
        Self { open_retry: retry }
    }

    fn retrying<T, F>(retry: RetryPolicy, mut op: F) -> Result<T, arboard::Error>
    where
        F: FnMut() -> Result<T, arboard::Error>,
    {
        let mut attempt = 1;
        loop {
            match op() {
                Ok(value) => return Ok(value),
                Err(e)
                    if attempt >= retry.attempts()
                        || matches!(e, arboard::Error::ContentNotAvailable) =>
                {
                    return Err(e)
                }
                Err(e) => debug!(attempt, error = %e, "arboard call failed"),
            }
            attempt += 1;
            ThreadSleeper.sleep(retry.cooldown());
        }
    }
}

impl Default for ArboardClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ManagedClipboard for ArboardClipboard {
    fn clear(&self) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

        clipboard
            .clear()
            .map_err(|e| ClipboardError::ClearFailed(e.to_string()))
    }

    fn set_text(&self, text: &str, retry: RetryPolicy) -> Result<(), ClipboardError> {
        Self::retrying(retry, || {
            let mut clipboard = arboard::Clipboard::new()?;
            clipboard.set_text(text)
        })
        .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
    }

    fn get_text(&self) -> Result<Option<String>, ClipboardError> {
        let mut clipboard = Self::retrying(self.open_retry, arboard::Clipboard::new)
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

        match clipboard.get_text() {
            Ok(text) => Ok(Some(text)),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(ClipboardError::Unavailable(e.to_string())),
        }
    }
}
