//! Clipboard write use case
//!
//! Text is placed with the low-level API first, retrying each attempt
//! independently. Only when every low-level attempt failed (or the layer is
//! missing on this host) does the managed layer get a single, internally
//! retried call.

use thiserror::Error;
use tracing::debug;

use crate::domain::{EmptyTextPolicy, RetryPolicy};

use super::ports::{ClipboardError, ManagedClipboard, NativeClipboard, NativeError, Sleeper};
use super::session::{ClipboardSession, NativeTextHandle};

/// Error when both write strategies are exhausted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("copy failed: {0}")]
pub struct ClipboardUnavailable(#[source] pub ClipboardError);

/// Which strategy ended up placing the content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStrategy {
    /// Low-level write, with the 1-based attempt that succeeded
    Native { attempt: u32 },
    Managed,
}

/// Publishes text as the clipboard's authoritative text content
pub struct ClipboardWriter<N, M, S>
where
    N: NativeClipboard,
    M: ManagedClipboard,
    S: Sleeper,
{
    native: N,
    managed: M,
    sleeper: S,
    retry: RetryPolicy,
    empty_text: EmptyTextPolicy,
}

impl<N, M, S> ClipboardWriter<N, M, S>
where
    N: NativeClipboard,
    M: ManagedClipboard,
    S: Sleeper,
{
    /// Create a writer with the default retry and empty-text policies
    pub fn new(native: N, managed: M, sleeper: S) -> Self {
        Self {
            native,
            managed,
            sleeper,
            retry: RetryPolicy::default(),
            empty_text: EmptyTextPolicy::default(),
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_empty_text(mut self, policy: EmptyTextPolicy) -> Self {
        self.empty_text = policy;
        self
    }

    /// Place `text` on the clipboard.
    ///
    /// An empty `text` clears the clipboard under [`EmptyTextPolicy::Clear`].
    ///
    /// # Errors
    /// `ClipboardUnavailable` when both strategies failed
    pub fn publish(&self, text: &str) -> Result<WriteStrategy, ClipboardUnavailable> {
        if text.is_empty() && self.empty_text == EmptyTextPolicy::Clear {
            return self.clear();
        }

        if let Some(attempt) = self.write_native(text) {
            return Ok(WriteStrategy::Native { attempt });
        }

        debug!("falling back to managed clipboard");
        if let Err(e) = self.managed.clear() {
            debug!(error = %e, "managed clear failed");
        }
        self.managed
            .set_text(text, self.retry)
            .map(|()| WriteStrategy::Managed)
            .map_err(ClipboardUnavailable)
    }

    /// Leave the clipboard without any content.
    pub fn clear(&self) -> Result<WriteStrategy, ClipboardUnavailable> {
        if let Some(attempt) = self.retry_native(|| {
            let mut session = ClipboardSession::open(&self.native)?;
            session.empty()
        }) {
            return Ok(WriteStrategy::Native { attempt });
        }

        debug!("falling back to managed clear");
        self.managed
            .clear()
            .map(|()| WriteStrategy::Managed)
            .map_err(ClipboardUnavailable)
    }

    fn write_native(&self, text: &str) -> Option<u32> {
        let mut handle = match NativeTextHandle::allocate(&self.native, text) {
            Ok(handle) => handle,
            Err(e) => {
                debug!(error = %e, "native text allocation failed");
                return None;
            }
        };

        let attempt = self.retry_native(|| self.native_attempt(&mut handle));
        if attempt.is_none() {
            // The OS never took it, so it is ours to release before falling back.
            drop(handle);
        }
        attempt
    }

    /// One open/empty/set/close round. The session closes when it goes out of scope.
    fn native_attempt(&self, handle: &mut NativeTextHandle<'_, N>) -> Result<(), NativeError> {
        let mut session = ClipboardSession::open(&self.native)?;
        if let Err(e) = session.empty() {
            debug!(error = %e, "empty failed");
        }
        session.set_text(handle.raw())?;
        handle.transfer_to_os();
        debug!("clipboard took ownership of text handle");
        Ok(())
    }

    /// Run `attempt` up to the policy's limit, sleeping before every retry.
    fn retry_native<F>(&self, mut attempt: F) -> Option<u32>
    where
        F: FnMut() -> Result<(), NativeError>,
    {
        for n in 1..=self.retry.attempts() {
            if n > 1 {
                self.sleeper.sleep(self.retry.cooldown());
            }
            match attempt() {
                Ok(()) => return Some(n),
                Err(NativeError::Unavailable) => {
                    debug!("native clipboard unavailable");
                    return None;
                }
                Err(e) => debug!(attempt = n, error = %e, "native clipboard attempt failed"),
            }
        }
        None
    }
}
