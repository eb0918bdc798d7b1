//! Low-level clipboard port interface
//!
//! Mirrors the OS primitives one to one so the write loop can drive the
//! open/empty/set/close protocol itself.

use thiserror::Error;

/// Errors reported by the low-level clipboard layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NativeError {
    #[error("native clipboard is not available on this platform")]
    Unavailable,

    #[error("clipboard session lost its open state")]
    SessionLost,

    #[error("{op} failed (os error {code})")]
    Call { op: &'static str, code: u32 },
}

/// Opaque token for an OS memory block holding NUL-terminated UTF-16 text.
///
/// The token carries no ownership by itself; see
/// [`NativeTextHandle`](crate::application::NativeTextHandle) for the owning wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawTextHandle(usize);

impl RawTextHandle {
    pub fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    pub fn as_raw(self) -> usize {
        self.0
    }
}

/// Port for the low-level clipboard API
pub trait NativeClipboard {
    /// Allocate OS memory holding `text` as NUL-terminated UTF-16.
    fn alloc_text(&self, text: &str) -> Result<RawTextHandle, NativeError>;

    /// Release memory from [`alloc_text`](Self::alloc_text).
    ///
    /// Must not be called for a handle the OS has taken ownership of.
    fn free_text(&self, handle: RawTextHandle);

    /// Open the clipboard without an owner window.
    fn open(&self) -> Result<(), NativeError>;

    /// Empty the clipboard. The session may lose its open state afterwards.
    fn empty(&self) -> Result<(), NativeError>;

    /// Place `handle` as the clipboard's Unicode text. On success the OS owns the memory.
    fn set_text(&self, handle: RawTextHandle) -> Result<(), NativeError>;

    /// Close the clipboard.
    fn close(&self) -> Result<(), NativeError>;
}

impl<T: NativeClipboard + ?Sized> NativeClipboard for &T {
    fn alloc_text(&self, text: &str) -> Result<RawTextHandle, NativeError> {
        (**self).alloc_text(text)
    }

    fn free_text(&self, handle: RawTextHandle) {
        (**self).free_text(handle)
    }

    fn open(&self) -> Result<(), NativeError> {
        (**self).open()
    }

    fn empty(&self) -> Result<(), NativeError> {
        (**self).empty()
    }

    fn set_text(&self, handle: RawTextHandle) -> Result<(), NativeError> {
        (**self).set_text(handle)
    }

    fn close(&self) -> Result<(), NativeError> {
        (**self).close()
    }
}
