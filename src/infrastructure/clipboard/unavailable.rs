//! Low-level clipboard for hosts without a direct clipboard API

use crate::application::ports::{NativeClipboard, NativeError, RawTextHandle};

/// Reports every call as unavailable, sending writes to the managed layer
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableNativeClipboard;

impl UnavailableNativeClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl NativeClipboard for UnavailableNativeClipboard {
    fn alloc_text(&self, _text: &str) -> Result<RawTextHandle, NativeError> {
        Err(NativeError::Unavailable)
    }

    fn free_text(&self, _handle: RawTextHandle) {}

    fn open(&self) -> Result<(), NativeError> {
        Err(NativeError::Unavailable)
    }

    fn empty(&self) -> Result<(), NativeError> {
        Err(NativeError::Unavailable)
    }

    fn set_text(&self, _handle: RawTextHandle) -> Result<(), NativeError> {
        Err(NativeError::Unavailable)
    }

    fn close(&self) -> Result<(), NativeError> {
        Err(NativeError::Unavailable)
    }
}
