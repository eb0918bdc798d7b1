//! Owning wrappers around the low-level clipboard resources

use tracing::debug;

use super::ports::{NativeClipboard, NativeError, RawTextHandle};

/// OS memory holding text for a low-level write.
///
/// Freed on drop unless ownership was handed to the OS with
/// [`transfer_to_os`](Self::transfer_to_os).
pub struct NativeTextHandle<'a, C: NativeClipboard + ?Sized> {
    clipboard: &'a C,
    raw: RawTextHandle,
    owned_by_os: bool,
}

impl<'a, C: NativeClipboard + ?Sized> NativeTextHandle<'a, C> {
    pub fn allocate(clipboard: &'a C, text: &str) -> Result<Self, NativeError> {
        let raw = clipboard.alloc_text(text)?;
        Ok(Self {
            clipboard,
            raw,
            owned_by_os: false,
        })
    }

    pub fn raw(&self) -> RawTextHandle {
        self.raw
    }

    /// Record that the OS accepted the memory. It will not be freed here.
    pub fn transfer_to_os(&mut self) {
        self.owned_by_os = true;
    }

    #[cfg(test)]
    pub fn is_owned_by_os(&self) -> bool {
        self.owned_by_os
    }
}

impl<C: NativeClipboard + ?Sized> Drop for NativeTextHandle<'_, C> {
    fn drop(&mut self) {
        if !self.owned_by_os {
            self.clipboard.free_text(self.raw);
        }
    }
}

/// Exclusive clipboard access, closed exactly once on drop.
pub struct ClipboardSession<'a, C: NativeClipboard + ?Sized> {
    clipboard: &'a C,
    usable: bool,
}

impl<'a, C: NativeClipboard + ?Sized> ClipboardSession<'a, C> {
    pub fn open(clipboard: &'a C) -> Result<Self, NativeError> {
        clipboard.open()?;
        Ok(Self {
            clipboard,
            usable: true,
        })
    }

    /// Whether the session can still be written to
    pub fn is_usable(&self) -> bool {
        self.usable
    }

    /// Empty the clipboard, then reopen it.
    ///
    /// Emptying a clipboard opened without an owner window drops ownership,
    /// so a later set or close would fail without the second open. A failed
    /// empty leaves the session as it was.
    pub fn empty(&mut self) -> Result<(), NativeError> {
        self.clipboard.empty()?;
        if let Err(e) = self.clipboard.open() {
            debug!(error = %e, "reopen after empty failed");
            self.usable = false;
        }
        Ok(())
    }

    /// Hand `handle` to the clipboard as its Unicode text.
    pub fn set_text(&self, handle: RawTextHandle) -> Result<(), NativeError> {
        if !self.usable {
            return Err(NativeError::SessionLost);
        }
        self.clipboard.set_text(handle)
    }
}

impl<C: NativeClipboard + ?Sized> Drop for ClipboardSession<'_, C> {
    fn drop(&mut self) {
        if let Err(e) = self.clipboard.close() {
            debug!(error = %e, "close failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{FakeNative, NativeCall};

    #[test]
    fn handle_is_freed_on_drop() {
        let native = FakeNative::new();
        let handle = NativeTextHandle::allocate(&native, "abc").unwrap();
        let raw = handle.raw();
        drop(handle);
        assert_eq!(native.frees(), vec![raw]);
    }

    #[test]
    fn transferred_handle_is_not_freed() {
        let native = FakeNative::new();
        let mut handle = NativeTextHandle::allocate(&native, "abc").unwrap();
        handle.transfer_to_os();
        assert!(handle.is_owned_by_os());
        drop(handle);
        assert!(native.frees().is_empty());
    }

    #[test]
    fn failed_allocation_frees_nothing() {
        let native = FakeNative::new().failing_alloc();
        assert!(NativeTextHandle::allocate(&native, "abc").is_err());
        assert!(native.frees().is_empty());
    }

    #[test]
    fn session_closes_once_on_drop() {
        let native = FakeNative::new();
        {
            let mut session = ClipboardSession::open(&native).unwrap();
            session.empty().unwrap();
        }
        assert_eq!(
            native.calls(),
            vec![
                NativeCall::Open(true),
                NativeCall::Empty(true),
                NativeCall::Open(true),
                NativeCall::Close,
            ]
        );
    }

    #[test]
    fn failed_open_never_closes() {
        let native = FakeNative::new().failing_opens(1);
        assert!(ClipboardSession::open(&native).is_err());
        assert_eq!(native.calls(), vec![NativeCall::Open(false)]);
    }

    #[test]
    fn lost_reopen_blocks_set_but_still_closes() {
        let native = FakeNative::new().failing_reopen();
        let handle = NativeTextHandle::allocate(&native, "abc").unwrap();
        {
            let mut session = ClipboardSession::open(&native).unwrap();
            session.empty().unwrap();
            assert!(!session.is_usable());
            assert!(session.set_text(handle.raw()).is_err());
        }
        assert_eq!(native.count(|c| matches!(c, NativeCall::Set(_))), 0);
        assert_eq!(native.count(|c| *c == NativeCall::Close), 1);
    }
}
