//! Win32 clipboard adapter
//!
//! Thin wrappers over user32/kernel32: each port call maps to one API call.
//!
//! # Safety
//! All FFI calls are isolated in local unsafe blocks. Memory from
//! `alloc_text` is a movable global block, as `SetClipboardData` requires.

use std::ffi::c_void;
use std::ptr;

use windows_sys::Win32::Foundation::GetLastError;
use windows_sys::Win32::System::DataExchange::{
    CloseClipboard, EmptyClipboard, OpenClipboard, SetClipboardData,
};
use windows_sys::Win32::System::Memory::{
    GlobalAlloc, GlobalFree, GlobalLock, GlobalUnlock, GMEM_MOVEABLE,
};
use windows_sys::Win32::System::Ole::CF_UNICODETEXT;

use crate::application::ports::{NativeClipboard, NativeError, RawTextHandle};

/// Low-level clipboard backed by the Win32 API
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32Clipboard;

impl Win32Clipboard {
    pub fn new() -> Self {
        Self
    }
}

fn last_error(op: &'static str) -> NativeError {
    // SAFETY: reads the calling thread's last-error value.
    let code = unsafe { GetLastError() };
    NativeError::Call { op, code }
}

impl NativeClipboard for Win32Clipboard {
    fn alloc_text(&self, text: &str) -> Result<RawTextHandle, NativeError> {
        let wide: Vec<u16> = text.encode_utf16().chain(std::iter::once(0)).collect();
        let bytes = wide.len() * std::mem::size_of::<u16>();

        // SAFETY: the block is `bytes` long and locked while being written.
        unsafe {
            let hmem = GlobalAlloc(GMEM_MOVEABLE, bytes);
            if hmem.is_null() {
                return Err(last_error("GlobalAlloc"));
            }

            let dst = GlobalLock(hmem) as *mut u16;
            if dst.is_null() {
                let err = last_error("GlobalLock");
                GlobalFree(hmem);
                return Err(err);
            }

            ptr::copy_nonoverlapping(wide.as_ptr(), dst, wide.len());
            GlobalUnlock(hmem);

            Ok(RawTextHandle::from_raw(hmem as usize))
        }
    }

    fn free_text(&self, handle: RawTextHandle) {
        // SAFETY: the handle came from GlobalAlloc and the OS never took it.
        unsafe {
            GlobalFree(handle.as_raw() as *mut c_void);
        }
    }

    fn open(&self) -> Result<(), NativeError> {
        // SAFETY: a null owner window is allowed.
        if unsafe { OpenClipboard(ptr::null_mut()) } == 0 {
            return Err(last_error("OpenClipboard"));
        }
        Ok(())
    }

    fn empty(&self) -> Result<(), NativeError> {
        // SAFETY: no arguments; fails cleanly if the clipboard is not open.
        if unsafe { EmptyClipboard() } == 0 {
            return Err(last_error("EmptyClipboard"));
        }
        Ok(())
    }

    fn set_text(&self, handle: RawTextHandle) -> Result<(), NativeError> {
        let format = u32::from(CF_UNICODETEXT);
        // SAFETY: the handle is a live, unlocked movable global block.
        let placed = unsafe { SetClipboardData(format, handle.as_raw() as *mut c_void) };
        if placed.is_null() {
            return Err(last_error("SetClipboardData"));
        }
        Ok(())
    }

    fn close(&self) -> Result<(), NativeError> {
        // SAFETY: no arguments; fails cleanly if the clipboard is not open.
        if unsafe { CloseClipboard() } == 0 {
            return Err(last_error("CloseClipboard"));
        }
        Ok(())
    }
}
