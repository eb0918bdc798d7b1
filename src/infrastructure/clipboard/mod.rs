//! Clipboard infrastructure module
//!
//! Provides the low-level Win32 clipboard on Windows (a stand-in reporting
//! "unavailable" elsewhere) and the cross-platform arboard clipboard.

mod arboard;
mod unavailable;
#[cfg(windows)]
mod win32;

pub use self::arboard::ArboardClipboard;
pub use unavailable::UnavailableNativeClipboard;
#[cfg(windows)]
pub use win32::Win32Clipboard;

/// Low-level clipboard for the current platform
#[cfg(windows)]
pub type PlatformNativeClipboard = Win32Clipboard;

/// Low-level clipboard for the current platform
#[cfg(not(windows))]
pub type PlatformNativeClipboard = UnavailableNativeClipboard;
