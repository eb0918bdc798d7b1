//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the Win32 clipboard, arboard, the config file,
//! and the console.

pub mod clipboard;
pub mod config;
pub mod console;
pub mod sleep;

// Re-export adapters
pub use clipboard::{ArboardClipboard, PlatformNativeClipboard};
pub use config::XdgConfigStore;
pub use sleep::ThreadSleeper;
