//! Application layer - Use cases and port interfaces
//!
//! Contains the input collector, the clipboard write/read use cases,
//! and the port interfaces they are injected with.

pub mod collect;
pub mod ports;
pub mod publish;
pub mod read;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

// Re-export use cases
pub use collect::{InputCollector, INPUT_LIMIT};
pub use publish::{ClipboardUnavailable, ClipboardWriter, WriteStrategy};
pub use read::ClipboardReader;
pub use session::{ClipboardSession, NativeTextHandle};
