//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, and the app runner
//! that maps outcomes to exit codes.

pub mod app;
pub mod args;
pub mod presenter;

// Re-export commonly used types
pub use app::{
    load_config, run, EXIT_CLIPBOARD_ERROR, EXIT_INPUT_TOO_LARGE, EXIT_SUCCESS, EXIT_USAGE_ERROR,
    SHORT_USAGE,
};
pub use args::{resolve_mode, Cli, Mode, OutputTarget, UsageError};
pub use presenter::Presenter;
