//! CLI presenter for output formatting

use std::io::{self, IsTerminal, Write};

use colored::*;

use crate::infrastructure::console::{self, ConsoleWrite};

/// Presenter for CLI output
pub struct Presenter;

impl Presenter {
    /// Create a new presenter. Colors are only used when stderr is a terminal.
    pub fn new() -> Self {
        if !io::stderr().is_terminal() {
            colored::control::set_override(false);
        }
        Self
    }

    /// Print a fatal error as a single line on stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "uclip:".red(), message);
    }

    /// Print usage text on stderr
    pub fn usage(&self, usage: &str) {
        eprintln!("{}", usage);
    }

    /// Write raw bytes to stdout
    pub fn output_bytes(&self, bytes: &[u8]) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(bytes)?;
        stdout.flush()
    }

    /// Write text to an interactive console, if stdout is one
    pub fn output_console(&self, text: &str) -> ConsoleWrite {
        console::write_console(text)
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
