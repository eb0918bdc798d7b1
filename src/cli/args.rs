//! CLI argument definitions using Clap
//!
//! Flags are taken literally: one mode per invocation, and `-c` takes its
//! TEXT verbatim even when it starts with `-`.

use clap::{ArgAction, ArgGroup, Parser};
use thiserror::Error;

use crate::domain::TextEncoding;

/// uclip - clipboard CLI with Unicode support
#[derive(Parser, Debug)]
#[command(name = "uclip")]
#[command(version)]
#[command(about = "Copy text to the clipboard, or write clipboard text to standard output")]
#[command(long_about = None)]
#[command(
    after_help = "On Linux, copied text outlives uclip only while a clipboard manager runs."
)]
#[command(group(
    ArgGroup::new("mode")
        .multiple(false)
        .args(["input_utf8", "input_utf16", "copy", "output", "output_utf16"])
))]
pub struct Cli {
    /// Copy standard input as UTF-8 to the clipboard (default when input is redirected)
    #[arg(short = 'i')]
    pub input_utf8: bool,

    /// Copy standard input as UTF-16LE to the clipboard
    #[arg(short = 'I')]
    pub input_utf16: bool,

    /// Copy TEXT to the clipboard (empty if no TEXT)
    #[arg(
        short = 'c',
        value_name = "TEXT",
        num_args = 0..=1,
        default_missing_value = "",
        allow_hyphen_values = true
    )]
    pub copy: Option<String>,

    /// Write clipboard text to standard output as UTF-8 (-oo: skip console detection)
    #[arg(short = 'o', action = ArgAction::Count)]
    pub output: u8,

    /// Write clipboard text to standard output as UTF-16LE
    #[arg(short = 'O')]
    pub output_utf16: bool,
}

/// Where clipboard text read with `-o`/`-oo`/`-O` goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputTarget {
    /// Straight to an interactive console if there is one, UTF-8 bytes otherwise
    Console,
    Bytes(TextEncoding),
}

/// The single operation an invocation performs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    CopyInput(TextEncoding),
    CopyText(String),
    Paste(OutputTarget),
}

/// Arguments clap accepts but uclip does not
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("-o may be given at most twice")]
    TooManyOutputFlags,

    #[error("no input is redirected")]
    InteractiveInput,
}

impl Cli {
    /// Mode selected by flags, `None` when no flag was given
    pub fn mode(&self) -> Result<Option<Mode>, UsageError> {
        let mode = if self.input_utf8 {
            Mode::CopyInput(TextEncoding::Utf8)
        } else if self.input_utf16 {
            Mode::CopyInput(TextEncoding::Utf16Le)
        } else if let Some(text) = &self.copy {
            Mode::CopyText(text.clone())
        } else if self.output_utf16 {
            Mode::Paste(OutputTarget::Bytes(TextEncoding::Utf16Le))
        } else {
            match self.output {
                0 => return Ok(None),
                1 => Mode::Paste(OutputTarget::Console),
                2 => Mode::Paste(OutputTarget::Bytes(TextEncoding::Utf8)),
                _ => return Err(UsageError::TooManyOutputFlags),
            }
        };
        Ok(Some(mode))
    }
}

/// Pick the mode, defaulting to `-i` unless stdin is an interactive terminal
pub fn resolve_mode(cli: &Cli, stdin_is_terminal: bool) -> Result<Mode, UsageError> {
    match cli.mode()? {
        Some(mode) => Ok(mode),
        None if stdin_is_terminal => Err(UsageError::InteractiveInput),
        None => Ok(Mode::CopyInput(TextEncoding::Utf8)),
    }
}
