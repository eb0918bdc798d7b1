//! uclip - clipboard CLI with Unicode support
//!
//! This crate bridges standard-stream I/O and the operating system's text
//! clipboard. Text can be copied from stdin (UTF-8 or UTF-16LE) or from an
//! argument, and clipboard text can be written back to stdout.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Encodings, retry policy, configuration values, and errors
//! - **Application**: Input collection, clipboard write/read use cases, and port traits
//! - **Infrastructure**: Adapter implementations (Win32, arboard, config file, console)
//! - **CLI**: Command-line interface, argument parsing, and exit codes

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
