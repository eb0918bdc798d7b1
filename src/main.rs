//! uclip CLI entry point

use std::env;
use std::ffi::OsString;
use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use uclip::cli::{
    load_config, resolve_mode, run, Cli, Presenter, EXIT_USAGE_ERROR, SHORT_USAGE,
};

/// Diagnostics are off unless requested, keeping stderr to one line per failure
const LOG_ENV: &str = "UCLIP_LOG";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off")),
        )
        .with_writer(io::stderr)
        .init();

    let presenter = Presenter::new();

    let mut args: Vec<OsString> = env::args_os().collect();
    if args.len() == 2 && args[1] == "/?" {
        args[1] = OsString::from("--help");
    }

    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(EXIT_USAGE_ERROR),
            };
        }
    };

    let mode = match resolve_mode(&cli, io::stdin().is_terminal()) {
        Ok(mode) => mode,
        Err(e) => {
            tracing::debug!(error = %e, "usage error");
            presenter.usage(SHORT_USAGE);
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let config = load_config();
    run(mode, &config, &presenter)
}
