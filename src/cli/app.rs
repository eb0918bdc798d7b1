//! Main app runner

use std::env;
use std::io::{self, Read};
use std::process::ExitCode;

use tracing::debug;

use crate::application::ports::ConfigStore;
use crate::application::{ClipboardReader, ClipboardWriter, InputCollector, WriteStrategy};
use crate::domain::{InputError, TextEncoding, UclipConfig};
use crate::infrastructure::console::ConsoleWrite;
use crate::infrastructure::{
    ArboardClipboard, PlatformNativeClipboard, ThreadSleeper, XdgConfigStore,
};

use super::args::{Mode, OutputTarget};
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_USAGE_ERROR: u8 = 1;
pub const EXIT_CLIPBOARD_ERROR: u8 = 2;
pub const EXIT_INPUT_TOO_LARGE: u8 = 3;

pub const SHORT_USAGE: &str = "Usage: uclip -h | [-i] | -I | -c [TEXT] | -o | -O";

/// Environment overrides for the config file
pub const RETRIES_ENV: &str = "UCLIP_RETRIES";
pub const COOLDOWN_ENV: &str = "UCLIP_COOLDOWN_MS";
pub const EMPTY_TEXT_ENV: &str = "UCLIP_EMPTY_TEXT";

/// Run the selected mode to completion
pub fn run(mode: Mode, config: &UclipConfig, presenter: &Presenter) -> ExitCode {
    let code = match mode {
        Mode::CopyText(text) => copy(&text, config, presenter),
        Mode::CopyInput(encoding) => copy_input(
            encoding,
            io::stdin().lock(),
            &InputCollector::new(),
            config,
            presenter,
        ),
        Mode::Paste(target) => paste(target, config, presenter),
    };
    ExitCode::from(code)
}

fn copy_input<R: Read>(
    encoding: TextEncoding,
    source: R,
    collector: &InputCollector,
    config: &UclipConfig,
    presenter: &Presenter,
) -> u8 {
    let bytes = match collector.collect(source) {
        Ok(bytes) => bytes,
        Err(InputError::TooLarge(e)) => {
            presenter.error(&e.to_string());
            return EXIT_INPUT_TOO_LARGE;
        }
        Err(e) => {
            presenter.error(&e.to_string());
            return EXIT_CLIPBOARD_ERROR;
        }
    };
    debug!(len = bytes.len(), %encoding, "collected input");

    copy(&encoding.decode(&bytes), config, presenter)
}

fn copy(text: &str, config: &UclipConfig, presenter: &Presenter) -> u8 {
    let writer = ClipboardWriter::new(
        PlatformNativeClipboard::new(),
        ArboardClipboard::new(),
        ThreadSleeper,
    )
    .with_retry(config.retry_policy())
    .with_empty_text(config.empty_text_or_default());

    match writer.publish(text) {
        Ok(WriteStrategy::Native { attempt }) => {
            debug!(attempt, "copied with native clipboard");
            EXIT_SUCCESS
        }
        Ok(WriteStrategy::Managed) => {
            debug!("copied with managed clipboard");
            EXIT_SUCCESS
        }
        Err(e) => {
            debug!(error = %e.0, "both clipboard strategies failed");
            presenter.error("copy failed");
            EXIT_CLIPBOARD_ERROR
        }
    }
}

fn paste(target: OutputTarget, config: &UclipConfig, presenter: &Presenter) -> u8 {
    let reader = ClipboardReader::new(ArboardClipboard::with_open_retry(config.retry_policy()));

    let text = match reader.try_read() {
        Ok(Some(text)) => text,
        Ok(None) => {
            presenter.error("clipboard does not contain text");
            return EXIT_CLIPBOARD_ERROR;
        }
        Err(e) => {
            debug!(error = %e, "clipboard read failed");
            presenter.error("cannot access clipboard data");
            return EXIT_CLIPBOARD_ERROR;
        }
    };

    let encoding = match target {
        OutputTarget::Console => match presenter.output_console(&text) {
            ConsoleWrite::Complete => return EXIT_SUCCESS,
            ConsoleWrite::Interrupted { written } => {
                presenter.error(&format!("console write failed after {} units", written));
                return EXIT_CLIPBOARD_ERROR;
            }
            ConsoleWrite::Unavailable => TextEncoding::Utf8,
        },
        OutputTarget::Bytes(encoding) => encoding,
    };

    match presenter.output_bytes(&encoding.encode(&text)) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            presenter.error(&format!("failed to write output: {}", e));
            EXIT_CLIPBOARD_ERROR
        }
    }
}

/// Load and merge configuration from file and env
pub fn load_config() -> UclipConfig {
    load_merged_config(&XdgConfigStore::from_env(), env_config())
}

/// Merge: defaults < file < env. Config problems never block the clipboard.
pub fn load_merged_config(store: &impl ConfigStore, env_config: UclipConfig) -> UclipConfig {
    let file_config = store.load().unwrap_or_else(|e| {
        debug!(path = %store.path().display(), error = %e, "ignoring config file");
        UclipConfig::empty()
    });

    let merged = UclipConfig::defaults().merge(file_config).merge(env_config);
    match merged.validate() {
        Ok(()) => merged,
        Err(e) => {
            debug!(error = %e, "invalid configuration, using defaults");
            UclipConfig::defaults()
        }
    }
}

/// Read overrides from the process environment
pub fn env_config() -> UclipConfig {
    env_config_from(|key| env::var(key).ok())
}

fn env_config_from(lookup: impl Fn(&str) -> Option<String>) -> UclipConfig {
    fn parsed<T: std::str::FromStr>(key: &str, value: Option<String>) -> Option<T> {
        let value = value.filter(|v| !v.trim().is_empty())?;
        match value.trim().parse() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                debug!(key, value = %value, "ignoring invalid environment override");
                None
            }
        }
    }

    UclipConfig {
        retries: parsed(RETRIES_ENV, lookup(RETRIES_ENV)),
        cooldown_ms: parsed(COOLDOWN_ENV, lookup(COOLDOWN_ENV)),
        empty_text: parsed(EMPTY_TEXT_ENV, lookup(EMPTY_TEXT_ENV)),
    }
}
