//! Log sink setup.
//!
//! The terminal is owned by the UI, so logs never go to stdout or stderr: they are written
//! to the file named by `TUI_SHELL_LOG`, or dropped when it is unset.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::EnvConfig;
use crate::error::{Result, ShellError};

/// Install a global `tracing` subscriber writing to `config.log_file`.
///
/// Returns `Ok(false)` when no log file is configured. The filter comes from `RUST_LOG`,
/// falling back to `debug` when `TUI_SHELL_DEBUG=1` and `info` otherwise.
pub fn init(config: &EnvConfig) -> Result<bool> {
    let Some(path) = config.log_file.as_ref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| ShellError::io("opening log file", path, source))?;

    let default_level = if config.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| ShellError::Subscriber(err.to_string()))?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(true)
}
