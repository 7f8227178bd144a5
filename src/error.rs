//! Errors for the ambient, fallible edges of the crate.
//!
//! The UI core is total: popping an empty stack, removing an unknown tab or selecting an
//! out-of-range index are no-ops. Only log setup and terminal output can fail.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("I/O error while {operation} at {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to install tracing subscriber: {0}")]
    Subscriber(String),

    #[error("terminal write failed: {0}")]
    Terminal(#[source] std::io::Error),
}

impl ShellError {
    #[must_use]
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ShellError>;
