//! Error types shared across the library.
//!
//! All fallible operations return [`CoreResult`]. External process failures
//! carry the real exit status plus whatever diagnostic output was captured,
//! so callers can surface actionable messages without re-running anything.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors produced by the rendering pipeline.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Script file not found: {0}")]
    ScriptNotFound(PathBuf),

    #[error(
        "Required external tool '{0}' not found. Install it and make sure it is on your PATH (e.g. apt install ffmpeg)"
    )]
    DependencyNotFound(String),

    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, #[source] std::io::Error),

    #[error("Command '{cmd}' failed ({status}): {message}")]
    CommandFailed {
        cmd: String,
        status: ExitStatus,
        message: String,
    },

    #[error("Filter graph error: {0}")]
    FilterGraph(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for all library operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Builds a [`CoreError::CommandFailed`] from an exit status and captured
/// diagnostic output.
#[must_use]
pub fn command_failed_error(
    cmd: &str,
    status: ExitStatus,
    message: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed {
        cmd: cmd.to_string(),
        status,
        message: message.into(),
    }
}
