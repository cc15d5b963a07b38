//! Error types for process execution.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while running an external command.
///
/// A non-zero exit code is not an error here; it comes back as a normal
/// outcome and the reporter decides what it means for the action.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The process could not be started at all.
    #[error("failed to launch process: {0}")]
    Launch(std::io::Error),

    /// Reading the process pipes or waiting for it failed after launch.
    #[error("process io error: {0}")]
    Io(#[from] std::io::Error),

    /// The process exceeded its execution budget and was killed.
    #[error("process timed out after {0:?}")]
    Timeout(Duration),

    /// The run was cancelled and the process killed.
    #[error("cancelled")]
    Cancelled,
}

/// Result type for execution operations.
pub type Result<T> = std::result::Result<T, ExecError>;
