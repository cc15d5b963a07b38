//! Error types for the bridge.

use std::time::Duration;

use thiserror::Error;

use gitbridge_command::GrammarError;
use gitbridge_exec::ExecError;
use gitbridge_models::ExecutionOutcome;

/// Errors reported through the reply channel.
///
/// `InvalidAction` and `Argument` are detected synchronously in the router
/// before any work is scheduled. The rest are detected on a worker and flow
/// back through the same single-fire reply path; none of them ever
/// propagate as a panic into the host.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The action name is not in the grammar table.
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    /// A required argument is missing or an option has the wrong kind.
    #[error("{0}")]
    Argument(String),

    /// The process could not be started.
    #[error("failed to launch git: {0}")]
    Launch(String),

    /// The process ran and exited non-zero.
    #[error("{message}")]
    CommandFailed {
        /// Generic per-action failure message.
        message: String,
        /// Captured outcome, attached for diagnostics.
        outcome: ExecutionOutcome,
    },

    /// The process exceeded its execution budget.
    #[error("command timed out after {0:?}")]
    Timeout(Duration),

    /// The request was cancelled.
    #[error("cancelled")]
    Cancelled,

    /// The bridge has been shut down; no work is scheduled anymore.
    #[error("bridge is shut down")]
    ShutDown,

    /// The reply channel closed without a reply.
    #[error("reply channel closed: {0}")]
    Channel(String),
}

impl From<GrammarError> for BridgeError {
    fn from(err: GrammarError) -> Self {
        match err {
            GrammarError::InvalidAction(name) => BridgeError::InvalidAction(name),
            other => BridgeError::Argument(other.to_string()),
        }
    }
}

impl From<ExecError> for BridgeError {
    fn from(err: ExecError) -> Self {
        match err {
            ExecError::Launch(io) => BridgeError::Launch(io.to_string()),
            ExecError::Io(io) => BridgeError::Launch(io.to_string()),
            ExecError::Timeout(budget) => BridgeError::Timeout(budget),
            ExecError::Cancelled => BridgeError::Cancelled,
        }
    }
}

/// Result type for bridge operations.
pub type Result<T> = std::result::Result<T, BridgeError>;
