//! Bridge events.

use std::path::PathBuf;

use chrono::{DateTime, Utc};

/// Events broadcast by the bridge while actions move through it.
#[derive(Debug, Clone)]
pub enum BridgeEvent {
    /// An action passed validation and was scheduled.
    ActionStarted {
        /// Action name.
        action: String,
        /// Target working directory.
        working_directory: PathBuf,
        /// When the action was scheduled.
        at: DateTime<Utc>,
    },
    /// An action completed and replied with a success payload.
    ActionCompleted {
        /// Action name.
        action: String,
        /// When the reply fired.
        at: DateTime<Utc>,
    },
    /// An action replied with an error.
    ActionFailed {
        /// Action name.
        action: String,
        /// Error message delivered to the caller.
        error: String,
        /// When the reply fired.
        at: DateTime<Utc>,
    },
}

impl BridgeEvent {
    /// Returns the action name associated with this event.
    pub fn action(&self) -> &str {
        match self {
            BridgeEvent::ActionStarted { action, .. } => action,
            BridgeEvent::ActionCompleted { action, .. } => action,
            BridgeEvent::ActionFailed { action, .. } => action,
        }
    }

    /// Returns true if this is a failure event.
    pub fn is_failure(&self) -> bool {
        matches!(self, BridgeEvent::ActionFailed { .. })
    }
}
