//! Error types for grammar validation.

use thiserror::Error;

/// Errors raised while validating a request against the grammar table.
#[derive(Debug, Error)]
pub enum GrammarError {
    /// The action name is not in the grammar table.
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    /// A required positional argument is missing.
    #[error("missing required argument '{name}' for action '{action}'")]
    MissingArgument {
        /// Action name.
        action: &'static str,
        /// Argument name.
        name: &'static str,
    },

    /// An option is present but carries the wrong kind of value.
    #[error("option '{key}' for action '{action}' must be {expected}")]
    WrongOptionKind {
        /// Action name.
        action: &'static str,
        /// Option key.
        key: &'static str,
        /// Expected kind, e.g. "a boolean".
        expected: &'static str,
    },

    /// An integer option is out of range.
    #[error("option '{key}' for action '{action}' must be a non-negative integer")]
    OptionOutOfRange {
        /// Action name.
        action: &'static str,
        /// Option key.
        key: &'static str,
    },
}

/// Result type for grammar operations.
pub type Result<T> = std::result::Result<T, GrammarError>;
