//! Success payloads delivered back to the caller.

use serde::{Deserialize, Serialize};

/// The shaped success value for one action.
///
/// Which shape an action produces is fixed by its grammar: lifecycle
/// actions report a human-readable message, listing actions report raw
/// captured output, `status`/`log`/`diff` report a structured record, and
/// `isRepository` reports a boolean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", untagged)]
pub enum Payload {
    /// A repository probe result (`isRepository`).
    Flag(bool),
    /// A fixed human-readable confirmation, e.g.
    /// `"Repository initialized successfully"`.
    Message(String),
    /// Structured output record for `status`, `log` and `diff`.
    #[serde(rename_all = "camelCase")]
    Report {
        /// Captured standard output.
        output: String,
        /// Process exit code.
        exit_code: i32,
    },
}

impl Payload {
    /// Returns the textual content for message payloads.
    pub fn as_message(&self) -> Option<&str> {
        match self {
            Payload::Message(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean for flag payloads.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Payload::Flag(b) => Some(*b),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_accessors() {
        assert_eq!(Payload::Flag(true).as_flag(), Some(true));
        assert_eq!(Payload::Flag(true).as_message(), None);
        assert_eq!(
            Payload::Message("done".into()).as_message(),
            Some("done")
        );
    }

    #[test]
    fn test_report_wire_format() {
        let payload = Payload::Report {
            output: " M src/lib.rs\n".into(),
            exit_code: 0,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"exitCode\":0"));
        assert!(json.contains("\"output\""));
    }
}
