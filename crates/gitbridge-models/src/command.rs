//! Concrete command invocations and their captured outcomes.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A concrete external command invocation.
///
/// The arguments are a vector, never a single shell string, so no shell
/// interpretation or quoting ever applies to caller-supplied values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandSpec {
    /// Executable to run, e.g. `"git"`.
    pub program: String,

    /// Argument vector, one element per argument.
    pub args: Vec<String>,

    /// Directory the process runs in.
    pub working_directory: PathBuf,
}

impl CommandSpec {
    /// Creates a command spec.
    pub fn new(
        program: impl Into<String>,
        args: Vec<String>,
        working_directory: impl Into<PathBuf>,
    ) -> Self {
        Self {
            program: program.into(),
            args,
            working_directory: working_directory.into(),
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Captured result of running a [`CommandSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionOutcome {
    /// Process exit code. `-1` if the process was terminated by a signal.
    pub exit_code: i32,

    /// Captured standard output.
    pub stdout: String,

    /// Captured standard error.
    pub stderr: String,
}

impl ExecutionOutcome {
    /// Returns true if the process exited with code zero.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_spec_display() {
        let spec = CommandSpec::new(
            "git",
            vec!["status".into(), "--porcelain".into()],
            "/repo",
        );
        assert_eq!(spec.to_string(), "git status --porcelain");
    }

    #[test]
    fn test_outcome_success() {
        let outcome = ExecutionOutcome {
            exit_code: 0,
            stdout: String::new(),
            stderr: String::new(),
        };
        assert!(outcome.success());

        let outcome = ExecutionOutcome {
            exit_code: 128,
            stdout: String::new(),
            stderr: "fatal: not a git repository".into(),
        };
        assert!(!outcome.success());
    }
}
