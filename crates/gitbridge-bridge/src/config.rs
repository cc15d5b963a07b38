//! Bridge configuration.

use std::time::Duration;

/// Configuration for the bridge.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Git executable to invoke. A bare name is resolved through PATH.
    pub git_program: String,
    /// Maximum number of actions executing at once; excess work queues.
    pub max_workers: usize,
    /// Budget after which a running command is killed.
    pub command_timeout: Duration,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            git_program: "git".to_string(),
            max_workers: 8,
            command_timeout: Duration::from_secs(120),
        }
    }
}

impl BridgeConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the git executable.
    pub fn with_git_program(mut self, program: impl Into<String>) -> Self {
        self.git_program = program.into();
        self
    }

    /// Sets the worker pool size.
    pub fn with_max_workers(mut self, max: usize) -> Self {
        self.max_workers = max.max(1);
        self
    }

    /// Sets the per-command timeout.
    pub fn with_command_timeout(mut self, timeout: Duration) -> Self {
        self.command_timeout = timeout;
        self
    }
}
