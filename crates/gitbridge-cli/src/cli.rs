//! Argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Dispatch git actions through the command bridge.
#[derive(Debug, Parser)]
#[command(name = "gitbridge", version, about)]
pub struct Cli {
    /// Log level when RUST_LOG is not set.
    #[arg(long, default_value = "info", env = "GITBRIDGE_LOG")]
    pub log_level: String,

    /// Git executable to invoke.
    #[arg(long, default_value = "git")]
    pub git_program: String,

    /// Per-command timeout in seconds.
    #[arg(long, default_value_t = 120)]
    pub timeout: u64,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Dispatch one JSON-encoded action request.
    Dispatch {
        /// Inline JSON request; read from stdin when absent.
        request: Option<String>,

        /// Read the request from a file instead.
        #[arg(long, conflicts_with = "request")]
        file: Option<PathBuf>,
    },
    /// List the supported action names.
    Actions,
}
