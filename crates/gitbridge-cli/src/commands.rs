//! Subcommand execution.

use std::io::Read;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use gitbridge_bridge::{BridgeConfig, GitBridge};
use gitbridge_command::ACTION_NAMES;
use gitbridge_models::ActionRequest;

use crate::cli::{Cli, Commands};

/// Errors from the CLI layer itself.
///
/// A failed action is not a `CliError`; its message is printed and the
/// process exits non-zero.
#[derive(Debug, Error)]
pub enum CliError {
    /// Could not read the request.
    #[error("failed to read request: {0}")]
    Io(#[from] std::io::Error),

    /// The request is not valid JSON for an action request.
    #[error("invalid request: {0}")]
    Json(#[from] serde_json::Error),

    /// The dispatched action failed.
    #[error("{0}")]
    Action(String),
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Executes the parsed command line.
pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Actions => {
            for name in ACTION_NAMES {
                println!("{}", name);
            }
            Ok(())
        }
        Commands::Dispatch { ref request, ref file } => {
            let raw = read_request(request.as_deref(), file.as_deref())?;
            let request: ActionRequest = serde_json::from_str(&raw)?;
            dispatch(&cli, request).await
        }
    }
}

fn read_request(inline: Option<&str>, file: Option<&std::path::Path>) -> Result<String> {
    if let Some(raw) = inline {
        return Ok(raw.to_string());
    }
    if let Some(path) = file {
        return Ok(std::fs::read_to_string(path)?);
    }
    let mut raw = String::new();
    std::io::stdin().read_to_string(&mut raw)?;
    Ok(raw)
}

async fn dispatch(cli: &Cli, request: ActionRequest) -> Result<()> {
    let config = BridgeConfig::new()
        .with_git_program(cli.git_program.clone())
        .with_command_timeout(Duration::from_secs(cli.timeout));
    let bridge = GitBridge::new(config);

    debug!(action = %request.name, "dispatching");
    let reply = bridge.dispatch(request).await.wait().await;
    bridge.shutdown().await;

    match reply {
        Ok(payload) => {
            // Payload is always serializable; fall back to debug on the
            // off chance it is not.
            match serde_json::to_string_pretty(&payload) {
                Ok(json) => println!("{}", json),
                Err(_) => println!("{:?}", payload),
            }
            Ok(())
        }
        Err(err) => Err(CliError::Action(err.to_string())),
    }
}
