//! Gitbridge CLI entry point.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use gitbridge_cli::cli::Cli;
use gitbridge_cli::commands;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone()));

    fmt().with_env_filter(filter).with_target(false).init();

    if let Err(e) = commands::execute(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
