//! monday - command-line access to monday.com boards.
//!
//! Commands:
//! - `monday users`: List account users
//! - `monday boards`: List boards
//! - `monday groups <board>` / `columns <board>`: Board structure
//! - `monday items <board>`: Items with decoded column values
//! - `monday labels <board> <column>`: Status or dropdown labels
//! - `monday add-item <board> <group> <name> [--status c=i ...]`: Create an item
//! - `monday add-update <item> <body>`: Post an update
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use monday_client::{ClientConfig, MondayClient};

mod cli;
mod commands;

use cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("monday=debug,monday_client=debug,monday_columns=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    std::process::exit(result_to_exit(run(cli).await));
}

async fn run(cli: Cli) -> Result<()> {
    let config = ClientConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    debug!(endpoint = %config.endpoint, "loaded configuration");
    let client = MondayClient::new(config)?;
    commands::run(&client, cli.command, cli.json).await
}

/// Convert a `Result<(), anyhow::Error>` to an exit code.
fn result_to_exit(result: Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}
