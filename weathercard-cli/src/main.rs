//! Binary crate for the `weathercard` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - Rendering the weather card to the terminal

use clap::Parser;

mod card;
mod cli;
mod effects;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();

    // Quiet by default; -v raises the floor, an explicit RUST_LOG still wins.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli::log_filter(cmd.verbose)));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    cmd.run().await
}
