//! Entry point for cc, a Gemini-backed coding assistant for the terminal.
//!
//! This binary loads environment variables, parses CLI arguments via [`cli`],
//! and dispatches the chosen subcommand to its handler.

mod app;
mod cli;
mod config;
mod constants;
mod error;
mod history;
mod logging;
mod message;
mod output;
mod provider;
mod tools;

use anyhow::Result;

/// Runs the cc CLI.
///
/// Loads `.env` files (silently ignored if absent), parses command-line
/// arguments into a [`cli::Cli`] struct, sets up logging, and dispatches
/// the chosen subcommand via [`cli::run`].
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = cli::parse();
    logging::init(cli.verbose)?;
    cli::run(cli).await
}
