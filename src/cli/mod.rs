//! Command-line interface definition and dispatch for cc.
//!
//! Uses [`clap`] for argument parsing with derive macros. Each subcommand is
//! routed to the matching [`App`] handler.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::App;
use crate::config::Config;
use crate::error::CcError;
use crate::output::StdoutRenderer;

/// Top-level CLI structure for cc.
///
/// With no arguments at all, clap prints the full help to stderr and exits
/// with status 2.
#[derive(Parser, Debug)]
#[command(
    name = "cc",
    about = "AI coding assistant Gemini Coder",
    after_help = "Pick a subcommand. Example: cc ask \"Write Hello World in Python\"",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for the cc CLI.
///
/// The `///` doc comments on variants double as `--help` text rendered by clap.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Ask the AI a question or request code
    Ask {
        /// Instruction or question for the AI
        #[arg(value_parser = non_empty)]
        prompt: String,
    },
    /// Read a file into the AI context
    Read {
        /// Path of the file to read
        filepath: String,
    },
    /// Write content to a file
    Write {
        /// Path of the file to write
        filepath: String,
        /// Content to write
        content: String,
    },
    /// List files and directories
    Ls {
        /// Directory to list
        #[arg(default_value = ".")]
        path: String,
    },
    /// Run a shell command
    Run {
        /// Shell command to execute
        command: String,
    },
    /// AI-assisted git commit
    Commit,
}

fn non_empty(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("prompt must not be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Parses command-line arguments into a [`Cli`] struct.
///
/// Delegates to [`clap::Parser::parse`], which exits the process on invalid input.
pub fn parse() -> Cli {
    Cli::parse()
}

/// Dispatches the parsed CLI command to its handler.
///
/// Handler failures are printed, not returned. Configuration is loaded only
/// for `ask` and `run`; the other subcommands work even next to a broken
/// config file.
pub async fn run(cli: Cli) -> Result<()> {
    tracing::debug!(command = ?cli.command, "dispatching");

    let mut app = App::new(StdoutRenderer::new());
    match cli.command {
        Commands::Ask { prompt } => match load_config() {
            Ok(config) => app.ask(&config, &prompt).await,
            Err(err) => app.report(err),
        },
        Commands::Read { filepath } => app.read(&filepath),
        Commands::Write { filepath, content } => app.write(&filepath, &content),
        Commands::Ls { path } => app.ls(&path),
        Commands::Run { command } => match load_config() {
            Ok(config) => app.run(&config, &command).await,
            Err(err) => app.report(err),
        },
        Commands::Commit => app.commit(),
    }
    if !app.history().is_empty() {
        tracing::debug!(turns = app.history().len(), "history discarded at exit");
    }
    Ok(())
}

fn load_config() -> Result<Config, CcError> {
    Config::load().map_err(|err| CcError::Config(format!("{err:#}")))
}
