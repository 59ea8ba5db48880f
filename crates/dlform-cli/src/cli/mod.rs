//! CLI for the dlform behavior engine.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{run_check_url, run_scenario};

/// Top-level CLI for the dlform scenario runner.
#[derive(Debug, Parser)]
#[command(name = "dlform")]
#[command(about = "dlform: deterministic download-page behavior engine", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Replay a scenario file and print the resulting page state.
    Run {
        /// Path to the scenario TOML file.
        scenario: PathBuf,

        /// Emit the final page state as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Check whether a string is a syntactically valid URL.
    CheckUrl {
        /// Candidate URL.
        url: String,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Run { scenario, json } => run_scenario(&scenario, json).await,
            CliCommand::CheckUrl { url } => run_check_url(&url),
        }
    }
}
