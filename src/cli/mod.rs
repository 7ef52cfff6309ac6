pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "newsrelay")]
#[command(about = "Relay new RSS articles to a webhook", long_about = None)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Publish new articles and update state (default)
    Run {
        /// Print payloads instead of posting, and leave state untouched
        #[arg(long)]
        dry_run: bool,
    },
    /// Show the latest feed entries and which are already posted
    Preview,
    /// Show the persisted article IDs
    State,
}

impl Cli {
    /// The chosen subcommand, `run` when none is given.
    pub fn command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Run { dry_run: false })
    }
}
