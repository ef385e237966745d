use crate::config::EngineOptions;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Feedback Form - collect, validate and edit customer feedback in the terminal
#[derive(Parser, Debug)]
#[command(name = "feedback-form")]
#[command(about = "A customer feedback form with inline validation and an editable entry list")]
#[command(version)]
pub struct Cli {
    /// JSON file with engine options (reset/delete policies)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Make Reset also cancel a pending edit, so the next submit adds a new entry
    #[arg(long, global = true)]
    pub reset_clears_editing: bool,

    /// Keep the editing index untouched when entries are deleted
    #[arg(long, global = true)]
    pub no_rebase_on_delete: bool,

    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the interactive feedback form
    Run,
    /// Apply a JSON event script to a fresh form and print the resulting state
    Replay {
        /// Path to a JSON array of events
        events: PathBuf,

        /// Print the state after every event instead of only the final one
        #[arg(long)]
        each: bool,
    },
    /// Write the effective engine options to a JSON file
    InitConfig {
        /// Destination path
        path: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }

    /// Resolve engine options: file (if any) first, then command-line flags
    pub fn engine_options(&self) -> anyhow::Result<EngineOptions> {
        let base = match &self.config {
            Some(path) => EngineOptions::load_from_file(path)?,
            None => EngineOptions::default(),
        };
        Ok(base.with_overrides(self.reset_clears_editing, self.no_rebase_on_delete))
    }
}
