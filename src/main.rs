//! Feedback Form - Main entry point
//!
//! Launches the interactive terminal form, or replays a scripted session
//! headlessly.

use anyhow::Context;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use feedback_form::cli::{Cli, Commands};
use feedback_form::engine::FormEngine;
use feedback_form::{replay, App, EngineOptions};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use std::path::Path;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` overrides `default_directive` when set.
fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Main application entry point
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    // Log lines would land on top of the TUI, so it stays quiet by default
    let interactive = matches!(cli.command, None | Some(Commands::Run));
    let default_directive = match (cli.verbose, interactive) {
        (true, _) => "debug",
        (false, true) => "off",
        (false, false) => "info",
    };
    init_tracing(default_directive);
    info!("Feedback form starting up");

    let options = cli.engine_options()?;
    debug!("Engine options: {:?}", options);

    match cli.command {
        None | Some(Commands::Run) => run_tui(options)?,
        Some(Commands::Replay { events, each }) => run_replay(&events, each, options)?,
        Some(Commands::InitConfig { path }) => {
            options.save_to_file(&path)?;
            info!("Wrote engine options to {:?}", path);
            println!("✓ Engine options written to {}", path.display());
        }
    }

    Ok(())
}

/// Run the interactive form
fn run_tui(options: EngineOptions) -> anyhow::Result<()> {
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode().context("Failed to enable raw mode")?;
    crossterm::execute!(stdout(), EnterAlternateScreen)
        .context("Failed to enter alternate screen")?;

    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .context("Failed to create terminal")
        .and_then(|mut terminal| {
            let mut app = App::new(options);
            app.run(&mut terminal).context("Application loop failed")
        });

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), LeaveAlternateScreen);

    result
}

/// Replay a JSON event script and print the resulting state
fn run_replay(path: &Path, each: bool, options: EngineOptions) -> anyhow::Result<()> {
    let events = replay::load_events(path)?;
    let mut engine = FormEngine::with_options(options);

    let snapshots = match replay::replay(&mut engine, events) {
        Ok(snapshots) => snapshots,
        Err(e) => {
            error!("Replay aborted: {}", e);
            return Err(e).context("Replay aborted on an invalid event");
        }
    };

    if each {
        for snapshot in &snapshots {
            println!("{}", serde_json::to_string_pretty(snapshot)?);
        }
    } else {
        let last = snapshots.last().cloned().unwrap_or_else(|| engine.snapshot());
        println!("{}", serde_json::to_string_pretty(&last)?);
    }

    Ok(())
}
