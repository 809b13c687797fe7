//! Gomoku - five in a row for two players at one terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use gomoku::cli::{Cli, Command};
use gomoku::config::GomokuConfig;
use gomoku::console::Console;
use gomoku_core::Game;
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.clone().unwrap_or(Command::Tui) {
        // Subscriber needs the configured log file; run_tui logs the config.
        Command::Tui => gomoku::tui::run_tui(&cli.load_config()?),
        Command::Console { json } => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(io::stderr)
                .try_init();

            run_console(&cli.load_config()?, json)
        }
    }
}

/// Play on stdin/stdout.
#[instrument(skip(config))]
fn run_console(config: &GomokuConfig, json: bool) -> Result<()> {
    info!(?config, "Starting console");

    let game = Game::new(*config.board_size())?;
    let stdin = io::stdin();
    let mut console = Console::new(game, stdin.lock(), io::stdout(), *config.show_coordinates());
    console.run()?;
    if json {
        console.write_snapshot()?;
    }
    Ok(())
}
