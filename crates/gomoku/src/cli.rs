//! Command-line interface for gomoku.

use crate::config::{ConfigError, GomokuConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Gomoku - two players, fifteen lines, five in a row
#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "Two-player five-in-a-row in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "gomoku.toml", global = true)]
    pub config: PathBuf,

    /// Override the configured board size
    #[arg(long, global = true)]
    pub board_size: Option<usize>,

    /// Subcommand to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Loads the configuration file and applies command-line overrides.
    pub fn load_config(&self) -> Result<GomokuConfig, ConfigError> {
        let config = GomokuConfig::load(&self.config)?;
        match self.board_size {
            Some(size) => config.with_board_size(size),
            None => Ok(config),
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in a full-screen terminal UI with mouse and keyboard
    Tui,

    /// Play by typing coordinates, one move per line
    Console {
        /// Print a JSON snapshot of the final game state on exit
        #[arg(long)]
        json: bool,
    },
}
