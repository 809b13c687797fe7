//! Gomoku front ends.
//!
//! Configuration, command-line parsing, a line console and a mouse-driven
//! terminal UI around the [`gomoku_core`] board engine.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod console;
pub mod messages;
pub mod tui;

pub use config::{ConfigError, GomokuConfig, MAX_BOARD_SIZE};
