//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use gomoku_core::{DEFAULT_BOARD_SIZE, WIN_LENGTH};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Largest board the front ends can label and draw.
pub const MAX_BOARD_SIZE: usize = 99;

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GomokuConfig {
    /// Board edge length in cells.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// File the terminal UI writes its log to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Whether row/column labels are drawn around the board.
    #[serde(default = "default_show_coordinates")]
    show_coordinates: bool,
}

fn default_board_size() -> usize {
    DEFAULT_BOARD_SIZE
}

fn default_log_file() -> PathBuf {
    PathBuf::from("gomoku.log")
}

fn default_show_coordinates() -> bool {
    true
}

impl Default for GomokuConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            log_file: default_log_file(),
            show_coordinates: default_show_coordinates(),
        }
    }
}

impl GomokuConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the board size, re-validating the result.
    pub fn with_board_size(mut self, board_size: usize) -> Result<Self, ConfigError> {
        self.board_size = board_size;
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(WIN_LENGTH..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::new(format!(
                "board_size must be between {} and {}, got {}",
                WIN_LENGTH, MAX_BOARD_SIZE, self.board_size
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GomokuConfig::default();
        assert_eq!(*config.board_size(), 15);
        assert_eq!(config.log_file(), &PathBuf::from("gomoku.log"));
        assert!(*config.show_coordinates());
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = GomokuConfig::from_toml("board_size = 19").unwrap();
        assert_eq!(*config.board_size(), 19);
        assert!(*config.show_coordinates());
        assert_eq!(GomokuConfig::from_toml("").unwrap(), GomokuConfig::default());
    }

    #[test]
    fn test_board_size_bounds() {
        let err = GomokuConfig::from_toml("board_size = 4").unwrap_err();
        assert!(err.message.contains("between 5 and 99"));
        assert!(GomokuConfig::default().with_board_size(2).is_err());
        assert!(GomokuConfig::default().with_board_size(100).is_err());
        assert_eq!(*GomokuConfig::default().with_board_size(99).unwrap().board_size(), 99);
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = GomokuConfig::from_toml("board_size = \"big\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "board_size = 9\nlog_file = \"/tmp/g.log\"\nshow_coordinates = false").unwrap();

        let config = GomokuConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.board_size(), 9);
        assert_eq!(config.log_file(), &PathBuf::from("/tmp/g.log"));
        assert!(!*config.show_coordinates());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GomokuConfig::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, GomokuConfig::default());
    }
}
