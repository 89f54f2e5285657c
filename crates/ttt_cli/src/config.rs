//! Play configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};
use ttt_engine::FirstMover;

/// Settings for interactive play.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Who places the first mark.
    #[serde(default)]
    first_mover: FirstMover,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Print the minimax score of every engine candidate move.
    #[serde(default)]
    show_scores: bool,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            first_mover: FirstMover::default(),
            log_filter: default_log_filter(),
            show_scores: false,
        }
    }
}

impl PlayConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(first_mover = ?config.first_mover, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the opener.
    pub fn with_first_mover(mut self, first_mover: FirstMover) -> Self {
        self.first_mover = first_mover;
        self
    }

    /// Overrides score printing.
    pub fn with_show_scores(mut self, show_scores: bool) -> Self {
        self.show_scores = show_scores;
        self
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
