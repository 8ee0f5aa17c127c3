//! Match configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_core::{Algorithm, Mark};
use tracing::{debug, info, instrument};

/// File read when no `--config` path is given, if it exists.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Settings for an interactive match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Config {
    /// Mark played by the human.
    #[serde(default = "default_mark")]
    mark: Mark,

    /// Search used by the computer.
    #[serde(default)]
    algorithm: Algorithm,

    /// Show `*` on the cells that can be played.
    #[serde(default = "default_hints")]
    hints: bool,

    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_mark() -> Mark {
    Mark::X
}

fn default_hints() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mark: default_mark(),
            algorithm: Algorithm::default(),
            hints: default_hints(),
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mark = %config.mark, algorithm = %config.algorithm, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] if present, else defaults.
    ///
    /// An explicit path that cannot be read is an error; a missing
    /// default file is not.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides on top of file values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        mark: Option<Mark>,
        algorithm: Option<Algorithm>,
        no_hints: bool,
    ) -> Self {
        if let Some(mark) = mark {
            self.mark = mark;
        }
        if let Some(algorithm) = algorithm {
            self.algorithm = algorithm;
        }
        if no_hints {
            self.hints = false;
        }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(*config.mark(), Mark::X);
        assert_eq!(*config.algorithm(), Algorithm::AlphaBeta);
        assert!(*config.hints());
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("algorithm = \"minimax\"").unwrap();
        assert_eq!(*config.algorithm(), Algorithm::Minimax);
        assert_eq!(*config.mark(), Mark::X);
        assert!(*config.hints());
    }

    #[test]
    fn test_overrides_win() {
        let config = Config::default().with_overrides(Some(Mark::O), Some(Algorithm::Minimax), true);
        assert_eq!(*config.mark(), Mark::O);
        assert_eq!(*config.algorithm(), Algorithm::Minimax);
        assert!(!*config.hints());
    }

    #[test]
    fn test_no_overrides_keeps_file_values() {
        let config: Config = toml::from_str("mark = \"O\"\nhints = false").unwrap();
        let merged = config.clone().with_overrides(None, None, false);
        assert_eq!(merged, config);
    }
}
