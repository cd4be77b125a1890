//! Scorer configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// What the interactive session does with a rejected throw.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InvalidThrowPolicy {
    /// Report the error and wait for another throw.
    #[default]
    Reprompt,
    /// Report the error and end the session.
    Abort,
}

/// Configuration for the scorer.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ScorerConfig {
    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Pretty-print JSON output.
    #[serde(default = "default_pretty")]
    pretty: bool,

    /// Policy for rejected throws in interactive play.
    #[serde(default)]
    on_invalid_throw: InvalidThrowPolicy,
}

#[instrument]
fn default_log_filter() -> String {
    "info".to_string()
}

#[instrument]
fn default_pretty() -> bool {
    true
}

impl ScorerConfig {
    /// Creates a configuration.
    #[instrument]
    pub fn new(log_filter: String, pretty: bool, on_invalid_throw: InvalidThrowPolicy) -> Self {
        Self {
            log_filter,
            pretty,
            on_invalid_throw,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(policy = %config.on_invalid_throw, "Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration if the file exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self::new(default_log_filter(), default_pretty(), InvalidThrowPolicy::default())
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
