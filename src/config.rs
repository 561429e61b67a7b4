//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::time::Duration;
use tracing::{debug, info, instrument};

use crate::trivia::BoardShape;

/// Environment variable that overrides the API base URL.
pub const API_URL_ENV: &str = "TRIVIA_API_URL";

/// Configuration for a trivia game run.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Base URL of the category API.
    #[serde(default = "default_api_base_url")]
    api_base_url: String,

    /// Number of entries requested from the category listing.
    #[serde(default = "default_listing_count")]
    listing_count: usize,

    /// Categories on the board.
    #[serde(default = "default_categories")]
    categories: usize,

    /// Clues per category.
    #[serde(default = "default_clues_per_category")]
    clues_per_category: usize,

    /// How long a result stays on screen, in milliseconds.
    #[serde(default = "default_result_delay_ms")]
    result_delay_ms: u64,

    /// Log file written while the terminal UI owns the screen.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

#[instrument]
fn default_api_base_url() -> String {
    "https://rithm-jeopardy.herokuapp.com".to_string()
}

#[instrument]
fn default_listing_count() -> usize {
    100
}

#[instrument]
fn default_categories() -> usize {
    6
}

#[instrument]
fn default_clues_per_category() -> usize {
    5
}

#[instrument]
fn default_result_delay_ms() -> u64 {
    3000
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_trivia.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            listing_count: default_listing_count(),
            categories: default_categories(),
            clues_per_category: default_clues_per_category(),
            result_delay_ms: default_result_delay_ms(),
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file and validates it.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(api_base_url = %config.api_base_url, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text and validates it.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the file if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the API base URL.
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Replaces the log file path.
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = path.into();
        self
    }

    /// Applies the `TRIVIA_API_URL` environment override, if set.
    #[instrument(skip(self))]
    pub fn apply_env(self) -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => {
                debug!(%url, "Overriding API URL from environment");
                self.with_api_base_url(url)
            }
            _ => self,
        }
    }

    /// Returns the board dimensions.
    pub fn board_shape(&self) -> BoardShape {
        BoardShape::new(self.categories, self.clues_per_category)
    }

    /// Returns the result display delay.
    pub fn result_delay(&self) -> Duration {
        Duration::from_millis(self.result_delay_ms)
    }

    #[instrument(skip(self))]
    fn validate(&self) -> Result<(), ConfigError> {
        if self.categories == 0 {
            return Err(ConfigError::new("categories must be at least 1".to_string()));
        }
        if self.clues_per_category == 0 {
            return Err(ConfigError::new(
                "clues_per_category must be at least 1".to_string(),
            ));
        }
        if self.listing_count < self.categories {
            return Err(ConfigError::new(format!(
                "listing_count ({}) is smaller than categories ({})",
                self.listing_count, self.categories
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
