//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `CAMPUS_ASSIST` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use campus_assist::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! println!("History file: {}", config.storage.history_path.display());
//! ```

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),
}

/// Root application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Storage configuration (history file location)
    #[serde(default)]
    pub storage: StorageConfig,

    /// Chat presentation configuration
    #[serde(default)]
    pub chat: ChatConfig,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// File the conversation history is persisted to
    #[serde(default = "default_history_path")]
    pub history_path: PathBuf,
}

/// Chat presentation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// Simulated typing delay before each bot reply, in milliseconds
    #[serde(default = "default_typing_delay_ms")]
    pub typing_delay_ms: u64,
}

fn default_history_path() -> PathBuf {
    PathBuf::from("./data/history.json")
}

fn default_typing_delay_ms() -> u64 {
    1000
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            history_path: default_history_path(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            typing_delay_ms: default_typing_delay_ms(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `CAMPUS_ASSIST` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `CAMPUS_ASSIST__STORAGE__HISTORY_PATH=./data/history.json`
    /// - `CAMPUS_ASSIST__CHAT__TYPING_DELAY_MS=0`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the
    /// expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CAMPUS_ASSIST")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }
}
