//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `BEYONDSTREAMS` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use beyondstreams::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Showing top {} clusters", config.ranking.top_k);
//! ```

mod error;
mod logging;
mod ranking;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use ranking::RankingConfig;
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Where the exploration document is persisted
    #[serde(default)]
    pub storage: StorageConfig,

    /// Cluster ranking tunables
    #[serde(default)]
    pub ranking: RankingConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `BEYONDSTREAMS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `BEYONDSTREAMS__STORAGE__BACKEND=memory` -> `storage.backend = memory`
    /// - `BEYONDSTREAMS__RANKING__TOP_K=3` -> `ranking.top_k = 3`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("BEYONDSTREAMS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for an empty storage key, a zero `top_k`,
    /// an inverted size range, a stable threshold outside `[0, 1]`, or an
    /// unparsable log filter.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.ranking.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
