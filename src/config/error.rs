//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("ranking.top_k must be at least 1")]
    InvalidTopK,

    #[error("ranking.min_size ({min}) exceeds ranking.max_size ({max})")]
    InvalidSizeRange { min: f64, max: f64 },

    #[error("ranking.stable_threshold must be within [0, 1], got {0}")]
    InvalidStableThreshold(f64),

    #[error("Invalid log level directive: {0}")]
    InvalidLogLevel(String),
}
