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

    #[error("API base URL must start with http:// or https://")]
    InvalidApiUrl,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Radar radius must be a finite, non-negative number")]
    InvalidRadius,

    #[error("Radar center must have finite coordinates")]
    InvalidCenter,

    #[error("Radar chart needs at least one grid ring")]
    InvalidGridRings,

    #[error("Invalid log filter: {0}")]
    InvalidLogLevel(String),
}
