//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `ARCHETYPE_MATRIX` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a working config.
//!
//! # Example
//!
//! ```no_run
//! use archetype_matrix::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("API at {}", config.api.base_url);
//! ```

mod api;
mod error;
mod logging;
mod radar;
mod storage;

pub use api::ApiConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use radar::RadarConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Backend API (base URL, timeout)
    #[serde(default)]
    pub api: ApiConfig,

    /// Client state file (token, cached user)
    #[serde(default)]
    pub storage: StorageConfig,

    /// Matrix chart geometry and value policy
    #[serde(default)]
    pub radar: RadarConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ARCHETYPE_MATRIX` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ARCHETYPE_MATRIX__API__BASE_URL=https://...` -> `api.base_url`
    /// - `ARCHETYPE_MATRIX__RADAR__VALUE_POLICY=clamp` -> `radar.value_policy`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ARCHETYPE_MATRIX")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.api.validate()?;
        self.storage.validate()?;
        self.radar.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::ValuePolicy;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "ARCHETYPE_MATRIX__API__BASE_URL",
        "ARCHETYPE_MATRIX__API__TIMEOUT_SECS",
        "ARCHETYPE_MATRIX__RADAR__MAX_RADIUS",
        "ARCHETYPE_MATRIX__RADAR__VALUE_POLICY",
        "ARCHETYPE_MATRIX__LOGGING__FORMAT",
        "ARCHETYPE_MATRIX__STORAGE__PATH",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_defaults_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.radar.max_radius, 120.0);
        assert_eq!(config.radar.value_policy, ValuePolicy::Reject);
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("ARCHETYPE_MATRIX__API__BASE_URL", "https://api.example.com");
        env::set_var("ARCHETYPE_MATRIX__API__TIMEOUT_SECS", "10");
        env::set_var("ARCHETYPE_MATRIX__RADAR__VALUE_POLICY", "clamp");
        env::set_var("ARCHETYPE_MATRIX__LOGGING__FORMAT", "json");
        env::set_var("ARCHETYPE_MATRIX__STORAGE__PATH", "/tmp/state.json");
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.api.base_url, "https://api.example.com");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.radar.value_policy, ValuePolicy::Clamp);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.storage.path.to_str(), Some("/tmp/state.json"));
    }

    #[test]
    fn test_validate_rejects_negative_radius() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("ARCHETYPE_MATRIX__RADAR__MAX_RADIUS", "-5");
        let result = AppConfig::load_validated();
        clear_env();

        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(ValidationError::InvalidRadius))
        ));
    }

    #[test]
    fn test_unparseable_value_is_load_error() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("ARCHETYPE_MATRIX__API__TIMEOUT_SECS", "soon");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
