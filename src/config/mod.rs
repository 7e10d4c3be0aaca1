//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `ALGOIRL_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use algoirl_notify::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! assert!(config.runtime.channel_capacity > 0);
//! ```

mod error;
mod runtime;

pub use error::{ConfigError, ValidationError};
pub use runtime::{Environment, RuntimeConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Runtime configuration (environment, logging, channel capacity)
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ALGOIRL` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ALGOIRL__RUNTIME__ENVIRONMENT=production` -> `runtime.environment`
    /// - `ALGOIRL__RUNTIME__CHANNEL_CAPACITY=128` -> `runtime.channel_capacity`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    /// or fail validation.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config: AppConfig = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ALGOIRL")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.runtime.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.runtime.is_production()
    }
}
