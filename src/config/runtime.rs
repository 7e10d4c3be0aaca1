//! Runtime configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Runtime configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeConfig {
    /// Environment name
    #[serde(default = "default_environment")]
    pub environment: Environment,

    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Capacity of the named UI event channel
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

/// Application environment
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl RuntimeConfig {
    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Whether developer-facing diagnostic logging is enabled.
    ///
    /// On only in development; staging and production builds never emit
    /// the diagnostic log lines gated by this flag.
    pub fn diagnostics(&self) -> bool {
        self.environment == Environment::Development
    }

    /// Validate runtime configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.channel_capacity == 0 || self.channel_capacity > 65_536 {
            return Err(ValidationError::InvalidChannelCapacity);
        }
        Ok(())
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            log_level: default_log_level(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

fn default_environment() -> Environment {
    Environment::Development
}

fn default_log_level() -> String {
    "info,algoirl_notify=debug".to_string()
}

fn default_channel_capacity() -> usize {
    64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_development_with_diagnostics() {
        let config = RuntimeConfig::default();
        assert_eq!(config.environment, Environment::Development);
        assert!(config.diagnostics());
        assert!(!config.is_production());
        assert_eq!(config.channel_capacity, 64);
    }

    #[test]
    fn production_disables_diagnostics() {
        let mut config = RuntimeConfig::default();
        config.environment = Environment::Production;
        assert!(config.is_production());
        assert!(!config.diagnostics());
    }

    #[test]
    fn staging_disables_diagnostics_too() {
        let mut config = RuntimeConfig::default();
        config.environment = Environment::Staging;
        assert!(!config.diagnostics());
    }

    #[test]
    fn zero_channel_capacity_is_rejected() {
        let mut config = RuntimeConfig::default();
        config.channel_capacity = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn oversized_channel_capacity_is_rejected() {
        let mut config = RuntimeConfig::default();
        config.channel_capacity = 1_000_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn environment_deserializes_lowercase() {
        let env: Environment = serde_json::from_str("\"production\"").unwrap();
        assert_eq!(env, Environment::Production);
    }
}
