//! Engine configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DIAGNOSIS_ENGINE` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use diagnosis_engine::config::EngineConfig;
//!
//! let config = EngineConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Parallel threshold: {}", config.analysis.parallel_threshold);
//! ```

mod analysis;
mod error;
mod features;
mod logging;

pub use analysis::AnalysisConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;

use crate::domain::dashboard::ReportOptions;

/// Root engine configuration
///
/// Load using [`EngineConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    /// Analysis tuning (parallel threshold, response time)
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DIAGNOSIS_ENGINE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DIAGNOSIS_ENGINE__ANALYSIS__PARALLEL_THRESHOLD=256` -> `analysis.parallel_threshold = 256`
    /// - `DIAGNOSIS_ENGINE__LOGGING__FORMAT=json` -> `logging.format = json`
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
                    .prefix("DIAGNOSIS_ENGINE")
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
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.analysis.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Report options implied by this configuration
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            parallel_threshold: self
                .features
                .enable_parallel_classification
                .then_some(self.analysis.parallel_threshold),
            include_response_time: self.analysis.include_response_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "DIAGNOSIS_ENGINE__ANALYSIS__PARALLEL_THRESHOLD",
        "DIAGNOSIS_ENGINE__ANALYSIS__INCLUDE_RESPONSE_TIME",
        "DIAGNOSIS_ENGINE__LOGGING__LEVEL",
        "DIAGNOSIS_ENGINE__LOGGING__FORMAT",
        "DIAGNOSIS_ENGINE__FEATURES__ENABLE_PARALLEL_CLASSIFICATION",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = EngineConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config, EngineConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DIAGNOSIS_ENGINE__ANALYSIS__PARALLEL_THRESHOLD", "64");
        env::set_var("DIAGNOSIS_ENGINE__LOGGING__FORMAT", "json");
        env::set_var("DIAGNOSIS_ENGINE__FEATURES__ENABLE_PARALLEL_CLASSIFICATION", "false");
        let result = EngineConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.analysis.parallel_threshold, 64);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(!config.features.enable_parallel_classification);
    }

    #[test]
    fn test_zero_threshold_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DIAGNOSIS_ENGINE__ANALYSIS__PARALLEL_THRESHOLD", "0");
        let result = EngineConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.validate(), Err(ValidationError::InvalidParallelThreshold));
    }

    #[test]
    fn test_report_options_follow_feature_flag() {
        let mut config = EngineConfig::default();
        assert_eq!(config.report_options().parallel_threshold, Some(512));

        config.features.enable_parallel_classification = false;
        config.analysis.include_response_time = false;
        let options = config.report_options();
        assert_eq!(options.parallel_threshold, None);
        assert!(!options.include_response_time);
    }
}
