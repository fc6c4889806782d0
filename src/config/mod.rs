//! Configuration management for the pricing engine
//!
//! This module handles loading, validation, and management of the engine
//! configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{PricingError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the pricing engine
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Engine configuration
    pub engine: EngineConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| PricingError::Config(format!("Failed to read config file: {}", e)))?;

        let engine: EngineConfig = serde_yaml::from_str(&content)
            .map_err(|e| PricingError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { engine };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let engine = EngineConfig::from_env()?;
        let config = Self { engine };

        config.validate()?;
        Ok(config)
    }

    /// Get pricing configuration
    pub fn pricing(&self) -> &PricingConfig {
        &self.engine.pricing
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.engine.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.engine
            .pricing
            .validate()
            .map_err(|e| PricingError::Config(format!("Pricing config error: {}", e)))?;

        self.engine
            .logging
            .validate()
            .map_err(|e| PricingError::Config(format!("Logging config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.engine = self.engine.merge(other.engine);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.engine)
            .map_err(|e| PricingError::Config(format!("Failed to serialize config to JSON: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.engine)
            .map_err(|e| PricingError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
