//! Core configuration validators
//!
//! This module provides validation implementations for the engine
//! configuration structures: EngineConfig, PricingConfig and LoggingConfig.

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;

impl Validate for EngineConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating engine configuration");

        self.pricing.validate()?;
        self.logging.validate()?;

        debug!("Engine configuration validation completed");
        Ok(())
    }
}

impl Validate for PricingConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(path) = &self.catalog_path {
            if path.trim().is_empty() {
                return Err("Catalog path cannot be empty".to_string());
            }
        }

        let currency = &self.default_currency;
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(format!(
                "Default currency must be a 3-letter uppercase ISO code, got '{}'",
                currency
            ));
        }

        if self.refresh_interval > 0 && self.catalog_path.is_none() {
            return Err("Refresh interval requires a catalog path".to_string());
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }
        Ok(())
    }
}
