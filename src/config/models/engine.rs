//! Top-level engine configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::env;

/// Everything read from the configuration file
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EngineConfig {
    /// Plan catalog and quoting
    #[serde(default)]
    pub pricing: PricingConfig,
    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl EngineConfig {
    /// Build configuration from `PRICING_*` environment variables
    pub fn from_env() -> crate::utils::error::Result<Self> {
        let mut config = Self::default();

        if let Ok(path) = env::var("PRICING_CATALOG_PATH") {
            config.pricing.catalog_path = Some(path);
        }
        if let Ok(currency) = env::var("PRICING_DEFAULT_CURRENCY") {
            config.pricing.default_currency = currency;
        }
        if let Ok(strict) = env::var("PRICING_STRICT_TIERS") {
            config.pricing.strict_tiers = parse_flag("PRICING_STRICT_TIERS", &strict)?;
        }
        if let Ok(interval) = env::var("PRICING_REFRESH_INTERVAL") {
            config.pricing.refresh_interval = interval.parse().map_err(|_| {
                crate::utils::error::PricingError::config(format!(
                    "PRICING_REFRESH_INTERVAL must be a number of seconds, got '{}'",
                    interval
                ))
            })?;
        }
        if let Ok(level) = env::var("PRICING_LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Ok(format) = env::var("PRICING_LOG_FORMAT") {
            config.logging.format = match format.to_ascii_lowercase().as_str() {
                "json" => LogFormat::Json,
                "text" => LogFormat::Text,
                other => {
                    return Err(crate::utils::error::PricingError::config(format!(
                        "PRICING_LOG_FORMAT must be 'text' or 'json', got '{}'",
                        other
                    )));
                }
            };
        }

        Ok(config)
    }

    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.pricing = self.pricing.merge(other.pricing);
        self.logging = self.logging.merge(other.logging);
        self
    }
}

fn parse_flag(name: &str, value: &str) -> crate::utils::error::Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(crate::utils::error::PricingError::config(format!(
            "{} must be a boolean, got '{}'",
            name, value
        ))),
    }
}
