//! Pricing configuration models

use super::*;
use serde::{Deserialize, Serialize};

/// Plan catalog and quoting configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingConfig {
    /// Plan catalog file (YAML, or JSON when the extension is `.json`)
    #[serde(default)]
    pub catalog_path: Option<String>,
    /// Currency stamped on quotes
    #[serde(default = "default_currency")]
    pub default_currency: String,
    /// Reject catalogs whose tiers gap, overlap or are unsorted
    #[serde(default)]
    pub strict_tiers: bool,
    /// Catalog reload interval in seconds, 0 disables reloading
    #[serde(default)]
    pub refresh_interval: u64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            default_currency: default_currency(),
            strict_tiers: false,
            refresh_interval: 0,
        }
    }
}

impl PricingConfig {
    /// Merge pricing configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        if other.catalog_path.is_some() {
            self.catalog_path = other.catalog_path;
        }
        if other.default_currency != default_currency() {
            self.default_currency = other.default_currency;
        }
        if other.strict_tiers {
            self.strict_tiers = other.strict_tiers;
        }
        if other.refresh_interval != 0 {
            self.refresh_interval = other.refresh_interval;
        }
        self
    }
}
