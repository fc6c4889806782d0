//! Test fixtures and data factories
//!
//! Provides factory methods for creating plans with sensible defaults.
//! All factories create real objects, not mocks.

use plan_pricing::{Plan, PricingTier};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::io::Write;
use tempfile::{Builder, NamedTempFile};

/// Factory for creating test plans
pub struct PlanFactory;

impl PlanFactory {
    /// Flat plan at 29/month
    pub fn starter() -> Plan {
        let mut plan = Plan::flat("starter", dec!(29));
        plan.name = "Starter".to_string();
        plan
    }

    /// Per-seat plan: 49 base covering 5 seats, 10 per extra seat
    pub fn team() -> Plan {
        let mut plan = Plan::per_seat("team", dec!(49), dec!(10), Some(5));
        plan.name = "Team".to_string();
        plan
    }

    /// Step pricing: 1-10 = 99, 11-50 = 249, 51+ = 499
    pub fn growth() -> Plan {
        let mut plan = Plan::tiered(
            "growth",
            vec![
                Self::step(1, Some(10), dec!(99)),
                Self::step(11, Some(50), dec!(249)),
                Self::step(51, None, dec!(499)),
            ],
        );
        plan.name = "Growth".to_string();
        plan
    }

    /// Graduated pricing: 10/user to 10, 8/user to 50, 5/user beyond
    pub fn scale() -> Plan {
        let mut plan = Plan::volume(
            "scale",
            vec![
                Self::rate(1, Some(10), dec!(10)),
                Self::rate(11, Some(50), dec!(8)),
                Self::rate(51, None, dec!(5)),
            ],
        );
        plan.name = "Scale".to_string();
        plan
    }

    /// One plan per pricing model
    pub fn all() -> Vec<Plan> {
        vec![Self::starter(), Self::team(), Self::growth(), Self::scale()]
    }

    pub fn step(min: u32, max: Option<u32>, price: Decimal) -> PricingTier {
        PricingTier {
            min_users: min,
            max_users: max,
            price: Some(price),
            price_per_user: None,
        }
    }

    pub fn rate(min: u32, max: Option<u32>, price_per_user: Decimal) -> PricingTier {
        PricingTier {
            min_users: min,
            max_users: max,
            price: None,
            price_per_user: Some(price_per_user),
        }
    }
}

/// Catalog written to a temporary file
pub struct CatalogFixture {
    file: NamedTempFile,
}

impl CatalogFixture {
    /// YAML catalog with one plan per pricing model
    pub fn yaml() -> Self {
        Self::with_content(SAMPLE_CATALOG_YAML, ".yaml")
    }

    /// Catalog with arbitrary content and file suffix
    pub fn with_content(content: &str, suffix: &str) -> Self {
        let mut file = Builder::new()
            .prefix("plans-")
            .suffix(suffix)
            .tempfile()
            .expect("create temp catalog");
        file.write_all(content.as_bytes()).expect("write temp catalog");
        Self { file }
    }

    /// Replace the catalog content in place
    pub fn rewrite(&self, content: &str) {
        std::fs::write(self.file.path(), content).expect("rewrite temp catalog");
    }

    pub fn path(&self) -> String {
        self.file.path().to_string_lossy().into_owned()
    }
}

pub const SAMPLE_CATALOG_YAML: &str = r#"
plans:
  - id: starter
    name: Starter
    pricing_model: flat
    price: 29
  - id: team
    name: Team
    pricing_model: per_seat
    price: 49
    price_per_user: 10
    base_users: 5
  - id: growth
    name: Growth
    pricing_model: tiered
    pricing_tiers:
      - { min_users: 1, max_users: 10, price: 99 }
      - { min_users: 11, max_users: 50, price: 249 }
      - { min_users: 51, price: 499 }
  - id: scale
    name: Scale
    pricing_model: volume
    pricing_tiers:
      - { min_users: 1, max_users: 10, price_per_user: 10 }
      - { min_users: 11, max_users: 50, price_per_user: 8 }
      - { min_users: 51, price_per_user: 5 }
"#;
