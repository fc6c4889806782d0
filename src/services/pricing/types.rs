//! Type definitions for the pricing service

use crate::utils::error::PricingError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Pricing strategy of a plan, fixed when the plan is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum PricingModel {
    /// One fixed price regardless of seat count
    Flat,
    /// Base price covering `base_users` seats plus a charge per extra seat
    PerSeat,
    /// Whole bill priced at the single bracket the seat count falls into
    Tiered,
    /// Every seat billed at the rate of its own bracket
    Volume,
}

impl PricingModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::PerSeat => "per_seat",
            Self::Tiered => "tiered",
            Self::Volume => "volume",
        }
    }
}

impl fmt::Display for PricingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PricingModel {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flat" => Ok(Self::Flat),
            "per_seat" => Ok(Self::PerSeat),
            "tiered" => Ok(Self::Tiered),
            "volume" => Ok(Self::Volume),
            _ => Err(PricingError::field_invalid("pricing_model")),
        }
    }
}

impl TryFrom<String> for PricingModel {
    type Error = PricingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One bracket of a tiered or volume plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingTier {
    /// First seat count covered by this tier (inclusive)
    pub min_users: u32,
    /// Last seat count covered by this tier (inclusive), `None` for unbounded
    #[serde(default)]
    pub max_users: Option<u32>,
    /// Flat price for the whole bill (tiered plans)
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Price per seat inside this bracket (volume plans)
    #[serde(default)]
    pub price_per_user: Option<Decimal>,
}

impl PricingTier {
    /// Whether `user_count` falls inside `[min_users, max_users]`
    pub fn contains(&self, user_count: u32) -> bool {
        user_count >= self.min_users && self.max_users.is_none_or(|max| user_count <= max)
    }

    /// Number of seats this tier can absorb, `None` when unbounded
    pub fn capacity(&self) -> Option<u32> {
        self.max_users
            .map(|max| max.saturating_add(1).saturating_sub(self.min_users))
    }
}

/// Subscription plan as seen by the calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Stable plan identifier
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Pricing strategy
    pub pricing_model: PricingModel,
    /// Flat price, or base fee for per-seat plans
    #[serde(default)]
    pub price: Decimal,
    /// Charge per seat beyond `base_users` (per-seat plans)
    #[serde(default)]
    pub price_per_user: Option<Decimal>,
    /// Seats included in the base fee (per-seat plans)
    #[serde(default)]
    pub base_users: Option<u32>,
    /// Brackets for tiered and volume plans
    #[serde(default)]
    pub pricing_tiers: Option<Vec<PricingTier>>,
}

impl Plan {
    pub fn flat(id: impl Into<String>, price: Decimal) -> Self {
        Self::new(id, PricingModel::Flat, price)
    }

    pub fn per_seat(
        id: impl Into<String>,
        base_price: Decimal,
        price_per_user: Decimal,
        base_users: Option<u32>,
    ) -> Self {
        Self {
            price_per_user: Some(price_per_user),
            base_users,
            ..Self::new(id, PricingModel::PerSeat, base_price)
        }
    }

    pub fn tiered(id: impl Into<String>, tiers: Vec<PricingTier>) -> Self {
        Self {
            pricing_tiers: Some(tiers),
            ..Self::new(id, PricingModel::Tiered, Decimal::ZERO)
        }
    }

    pub fn volume(id: impl Into<String>, tiers: Vec<PricingTier>) -> Self {
        Self {
            pricing_tiers: Some(tiers),
            ..Self::new(id, PricingModel::Volume, Decimal::ZERO)
        }
    }

    fn new(id: impl Into<String>, pricing_model: PricingModel, price: Decimal) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            pricing_model,
            price,
            price_per_user: None,
            base_users: None,
            pricing_tiers: None,
        }
    }

    /// Tiers if the plan has at least one
    pub fn tiers(&self) -> Option<&[PricingTier]> {
        self.pricing_tiers
            .as_deref()
            .filter(|tiers| !tiers.is_empty())
    }
}

/// Price and billing quantity for one plan at one seat count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    /// Plan that was priced
    pub plan_id: String,
    /// Pricing model used
    pub pricing_model: PricingModel,
    /// Seat count the quote was computed for
    pub user_count: u32,
    /// Monetary amount to bill
    pub price: Decimal,
    /// Line-item quantity for the payment processor
    pub quantity: u32,
    /// ISO currency code
    pub currency: String,
}

/// Catalog file layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanCatalogFile {
    #[serde(default)]
    pub plans: Vec<Plan>,
}

/// Catalog state behind a single lock
#[derive(Debug)]
pub(super) struct CatalogData {
    /// Plans by id
    pub plans: HashMap<String, Plan>,
    /// Last update time
    pub last_updated: DateTime<Utc>,
}

impl Default for CatalogData {
    fn default() -> Self {
        Self {
            plans: HashMap::new(),
            last_updated: DateTime::<Utc>::UNIX_EPOCH,
        }
    }
}

/// Catalog change notification
#[derive(Debug, Clone)]
pub struct PricingUpdateEvent {
    /// Type of catalog event that occurred
    pub event_type: PricingEventType,
    /// Plan id that was affected, `*` for whole-catalog events
    pub plan_id: String,
    /// When the event occurred
    pub timestamp: DateTime<Utc>,
}

/// Types of catalog events that can occur
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingEventType {
    /// A new plan was added to the catalog
    PlanAdded,
    /// An existing plan was replaced
    PlanUpdated,
    /// A plan was removed from the catalog
    PlanRemoved,
    /// The entire catalog was reloaded
    CatalogReloaded,
}

/// Catalog statistics
#[derive(Debug, Clone, Serialize)]
pub struct PricingStatistics {
    /// Total number of plans in the catalog
    pub total_plans: usize,
    /// Number of plans per pricing model
    pub model_stats: HashMap<String, usize>,
    /// Range of base prices across all plans
    pub price_range: Option<PriceRange>,
    /// When the catalog was last updated
    pub last_updated: DateTime<Utc>,
}

/// Base price range across the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}
