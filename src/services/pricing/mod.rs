//! Subscription plan pricing
//!
//! The calculator prices a single plan for a seat count under one of four
//! models (flat, per-seat, tiered, volume). The service keeps a catalog of
//! plans loaded from YAML/JSON and quotes them by id.

pub mod calculator;
mod loader;
mod refresh;
mod service;
mod types;


// Re-export public types
pub use calculator::{calculate_price, calculate_quantity, quote};
pub use service::PricingService;
pub use types::{
    Plan, PlanCatalogFile, PriceRange, PricingEventType, PricingModel, PricingStatistics,
    PricingTier, PricingUpdateEvent, Quote,
};
