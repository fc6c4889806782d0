//! Services module
//!
//! This module contains business logic and service implementations

pub mod pricing;

pub use pricing::{
    Plan, PricingEventType, PricingModel, PricingService, PricingStatistics, PricingTier,
    PricingUpdateEvent, Quote,
};
