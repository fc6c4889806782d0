//! # plan-pricing
//!
//! Pricing engine for multi-tenant subscription plans. Given a plan and an
//! active seat count it computes the amount to bill and the line-item
//! quantity to report to the payment processor.
//!
//! ## Pricing models
//!
//! - **Flat**: one fixed price regardless of seat count
//! - **Per-seat**: a base price covering N seats plus a charge per extra seat
//! - **Tiered**: the whole bill is priced at the bracket the seat count falls into
//! - **Volume**: each seat is billed at the rate of its own bracket
//!
//! ## Quick Start
//!
//! ```rust
//! use plan_pricing::{Plan, PricingTier, calculate_price, calculate_quantity};
//! use rust_decimal::Decimal;
//!
//! let tier = |min, max, rate: i64| PricingTier {
//!     min_users: min,
//!     max_users: max,
//!     price: None,
//!     price_per_user: Some(Decimal::from(rate)),
//! };
//! let plan = Plan::volume(
//!     "scale",
//!     vec![tier(1, Some(10), 10), tier(11, Some(50), 8), tier(51, None, 5)],
//! );
//!
//! assert_eq!(calculate_price(&plan, 25).unwrap(), Decimal::from(220));
//! assert_eq!(calculate_quantity(&plan, 25).unwrap(), 25);
//! ```
//!
//! ## Catalog Mode
//!
//! ```rust,no_run
//! use plan_pricing::{Config, PricingService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/pricing.yaml").await?;
//!     let service = PricingService::new(config.pricing().clone());
//!     service.initialize().await?;
//!
//!     let quote = service.quote("team", 12)?;
//!     println!("{} x{}", quote.price, quote.quantity);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod services;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use services::pricing::{
    Plan, PricingEventType, PricingModel, PricingService, PricingStatistics, PricingTier,
    PricingUpdateEvent, Quote, calculate_price, calculate_quantity, quote,
};
pub use utils::error::{PricingError, Result};
