//! Error handling for the pricing engine
//!
//! This module defines the error type shared by the calculator, the plan
//! catalog and configuration loading.

mod helpers;
mod types;

pub use types::{PricingError, Result};
