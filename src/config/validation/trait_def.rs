//! Validation trait definition
//!
//! This module defines the Validate trait shared by configuration structures
//! and catalog plans.

/// Validation trait for configuration structures and plans
///
/// Errors are plain messages; callers wrap them into a `PricingError`
/// variant that fits their context.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
