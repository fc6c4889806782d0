//! Configuration data models
//!
//! This module defines all configuration structures used by the pricing engine.

pub mod engine;
pub mod logging;
pub mod pricing;

// Re-export all configuration types
pub use engine::*;
pub use logging::*;
pub use pricing::*;

/// Default quote currency
pub fn default_currency() -> String {
    "USD".to_string()
}

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}
