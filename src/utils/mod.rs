//! Utility modules for the pricing engine
//!
//! - **error**: Error type and result alias
//! - **logging**: Subscriber setup for `tracing`

pub mod error; // Error handling
pub mod logging; // Logging setup

use rust_decimal::Decimal;

/// Format a monetary amount with two decimal places and a currency code
pub fn format_money(amount: Decimal, currency: &str) -> String {
    format!("{:.2} {}", amount.round_dp(2), currency)
}
