//! Custom test assertions
//!
//! Provides domain-specific assertions for quotes.

use plan_pricing::Quote;
use rust_decimal::Decimal;

/// Assertions for Quote
pub trait QuoteAssertions {
    /// Assert the quoted price and quantity
    fn assert_billed(&self, price: Decimal, quantity: u32);
}

impl QuoteAssertions for Quote {
    fn assert_billed(&self, price: Decimal, quantity: u32) {
        assert_eq!(
            self.price, price,
            "Expected {} to bill {} for {} users, got {}",
            self.plan_id, price, self.user_count, self.price
        );
        assert_eq!(
            self.quantity, quantity,
            "Expected {} to report quantity {} for {} users, got {}",
            self.plan_id, quantity, self.user_count, self.quantity
        );
    }
}
