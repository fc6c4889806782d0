//! Quote integration tests
//!
//! Price and quantity for every pricing model through the public API.

#[cfg(test)]
mod tests {
    use crate::common::PlanFactory;
    use crate::common::assertions::QuoteAssertions;
    use plan_pricing::{PricingError, calculate_price, calculate_quantity, quote};
    use rust_decimal_macros::dec;

    #[test]
    fn test_flat_plan_quotes() {
        let plan = PlanFactory::starter();
        for users in [1, 3, 250] {
            quote(&plan, users, "USD").unwrap().assert_billed(dec!(29), 1);
        }
    }

    #[test]
    fn test_per_seat_plan_quotes() {
        let plan = PlanFactory::team();
        quote(&plan, 1, "USD").unwrap().assert_billed(dec!(49), 1);
        quote(&plan, 5, "USD").unwrap().assert_billed(dec!(49), 1);
        quote(&plan, 10, "USD").unwrap().assert_billed(dec!(99), 6);
    }

    #[test]
    fn test_per_seat_price_grows_linearly_past_base() {
        let plan = PlanFactory::team();
        for extra in 1..=20u32 {
            let expected = dec!(49) + rust_decimal::Decimal::from(extra) * dec!(10);
            assert_eq!(calculate_price(&plan, 5 + extra).unwrap(), expected);
        }
    }

    #[test]
    fn test_tiered_plan_is_constant_within_a_tier() {
        let plan = PlanFactory::growth();
        for users in 11..=50 {
            assert_eq!(calculate_price(&plan, users).unwrap(), dec!(249));
        }
        quote(&plan, 100, "USD").unwrap().assert_billed(dec!(499), 100);
    }

    #[test]
    fn test_volume_plan_quotes() {
        let plan = PlanFactory::scale();
        quote(&plan, 5, "USD").unwrap().assert_billed(dec!(50), 5);
        quote(&plan, 25, "USD").unwrap().assert_billed(dec!(220), 25);
        quote(&plan, 100, "USD").unwrap().assert_billed(dec!(670), 100);
    }

    #[test]
    fn test_volume_never_exceeds_first_tier_rate() {
        let plan = PlanFactory::scale();
        for users in 1..=200u32 {
            let price = calculate_price(&plan, users).unwrap();
            assert!(price <= rust_decimal::Decimal::from(users) * dec!(10));
        }
    }

    #[test]
    fn test_zero_users_fails_for_all_plans() {
        for plan in PlanFactory::all() {
            assert!(matches!(
                calculate_price(&plan, 0),
                Err(PricingError::InvalidArgument(_))
            ));
            assert!(matches!(
                calculate_quantity(&plan, 0),
                Err(PricingError::InvalidArgument(_))
            ));
        }
    }
}
