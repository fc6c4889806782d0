//! Price and quantity calculation for subscription plans
//!
//! Pure functions: no I/O and no shared state. Each pricing model has its own
//! strategy function selected by an exhaustive match on [`PricingModel`].

use super::types::{Plan, PricingModel, PricingTier, Quote};
use crate::utils::error::{PricingError, Result};
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// Calculate the monetary price of `plan` for `user_count` active seats
pub fn calculate_price(plan: &Plan, user_count: u32) -> Result<Decimal> {
    ensure_user_count(user_count)?;

    let price = match plan.pricing_model {
        PricingModel::Flat => plan.price,
        PricingModel::PerSeat => per_seat_price(plan, user_count)?,
        PricingModel::Tiered => tiered_price(plan, user_count)?,
        PricingModel::Volume => volume_price(plan, user_count)?,
    };

    debug!(
        plan = %plan.id,
        model = %plan.pricing_model,
        user_count,
        %price,
        "calculated plan price"
    );
    Ok(price)
}

/// Calculate the line-item quantity reported to the payment processor
pub fn calculate_quantity(plan: &Plan, user_count: u32) -> Result<u32> {
    ensure_user_count(user_count)?;

    let quantity = match plan.pricing_model {
        PricingModel::Flat => 1,
        PricingModel::PerSeat => match plan.base_users {
            None | Some(0) => user_count,
            // one unit for the base fee plus one per extra seat
            Some(base_users) => user_count.saturating_sub(base_users) + 1,
        },
        PricingModel::Tiered | PricingModel::Volume => user_count,
    };
    Ok(quantity)
}

/// Price and quantity together, stamped with `currency`
pub fn quote(plan: &Plan, user_count: u32, currency: &str) -> Result<Quote> {
    Ok(Quote {
        plan_id: plan.id.clone(),
        pricing_model: plan.pricing_model,
        user_count,
        price: calculate_price(plan, user_count)?,
        quantity: calculate_quantity(plan, user_count)?,
        currency: currency.to_string(),
    })
}

fn ensure_user_count(user_count: u32) -> Result<()> {
    if user_count < 1 {
        return Err(PricingError::invalid_argument(
            "userCount must be at least 1",
        ));
    }
    Ok(())
}

fn price_overflow() -> PricingError {
    PricingError::validation("Price overflow")
}

fn per_seat_price(plan: &Plan, user_count: u32) -> Result<Decimal> {
    let price_per_user = plan.price_per_user.ok_or_else(|| {
        PricingError::validation("Per-seat pricing requires pricePerUser to be set")
    })?;
    let base_users = plan.base_users.unwrap_or(0);

    if user_count <= base_users {
        return Ok(plan.price);
    }
    let extra_users = Decimal::from(user_count - base_users);
    extra_users
        .checked_mul(price_per_user)
        .and_then(|extra| plan.price.checked_add(extra))
        .ok_or_else(price_overflow)
}

/// Step pricing: the first tier (in list order) containing `user_count` wins.
fn tiered_price(plan: &Plan, user_count: u32) -> Result<Decimal> {
    let tiers = plan
        .tiers()
        .ok_or_else(|| PricingError::validation("Tiered pricing requires pricingTiers to be set"))?;

    let tier = tiers
        .iter()
        .find(|tier| tier.contains(user_count))
        .ok_or_else(|| {
            PricingError::validation(format!("No pricing tier found for {} users", user_count))
        })?;

    tier.price.ok_or_else(|| {
        PricingError::validation("Tiered pricing tier must have a price property")
    })
}

/// Graduated pricing: seats fill tiers in ascending `min_users` order.
fn volume_price(plan: &Plan, user_count: u32) -> Result<Decimal> {
    let tiers = plan
        .tiers()
        .ok_or_else(|| PricingError::validation("Volume pricing requires pricingTiers to be set"))?;

    let mut sorted: Vec<&PricingTier> = tiers.iter().collect();
    sorted.sort_by_key(|tier| tier.min_users);

    let mut remaining = user_count;
    let mut total = Decimal::ZERO;

    for tier in sorted {
        if remaining == 0 {
            break;
        }
        let price_per_user = tier.price_per_user.ok_or_else(|| {
            PricingError::validation("Volume pricing tier must have a pricePerUser property")
        })?;

        let users_in_tier = tier
            .capacity()
            .map_or(remaining, |capacity| remaining.min(capacity));
        total = Decimal::from(users_in_tier)
            .checked_mul(price_per_user)
            .and_then(|tier_total| total.checked_add(tier_total))
            .ok_or_else(price_overflow)?;
        remaining -= users_in_tier;
    }

    if remaining > 0 {
        warn!(
            plan = %plan.id,
            user_count,
            unpriced = remaining,
            "volume tiers do not cover every user"
        );
    }
    Ok(total)
}
