//! Plan validators
//!
//! Field checks for plans in the catalog, plus a softer tier layout check.
//! The calculator never calls these; they guard the catalog.

use super::trait_def::Validate;
use crate::services::pricing::{Plan, PricingModel, PricingTier};
use rust_decimal::Decimal;

impl Validate for Plan {
    fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Plan id cannot be empty".to_string());
        }

        if self.price < Decimal::ZERO {
            return Err("Plan price cannot be negative".to_string());
        }
        if self.price_per_user.is_some_and(|p| p < Decimal::ZERO) {
            return Err("Plan pricePerUser cannot be negative".to_string());
        }

        match self.pricing_model {
            PricingModel::Flat => {}
            PricingModel::PerSeat => {
                if self.price_per_user.is_none() {
                    return Err("Per-seat pricing requires pricePerUser to be set".to_string());
                }
            }
            PricingModel::Tiered => {
                let tiers = self
                    .tiers()
                    .ok_or_else(|| "Tiered pricing requires pricingTiers to be set".to_string())?;
                for tier in tiers {
                    tier.validate()?;
                    if tier.price.is_none() {
                        return Err("Tiered pricing tier must have a price property".to_string());
                    }
                }
            }
            PricingModel::Volume => {
                let tiers = self
                    .tiers()
                    .ok_or_else(|| "Volume pricing requires pricingTiers to be set".to_string())?;
                for tier in tiers {
                    tier.validate()?;
                    if tier.price_per_user.is_none() {
                        return Err(
                            "Volume pricing tier must have a pricePerUser property".to_string()
                        );
                    }
                }
            }
        }

        Ok(())
    }
}

impl Validate for PricingTier {
    fn validate(&self) -> Result<(), String> {
        if self.min_users < 1 {
            return Err("Tier minUsers must be at least 1".to_string());
        }
        if let Some(max) = self.max_users {
            if max < self.min_users {
                return Err(format!(
                    "Tier maxUsers ({}) is below minUsers ({})",
                    max, self.min_users
                ));
            }
        }
        if self.price.is_some_and(|p| p < Decimal::ZERO)
            || self.price_per_user.is_some_and(|p| p < Decimal::ZERO)
        {
            return Err("Tier prices cannot be negative".to_string());
        }
        Ok(())
    }
}

/// Describe gaps, overlaps and ordering problems in a plan's tier list
///
/// Returns an empty list for plans without tiers or with a contiguous,
/// sorted layout starting at one seat and ending unbounded.
pub fn tier_layout_issues(plan: &Plan) -> Vec<String> {
    let tiers = match (plan.pricing_model, plan.tiers()) {
        (PricingModel::Tiered | PricingModel::Volume, Some(tiers)) => tiers,
        _ => return Vec::new(),
    };

    let mut issues = Vec::new();

    if tiers.windows(2).any(|w| w[1].min_users < w[0].min_users) {
        // tiered plans match in list order, so this changes which tier wins
        issues.push("tiers are not sorted by minUsers".to_string());
    }

    let mut sorted: Vec<&PricingTier> = tiers.iter().collect();
    sorted.sort_by_key(|tier| tier.min_users);

    if let Some(first) = sorted.first() {
        if first.min_users > 1 {
            issues.push(format!(
                "first tier starts at {} users, smaller counts are not covered",
                first.min_users
            ));
        }
    }

    for pair in sorted.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        match prev.max_users {
            None => issues.push(format!(
                "unbounded tier starting at {} overlaps tier starting at {}",
                prev.min_users, next.min_users
            )),
            Some(max) if next.min_users <= max => issues.push(format!(
                "tiers starting at {} and {} overlap",
                prev.min_users, next.min_users
            )),
            Some(max) if next.min_users > max.saturating_add(1) => issues.push(format!(
                "gap between {} and {} users",
                max, next.min_users
            )),
            Some(_) => {}
        }
    }

    if let Some(max) = sorted.last().and_then(|tier| tier.max_users) {
        issues.push(format!(
            "last tier ends at {} users, larger counts are not covered",
            max
        ));
    }

    issues
}
