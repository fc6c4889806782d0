//! Main pricing service implementation

use super::calculator;
use super::types::{
    CatalogData, Plan, PriceRange, PricingEventType, PricingStatistics, PricingUpdateEvent, Quote,
};
use crate::config::models::PricingConfig;
use crate::config::validation::Validate;
use crate::utils::error::{PricingError, Result};
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info};

/// In-memory plan catalog with quoting on top of the calculator
#[derive(Debug, Clone)]
pub struct PricingService {
    /// Consolidated catalog state - single lock for plans and timestamp
    pub(super) catalog: Arc<RwLock<CatalogData>>,
    /// Catalog source and quoting settings
    pub(super) config: PricingConfig,
    /// Event broadcaster for updates
    pub(super) event_sender: broadcast::Sender<PricingUpdateEvent>,
}

impl PricingService {
    /// Create a new pricing service with an empty catalog
    pub fn new(config: PricingConfig) -> Self {
        let (event_sender, _) = broadcast::channel(1000);

        info!(
            catalog = config.catalog_path.as_deref().unwrap_or("<none>"),
            currency = %config.default_currency,
            "Pricing service initialized"
        );

        Self {
            catalog: Arc::new(RwLock::new(CatalogData::default())),
            config,
            event_sender,
        }
    }

    /// Pricing configuration in use
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Get a plan by id
    pub fn get_plan(&self, plan_id: &str) -> Option<Plan> {
        let data = self.catalog.read();
        data.plans.get(plan_id).cloned()
    }

    /// All plans, ordered by id
    pub fn list_plans(&self) -> Vec<Plan> {
        let data = self.catalog.read();
        let mut plans: Vec<Plan> = data.plans.values().cloned().collect();
        plans.sort_by(|a, b| a.id.cmp(&b.id));
        plans
    }

    /// Quote a catalog plan for `user_count` seats
    pub fn quote(&self, plan_id: &str, user_count: u32) -> Result<Quote> {
        let plan = self
            .get_plan(plan_id)
            .ok_or_else(|| PricingError::not_found(format!("Plan not found: {}", plan_id)))?;

        let quote = calculator::quote(&plan, user_count, &self.config.default_currency)?;
        debug!(
            plan = %quote.plan_id,
            user_count,
            price = %quote.price,
            quantity = quote.quantity,
            "quoted plan"
        );
        Ok(quote)
    }

    /// Add or replace a plan after validating it
    pub fn add_plan(&self, plan: Plan) -> Result<()> {
        plan.validate()
            .map_err(|e| PricingError::validation(format!("Plan '{}': {}", plan.id, e)))?;
        self.check_tier_layout(&plan)?;

        let plan_id = plan.id.clone();
        let replaced = {
            let mut data = self.catalog.write();
            let replaced = data.plans.insert(plan_id.clone(), plan).is_some();
            data.last_updated = Utc::now();
            replaced
        };

        let event_type = if replaced {
            PricingEventType::PlanUpdated
        } else {
            PricingEventType::PlanAdded
        };
        self.publish(event_type, plan_id);
        Ok(())
    }

    /// Remove a plan, returning it if it existed
    pub fn remove_plan(&self, plan_id: &str) -> Option<Plan> {
        let removed = {
            let mut data = self.catalog.write();
            let removed = data.plans.remove(plan_id);
            if removed.is_some() {
                data.last_updated = Utc::now();
            }
            removed
        };

        if removed.is_some() {
            self.publish(PricingEventType::PlanRemoved, plan_id.to_string());
        }
        removed
    }

    /// Get catalog statistics
    pub fn get_statistics(&self) -> PricingStatistics {
        let data = self.catalog.read();

        let mut model_stats = HashMap::new();
        let mut price_range: Option<PriceRange> = None;

        for plan in data.plans.values() {
            *model_stats
                .entry(plan.pricing_model.to_string())
                .or_insert(0) += 1;

            let range = price_range.get_or_insert(PriceRange {
                min: plan.price,
                max: plan.price,
            });
            range.min = range.min.min(plan.price);
            range.max = range.max.max(plan.price);
        }

        PricingStatistics {
            total_plans: data.plans.len(),
            model_stats,
            price_range,
            last_updated: data.last_updated,
        }
    }

    /// Receive plan and catalog change notifications
    pub fn subscribe_to_updates(&self) -> broadcast::Receiver<PricingUpdateEvent> {
        self.event_sender.subscribe()
    }

    pub(super) fn publish(&self, event_type: PricingEventType, plan_id: String) {
        // no subscribers is fine
        let _ = self.event_sender.send(PricingUpdateEvent {
            event_type,
            plan_id,
            timestamp: Utc::now(),
        });
    }
}
