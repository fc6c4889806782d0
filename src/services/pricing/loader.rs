//! Catalog loading for the pricing service

use super::service::PricingService;
use super::types::{Plan, PlanCatalogFile, PricingEventType};
use crate::config::validation::{Validate, tier_layout_issues};
use crate::utils::error::{PricingError, Result};
use chrono::Utc;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

impl PricingService {
    /// Load the configured catalog, if any
    pub async fn initialize(&self) -> Result<()> {
        if self.config.catalog_path.is_none() {
            debug!("No catalog path configured, starting with an empty catalog");
            return Ok(());
        }
        self.reload().await
    }

    /// Reload the catalog from the configured path, replacing all plans
    pub async fn reload(&self) -> Result<()> {
        let path = self
            .config
            .catalog_path
            .clone()
            .ok_or_else(|| PricingError::config("No catalog path configured"))?;

        info!("Loading plan catalog from: {}", path);
        let plans = Self::load_from_file(&path).await?;
        self.replace_catalog(plans)
    }

    /// Read plans from a YAML or JSON catalog file
    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Plan>> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            PricingError::config(format!("Failed to read catalog {:?}: {}", path, e))
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let plans = Self::parse_catalog(&content, is_json)?;

        debug!("Loaded {} plans from {:?}", plans.len(), path);
        Ok(plans)
    }

    /// Parse catalog content
    pub fn parse_catalog(content: &str, is_json: bool) -> Result<Vec<Plan>> {
        let catalog: PlanCatalogFile = if is_json {
            serde_json::from_str(content).map_err(|e| {
                PricingError::parsing(format!("Failed to parse catalog JSON: {}", e))
            })?
        } else {
            serde_yaml::from_str(content).map_err(|e| {
                PricingError::parsing(format!("Failed to parse catalog YAML: {}", e))
            })?
        };
        Ok(catalog.plans)
    }

    /// Validate every plan, then swap the whole catalog in one step
    pub fn replace_catalog(&self, plans: Vec<Plan>) -> Result<()> {
        let mut by_id = HashMap::with_capacity(plans.len());
        for plan in plans {
            plan.validate()
                .map_err(|e| PricingError::validation(format!("Plan '{}': {}", plan.id, e)))?;
            self.check_tier_layout(&plan)?;

            if by_id.contains_key(&plan.id) {
                return Err(PricingError::validation(format!(
                    "Duplicate plan id in catalog: {}",
                    plan.id
                )));
            }
            by_id.insert(plan.id.clone(), plan);
        }

        let count = by_id.len();
        {
            let mut data = self.catalog.write();
            data.plans = by_id;
            data.last_updated = Utc::now();
        }

        self.publish(PricingEventType::CatalogReloaded, "*".to_string());
        info!("Plan catalog loaded with {} plans", count);
        Ok(())
    }

    /// Report tier gaps, overlaps and ordering problems
    ///
    /// The calculator prices whatever it is given, so layout problems are only
    /// warnings unless `strict_tiers` is set. Issues already reported for the
    /// same tiers drop to `debug!` so periodic reloads stay quiet.
    pub(super) fn check_tier_layout(&self, plan: &Plan) -> Result<()> {
        let issues = tier_layout_issues(plan);
        if issues.is_empty() {
            return Ok(());
        }

        if self.config.strict_tiers {
            return Err(PricingError::validation(format!(
                "Plan '{}': {}",
                plan.id,
                issues.join("; ")
            )));
        }

        if self.tiers_unchanged(plan) {
            for issue in &issues {
                debug!(plan = %plan.id, "{}", issue);
            }
        } else {
            for issue in &issues {
                warn!(plan = %plan.id, "{}", issue);
            }
        }
        Ok(())
    }

    /// Whether the current catalog already holds this plan with the same tiers
    pub(super) fn tiers_unchanged(&self, plan: &Plan) -> bool {
        self.catalog
            .read()
            .plans
            .get(&plan.id)
            .is_some_and(|known| known.pricing_tiers == plan.pricing_tiers)
    }
}
