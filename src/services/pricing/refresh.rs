//! Periodic catalog reloading

use super::service::PricingService;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

impl PricingService {
    /// Start the catalog reload task
    ///
    /// Returns `None` when no catalog path is configured or the refresh
    /// interval is 0. A failed reload keeps the previous catalog.
    pub fn start_auto_refresh_task(self: Arc<Self>) -> Option<tokio::task::JoinHandle<()>> {
        if self.config.catalog_path.is_none() || self.config.refresh_interval == 0 {
            return None;
        }
        let period = Duration::from_secs(self.config.refresh_interval);

        let service = Arc::clone(&self);
        Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // first tick fires immediately and the catalog is already loaded
            interval.tick().await;

            loop {
                interval.tick().await;

                if let Err(e) = service.reload().await {
                    warn!("Auto-refresh of plan catalog failed: {}", e);
                } else {
                    debug!("Auto-refresh of plan catalog completed successfully");
                }
            }
        }))
    }
}
