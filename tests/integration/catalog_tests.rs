//! Catalog integration tests
//!
//! Loading, reloading and quoting through `PricingService`.

#[cfg(test)]
mod tests {
    use crate::common::CatalogFixture;
    use crate::common::assertions::QuoteAssertions;
    use plan_pricing::config::PricingConfig;
    use plan_pricing::{PricingError, PricingEventType, PricingModel, PricingService};
    use rust_decimal_macros::dec;
    use std::sync::Arc;
    use std::time::Duration;

    fn service_for(fixture: &CatalogFixture) -> PricingService {
        PricingService::new(PricingConfig {
            catalog_path: Some(fixture.path()),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_load_yaml_catalog_and_quote() {
        let fixture = CatalogFixture::yaml();
        let service = service_for(&fixture);
        service.initialize().await.unwrap();

        let plans = service.list_plans();
        let ids: Vec<&str> = plans.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["growth", "scale", "starter", "team"]);

        service.quote("starter", 7).unwrap().assert_billed(dec!(29), 1);
        service.quote("team", 10).unwrap().assert_billed(dec!(99), 6);
        service.quote("growth", 25).unwrap().assert_billed(dec!(249), 25);
        service.quote("scale", 100).unwrap().assert_billed(dec!(670), 100);
    }

    #[tokio::test]
    async fn test_load_json_catalog() {
        let fixture = CatalogFixture::with_content(
            r#"{"plans": [{"id": "solo", "name": "Solo", "pricing_model": "flat", "price": 12.5}]}"#,
            ".json",
        );
        let service = service_for(&fixture);
        service.initialize().await.unwrap();

        let plan = service.get_plan("solo").unwrap();
        assert_eq!(plan.pricing_model, PricingModel::Flat);
        assert_eq!(plan.price, dec!(12.5));
    }

    #[tokio::test]
    async fn test_initialize_without_catalog_is_empty() {
        let service = PricingService::new(PricingConfig::default());
        service.initialize().await.unwrap();
        assert!(service.list_plans().is_empty());
        assert!(matches!(service.reload().await, Err(PricingError::Config(_))));
    }

    #[tokio::test]
    async fn test_unknown_pricing_model_fails_catalog_load() {
        let fixture = CatalogFixture::with_content(
            "plans:\n  - id: odd\n    pricing_model: usage_based\n    price: 1\n",
            ".yaml",
        );
        let service = service_for(&fixture);
        let err = service.initialize().await.unwrap_err();
        assert!(matches!(err, PricingError::Parsing(msg) if msg.contains("pricing_model")));
    }

    #[tokio::test]
    async fn test_invalid_plan_keeps_previous_catalog() {
        let fixture = CatalogFixture::yaml();
        let service = service_for(&fixture);
        service.initialize().await.unwrap();

        fixture.rewrite(
            "plans:\n  - id: team\n    pricing_model: per_seat\n    price: 49\n",
        );
        let err = service.reload().await.unwrap_err();
        assert!(matches!(err, PricingError::Validation(msg) if msg.contains("pricePerUser")));
        assert_eq!(service.list_plans().len(), 4);
    }

    #[tokio::test]
    async fn test_reload_replaces_plans_and_notifies() {
        let fixture = CatalogFixture::yaml();
        let service = service_for(&fixture);
        service.initialize().await.unwrap();
        let mut receiver = service.subscribe_to_updates();

        fixture.rewrite("plans:\n  - id: starter\n    pricing_model: flat\n    price: 39\n");
        service.reload().await.unwrap();

        assert_eq!(service.list_plans().len(), 1);
        service.quote("starter", 1).unwrap().assert_billed(dec!(39), 1);
        assert!(service.get_plan("team").is_none());

        let event = receiver.try_recv().unwrap();
        assert_eq!(event.event_type, PricingEventType::CatalogReloaded);
        assert_eq!(event.plan_id, "*");
    }

    #[tokio::test]
    async fn test_strict_tiers_rejects_overlapping_catalog() {
        let fixture = CatalogFixture::with_content(
            r#"
plans:
  - id: growth
    pricing_model: tiered
    pricing_tiers:
      - { min_users: 1, max_users: 20, price: 99 }
      - { min_users: 11, price: 249 }
"#,
            ".yaml",
        );

        let lenient = service_for(&fixture);
        lenient.initialize().await.unwrap();
        // first match in list order
        lenient.quote("growth", 15).unwrap().assert_billed(dec!(99), 15);

        let strict = PricingService::new(PricingConfig {
            catalog_path: Some(fixture.path()),
            strict_tiers: true,
            ..Default::default()
        });
        let err = strict.initialize().await.unwrap_err();
        assert!(matches!(err, PricingError::Validation(msg) if msg.contains("overlap")));
    }

    #[tokio::test]
    async fn test_auto_refresh_picks_up_changes() {
        let fixture = CatalogFixture::yaml();
        let service = Arc::new(PricingService::new(PricingConfig {
            catalog_path: Some(fixture.path()),
            refresh_interval: 1,
            ..Default::default()
        }));
        service.initialize().await.unwrap();

        let handle = Arc::clone(&service)
            .start_auto_refresh_task()
            .expect("refresh task should start");

        fixture.rewrite("plans:\n  - id: starter\n    pricing_model: flat\n    price: 59\n");
        tokio::time::sleep(Duration::from_millis(1500)).await;
        handle.abort();

        assert_eq!(service.get_plan("starter").unwrap().price, dec!(59));
        assert!(service.get_plan("team").is_none());
    }

    #[test]
    fn test_auto_refresh_disabled_without_interval() {
        let service = Arc::new(PricingService::new(PricingConfig {
            catalog_path: Some("plans.yaml".to_string()),
            ..Default::default()
        }));
        assert!(service.start_auto_refresh_task().is_none());
    }
}
