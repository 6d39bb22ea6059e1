use crate::config::RelayConfig;
use crate::domain::entities::order_payload::{OrderPayload, UNKNOWN_REFERENCE};
use crate::domain::errors::RelayError;
use crate::domain::repositories::catalog_client::CatalogClient;
use crate::domain::repositories::erp_client::ErpClient;
use crate::domain::repositories::order_log::OrderLogRepository;
use crate::domain::services::dispatcher::{Delivery, QuotationDispatcher};
use crate::domain::services::name_enricher::NameEnricher;
use crate::domain::services::quotation_builder::build_quotation;
use crate::infrastructure::hansa_client::HansaClient;
use crate::infrastructure::hot_import::HotImportWriter;
use crate::infrastructure::woo_catalog_client::WooCatalogClient;
use crate::persistence::models::OrderLogRecord;
use crate::persistence::repository::SqliteOrderLogRepository;
use crate::persistence::DbPool;
use chrono::{DateTime, Local, NaiveDate, Utc};
use futures_util::future::join_all;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

/// Line of a logged order, re-enriched at read time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentOrderItem {
    pub sku: String,
    pub name: String,
    pub quantity: Value,
    pub price: Value,
}

/// Logged order as returned by the recent-orders query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentOrder {
    pub id: i64,
    pub order_id: String,
    pub total: Value,
    pub created_at: DateTime<Utc>,
    pub items: Vec<RecentOrderItem>,
}

/// Webhook relay: order log, enrichment, quotation delivery.
pub struct RelayService {
    order_log: Arc<dyn OrderLogRepository>,
    enricher: NameEnricher,
    dispatcher: QuotationDispatcher,
    recent_orders_limit: u32,
}

impl RelayService {
    pub fn new(
        order_log: Arc<dyn OrderLogRepository>,
        enricher: NameEnricher,
        dispatcher: QuotationDispatcher,
        recent_orders_limit: u32,
    ) -> Self {
        Self {
            order_log,
            enricher,
            dispatcher,
            recent_orders_limit,
        }
    }

    /// Wire the production collaborators described by `config`
    pub fn from_config(config: &RelayConfig, pool: DbPool) -> Self {
        let http = reqwest::Client::new();

        let catalog: Option<Arc<dyn CatalogClient>> = if config.woo.is_configured() {
            info!("WooCommerce catalog lookups enabled: {}", config.woo.api_url);
            Some(Arc::new(WooCatalogClient::new(http.clone(), config.woo.clone())))
        } else {
            warn!("WOO_API_URL not set, unnamed line items will be UNKNOWN");
            None
        };

        let erp: Option<Arc<dyn ErpClient>> = if config.hansa.is_configured() {
            info!("HansaWorld API delivery enabled: {}", config.hansa.api_url);
            Some(Arc::new(HansaClient::new(http, config.hansa.clone())))
        } else {
            warn!("HANSA_API_URL not set, all quotations go to Hot Import");
            None
        };

        info!("Hot Import folder: {}", config.hot_import_folder.display());

        Self::new(
            Arc::new(SqliteOrderLogRepository::new(pool)),
            NameEnricher::new(catalog),
            QuotationDispatcher::new(erp, HotImportWriter::new(config.hot_import_folder.clone())),
            config.recent_orders_limit,
        )
    }

    /// Process one webhook body and deliver it as a quotation dated today
    pub async fn handle_order(&self, raw_payload: &str) -> Result<Delivery, RelayError> {
        self.handle_order_on(raw_payload, Local::now().date_naive()).await
    }

    /// Process one webhook body with an explicit quotation date
    pub async fn handle_order_on(
        &self,
        raw_payload: &str,
        date: NaiveDate,
    ) -> Result<Delivery, RelayError> {
        let payload = OrderPayload::parse(raw_payload)
            .map_err(|e| RelayError::InvalidPayload(e.to_string()))?;

        let log_id = self.order_log.record(raw_payload).await?;
        info!("Logged order {} as entry {}", payload.reference(), log_id);

        let quotation = build_quotation(&payload, date, &self.enricher).await;
        let delivery = self.dispatcher.deliver(&quotation).await?;

        Ok(delivery)
    }

    /// Most recently logged orders, newest first, enriched from their raw payloads
    pub async fn recent_orders(&self) -> Result<Vec<RecentOrder>, RelayError> {
        let records = self.order_log.recent(self.recent_orders_limit).await?;
        let orders = join_all(records.into_iter().map(|record| self.describe(record))).await;
        Ok(orders)
    }

    async fn describe(&self, record: OrderLogRecord) -> RecentOrder {
        let payload = match OrderPayload::parse(&record.payload) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Stored order log {} is not valid JSON: {}", record.id, e);
                return RecentOrder {
                    id: record.id,
                    order_id: UNKNOWN_REFERENCE.to_string(),
                    total: Value::String("0".to_string()),
                    created_at: record.created_at,
                    items: Vec::new(),
                };
            }
        };

        let mut items = Vec::new();
        for item in payload.line_items() {
            let name = self.enricher.resolve_name(&item).await;
            items.push(RecentOrderItem {
                sku: item.sku_or_default(),
                name,
                quantity: item.quantity.into_json(),
                price: item.price.into_json(),
            });
        }

        RecentOrder {
            id: record.id,
            order_id: payload.reference(),
            total: payload.total().into_json(),
            created_at: record.created_at,
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::catalog_client::{CatalogError, CatalogResult};
    use crate::persistence::{init_database, DatabaseError};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Catalog whose answers can be changed between calls
    struct SwitchableCatalog {
        name: Mutex<Option<String>>,
    }

    #[async_trait]
    impl CatalogClient for SwitchableCatalog {
        async fn product_name(&self, _sku: &str) -> CatalogResult<Option<String>> {
            match self.name.lock().unwrap().clone() {
                Some(name) => Ok(Some(name)),
                None => Err(CatalogError::NetworkError("connection refused".to_string())),
            }
        }
    }

    struct BrokenLog;

    #[async_trait]
    impl OrderLogRepository for BrokenLog {
        async fn record(&self, _raw: &str) -> Result<i64, DatabaseError> {
            Err(DatabaseError::QueryError("disk I/O error".to_string()))
        }

        async fn recent(&self, _limit: u32) -> Result<Vec<OrderLogRecord>, DatabaseError> {
            Err(DatabaseError::QueryError("disk I/O error".to_string()))
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    async fn service_with(
        catalog: Option<Arc<dyn CatalogClient>>,
        folder: &std::path::Path,
    ) -> (RelayService, SqliteOrderLogRepository) {
        let pool = init_database("sqlite::memory:", 1).await.unwrap();
        let repo = SqliteOrderLogRepository::new(pool);
        let service = RelayService::new(
            Arc::new(repo.clone()),
            NameEnricher::new(catalog),
            QuotationDispatcher::new(None, HotImportWriter::new(folder)),
            5,
        );
        (service, repo)
    }

    #[tokio::test]
    async fn test_order_logged_and_written_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let (service, repo) = service_with(None, dir.path()).await;

        let raw = r#"{"id":"101","total":"20","line_items":[{"sku":"AB1","quantity":2,"price":10}]}"#;
        let delivery = service.handle_order_on(raw, date()).await.unwrap();

        let path = dir.path().join("quotation_101.txt");
        assert_eq!(delivery, Delivery::File { path: path.clone() });
        let contents = std::fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[1], "SHOP\t101\t2026-10-17\tUNKNOWN\tAB1\t2\t10");

        let logged = repo.recent(1).await.unwrap();
        assert_eq!(logged[0].payload, raw);
    }

    #[tokio::test]
    async fn test_invalid_json_is_rejected_before_logging() {
        let dir = tempfile::tempdir().unwrap();
        let (service, repo) = service_with(None, dir.path()).await;

        let err = service.handle_order_on("{not json", date()).await.unwrap_err();

        assert!(err.is_client_error());
        assert!(repo.recent(5).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_log_failure_aborts_before_delivery() {
        let dir = tempfile::tempdir().unwrap();
        let service = RelayService::new(
            Arc::new(BrokenLog),
            NameEnricher::disabled(),
            QuotationDispatcher::new(None, HotImportWriter::new(dir.path())),
            5,
        );

        let err = service.handle_order_on(r#"{"id":"9"}"#, date()).await.unwrap_err();

        assert!(matches!(err, RelayError::OrderLog(_)));
        assert!(!dir.path().join("quotation_9.txt").exists());
    }

    #[tokio::test]
    async fn test_recent_orders_reenrich_on_read() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Arc::new(SwitchableCatalog {
            name: Mutex::new(None),
        });
        let (service, repo) = service_with(Some(catalog.clone()), dir.path()).await;

        let raw = r#"{"order_id":55,"total":"12.00","line_items":[{"sku":"AB1","quantity":1,"price":"12.00"}]}"#;
        service.handle_order_on(raw, date()).await.unwrap();

        let before = service.recent_orders().await.unwrap();
        assert_eq!(before[0].items[0].name, "UNKNOWN");
        assert_eq!(before[0].order_id, "55");
        assert_eq!(before[0].total, json!("12.00"));

        *catalog.name.lock().unwrap() = Some("Blue Mug".to_string());
        let after = service.recent_orders().await.unwrap();
        assert_eq!(after[0].items[0].name, "Blue Mug");

        let stored = repo.recent(1).await.unwrap();
        assert_eq!(stored[0].payload, raw);
    }

    #[tokio::test]
    async fn test_recent_orders_limit_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let (service, repo) = service_with(None, dir.path()).await;

        for i in 1..=7 {
            repo.record(&format!(r#"{{"id":{}}}"#, i)).await.unwrap();
        }
        repo.record("garbage").await.unwrap();

        let orders = service.recent_orders().await.unwrap();
        let ids: Vec<&str> = orders.iter().map(|o| o.order_id.as_str()).collect();
        assert_eq!(ids, vec!["unknown", "7", "6", "5", "4"]);
        assert!(orders[0].items.is_empty());
    }
}
