use crate::domain::entities::order_payload::LineItemInput;
use crate::domain::repositories::catalog_client::CatalogClient;
use std::sync::Arc;
use tracing::{debug, warn};

/// Name used when neither the payload nor the catalog provides one
pub const UNKNOWN_NAME: &str = "UNKNOWN";

/// Best-effort product name resolution for order lines.
///
/// Lookups never fail the caller: any catalog problem degrades to
/// [`UNKNOWN_NAME`] and is only logged.
#[derive(Clone)]
pub struct NameEnricher {
    catalog: Option<Arc<dyn CatalogClient>>,
}

impl NameEnricher {
    pub fn new(catalog: Option<Arc<dyn CatalogClient>>) -> Self {
        Self { catalog }
    }

    /// Enricher without a catalog; unnamed items resolve to `UNKNOWN`.
    pub fn disabled() -> Self {
        Self { catalog: None }
    }

    pub async fn resolve_name(&self, item: &LineItemInput) -> String {
        if let Some(name) = item.given_name() {
            return name.to_string();
        }

        let Some(sku) = item.lookup_sku() else {
            debug!("Line item has neither name nor SKU");
            return UNKNOWN_NAME.to_string();
        };

        let Some(catalog) = &self.catalog else {
            debug!("No catalog configured, cannot resolve name for SKU {}", sku);
            return UNKNOWN_NAME.to_string();
        };

        match catalog.product_name(sku).await {
            Ok(Some(name)) if !name.trim().is_empty() => name,
            Ok(_) => {
                debug!("No catalog product found for SKU {}", sku);
                UNKNOWN_NAME.to_string()
            }
            Err(e) => {
                warn!("Catalog lookup failed for SKU {}: {}", sku, e);
                UNKNOWN_NAME.to_string()
            }
        }
    }
}
