//! Product Catalog Trait
//!
//! Lookup of product names by SKU against the shop's catalog. Implemented by
//! the WooCommerce REST client and by in-memory fakes in tests.

use async_trait::async_trait;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors from a catalog lookup. Never surfaced to webhook callers.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog request failed: {0}")]
    NetworkError(String),

    #[error("Catalog request timed out")]
    Timeout,

    #[error("Catalog returned status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Malformed catalog response: {0}")]
    MalformedResponse(String),

    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),
}

#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Name of the first product matching `sku`, `None` when nothing matches.
    async fn product_name(&self, sku: &str) -> CatalogResult<Option<String>>;
}
