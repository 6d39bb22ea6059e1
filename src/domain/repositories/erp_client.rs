//! ERP Client Trait
//!
//! Primary delivery channel for quotations. A failed call is recovered by the
//! dispatcher through the Hot Import fallback.

use crate::domain::entities::quotation::Quotation;
use async_trait::async_trait;
use serde_json::Value;

pub type ErpResult<T> = Result<T, ErpError>;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ErpError {
    #[error("ERP API is not configured")]
    NotConfigured,

    #[error("ERP request failed: {0}")]
    NetworkError(String),

    #[error("ERP request timed out")]
    Timeout,

    #[error("ERP returned status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Malformed ERP response: {0}")]
    MalformedResponse(String),
}

#[async_trait]
pub trait ErpClient: Send + Sync {
    fn name(&self) -> &str;

    /// Create a quotation, returning the ERP's parsed JSON response.
    async fn create_quotation(&self, quotation: &Quotation) -> ErpResult<Value>;
}
