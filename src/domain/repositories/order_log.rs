//! Order Log Trait
//!
//! Append-only audit trail of inbound webhook bodies.

use crate::persistence::models::OrderLogRecord;
use crate::persistence::DatabaseError;
use async_trait::async_trait;

#[async_trait]
pub trait OrderLogRepository: Send + Sync {
    /// Store the raw body verbatim, returning the new entry id.
    async fn record(&self, raw_payload: &str) -> Result<i64, DatabaseError>;

    /// Most recent entries, newest first.
    async fn recent(&self, limit: u32) -> Result<Vec<OrderLogRecord>, DatabaseError>;
}
