//! Database Models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Order log record in database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderLogRecord {
    pub id: i64,
    /// Raw webhook body, byte-identical to what was received
    pub payload: String,
    pub created_at: DateTime<Utc>,
}
