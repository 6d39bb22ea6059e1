//! Database Repository
//!
//! Data access for the order log.

use super::models::OrderLogRecord;
use super::{DatabaseError, DbPool};
use crate::domain::repositories::order_log::OrderLogRepository;
use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, error};

/// SQLite-backed order log
#[derive(Clone)]
pub struct SqliteOrderLogRepository {
    pool: DbPool,
}

impl SqliteOrderLogRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get an entry by id
    pub async fn get(&self, id: i64) -> Result<Option<OrderLogRecord>, DatabaseError> {
        sqlx::query_as::<_, OrderLogRecord>("SELECT * FROM order_log WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to get order log {}: {}", id, e);
                DatabaseError::QueryError(format!("Failed to get order log: {}", e))
            })
    }
}

#[async_trait]
impl OrderLogRepository for SqliteOrderLogRepository {
    async fn record(&self, raw_payload: &str) -> Result<i64, DatabaseError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO order_log (payload, created_at)
            VALUES (?1, ?2)
            RETURNING id
            "#,
        )
        .bind(raw_payload)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to record order log: {}", e);
            DatabaseError::QueryError(format!("Failed to record order log: {}", e))
        })?;

        debug!("Recorded order log entry {}", id);
        Ok(id)
    }

    async fn recent(&self, limit: u32) -> Result<Vec<OrderLogRecord>, DatabaseError> {
        sqlx::query_as::<_, OrderLogRecord>("SELECT * FROM order_log ORDER BY id DESC LIMIT ?1")
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to get recent order logs: {}", e);
                DatabaseError::QueryError(format!("Failed to get recent order logs: {}", e))
            })
    }
}
