//! Persistence Layer
//!
//! SQLite storage for the inbound order audit trail, via sqlx.
//!
//! # Database Schema
//!
//! ## Order Log Table
//! - id: Autoincrement integer, never reused
//! - payload: Raw webhook body exactly as received
//! - created_at: Timestamp set on insert

pub mod models;
pub mod repository;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::ConnectOptions;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Database connection pool
pub type DbPool = SqlitePool;

/// Database error
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Database connection error: {0}")]
    ConnectionError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrationError(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

/// Initialize the database connection pool and run migrations
///
/// # Arguments
/// - `database_url`: e.g. "sqlite://data/shopbridge.db" or "sqlite::memory:"
/// - `max_connections`: pool size; in-memory databases always use one connection
pub async fn init_database(database_url: &str, max_connections: u32) -> Result<DbPool, DatabaseError> {
    info!("Initializing database: {}", database_url);

    let in_memory = database_url.contains(":memory:");

    if !in_memory {
        if let Some(db_path) = database_url.strip_prefix("sqlite://") {
            if let Some(parent) = Path::new(db_path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        DatabaseError::ConnectionError(sqlx::Error::Configuration(Box::new(e)))
                    })?;
                }
            }
        }
    }

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .log_statements(tracing::log::LevelFilter::Debug);

    // Each connection to `:memory:` is a separate database
    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections.max(1))
    };

    let pool = pool_options
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    info!("✓ Database initialized successfully");

    Ok(pool)
}

async fn run_migrations(pool: &DbPool) -> Result<(), DatabaseError> {
    info!("Running database migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS order_log (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            payload TEXT NOT NULL,
            created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| DatabaseError::MigrationError(format!("Failed to create order_log table: {}", e)))?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_order_log_created_at ON order_log(created_at)")
        .execute(pool)
        .await
        .map_err(|e| DatabaseError::MigrationError(format!("Failed to create index: {}", e)))?;

    info!("✓ Database migrations completed successfully");

    Ok(())
}

/// Cheap connectivity probe for the health endpoint
pub async fn ping(pool: &DbPool) -> bool {
    sqlx::query("SELECT 1").execute(pool).await.is_ok()
}
