pub mod orders_handler;
pub mod webhook_handler;

use crate::domain::errors::RelayError;
use crate::application::services::relay_service::RelayService;
use crate::persistence::DbPool;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<RelayService>,
    pub pool: DbPool,
}

impl AppState {
    pub fn new(relay: RelayService, pool: DbPool) -> Self {
        Self {
            relay: Arc::new(relay),
            pool,
        }
    }
}

/// Body of every unsuccessful response
#[derive(Debug, Serialize, Deserialize)]
pub struct FailedResponse {
    pub status: String,
    pub error: String,
}

impl FailedResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            status: "failed".to_string(),
            error: error.into(),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Rejected request: {}", self);
        }

        (status, Json(FailedResponse::new(self.to_string()))).into_response()
    }
}
