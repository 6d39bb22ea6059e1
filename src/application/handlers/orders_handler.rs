use super::AppState;
use crate::application::services::relay_service::RecentOrder;
use crate::domain::errors::RelayError;
use crate::persistence;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Debug, Serialize)]
pub struct RecentOrdersResponse {
    #[serde(rename = "recentOrders")]
    pub recent_orders: Vec<RecentOrder>,
}

/// Last logged orders, newest first
pub async fn recent_orders(
    State(state): State<AppState>,
) -> Result<Json<RecentOrdersResponse>, RelayError> {
    let recent_orders = state.relay.recent_orders().await?;
    Ok(Json(RecentOrdersResponse { recent_orders }))
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let database = persistence::ping(&state.pool).await;
    Json(json!({
        "status": "running",
        "database": database
    }))
}
