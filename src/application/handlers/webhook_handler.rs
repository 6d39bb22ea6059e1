use super::AppState;
use crate::domain::errors::RelayError;
use crate::domain::services::dispatcher::Delivery;
use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

/// Receive a WooCommerce order webhook and relay it to HansaWorld
pub async fn receive_order(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, RelayError> {
    let raw = std::str::from_utf8(&body)
        .map_err(|e| RelayError::InvalidPayload(format!("body is not UTF-8: {}", e)))?;

    let delivery = state.relay.handle_order(raw).await?;

    let response = match delivery {
        Delivery::Api { response } => json!({
            "status": "ok",
            "method": "api",
            "hansa_response": response
        }),
        Delivery::File { path } => json!({
            "status": "ok",
            "method": "file",
            "file": path.display().to_string()
        }),
    };

    Ok(Json(response))
}

/// Liveness message for manual checks of the webhook URL
pub async fn webhook_status() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "WooCommerce webhook endpoint is live. POST order payloads here."
    }))
}
