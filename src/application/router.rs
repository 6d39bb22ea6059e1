use crate::application::handlers::orders_handler::{health_check, recent_orders};
use crate::application::handlers::webhook_handler::{receive_order, webhook_status};
use crate::application::handlers::{AppState, FailedResponse};
use crate::config::RelayConfig;
use crate::rate_limit::{create_rate_limiter, rate_limit_middleware, RateLimiterConfig};
use axum::extract::{DefaultBodyLimit, Request};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

pub const WEBHOOK_PATH: &str = "/woo-webhook/";
pub const RECENT_ORDERS_PATH: &str = "/woo-logs/";

/// Build the HTTP surface of the relay
pub fn build_router(state: AppState, config: &RelayConfig) -> Router {
    let limiter = create_rate_limiter(RateLimiterConfig {
        requests_per_minute: config.rate_limit_per_minute,
    });

    let webhook = Router::new()
        .route(WEBHOOK_PATH, get(webhook_status).post(receive_order))
        .route_layer(middleware::from_fn(move |request: Request, next: Next| {
            rate_limit_middleware(limiter.clone(), request, next)
        }));

    Router::new()
        .merge(webhook)
        .route(RECENT_ORDERS_PATH, get(recent_orders))
        .route("/health", get(health_check))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::disable())
                .layer(RequestBodyLimitLayer::new(config.max_body_bytes)),
        )
        .layer(middleware::map_response(body_limit_response))
        .with_state(state)
}

/// Replace the body limit's plain-text 413 with the JSON failure shape
async fn body_limit_response(response: Response) -> Response {
    if response.status() != StatusCode::PAYLOAD_TOO_LARGE {
        return response;
    }

    tracing::warn!("Rejected request: body exceeds size limit");
    (
        StatusCode::PAYLOAD_TOO_LARGE,
        Json(FailedResponse::new("Request body too large")),
    )
        .into_response()
}
