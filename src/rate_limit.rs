use crate::application::handlers::FailedResponse;
use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use std::num::NonZeroU32;
use std::sync::Arc;

/// Rate limiter configuration
pub struct RateLimiterConfig {
    /// Maximum requests per minute
    pub requests_per_minute: u32,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            requests_per_minute: 600,
        }
    }
}

/// Global rate limiter
pub type GlobalRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// Create a new rate limiter. A zero rate is treated as one request per minute.
pub fn create_rate_limiter(config: RateLimiterConfig) -> GlobalRateLimiter {
    let quota = Quota::per_minute(NonZeroU32::new(config.requests_per_minute).unwrap_or(NonZeroU32::MIN));
    Arc::new(RateLimiter::direct(quota))
}

/// Middleware to apply rate limiting
pub async fn rate_limit_middleware(
    limiter: GlobalRateLimiter,
    request: Request,
    next: Next,
) -> Response {
    match limiter.check() {
        Ok(_) => next.run(request).await,
        Err(_) => {
            tracing::warn!("Rate limit exceeded on {}", request.uri().path());
            (
                StatusCode::TOO_MANY_REQUESTS,
                Json(FailedResponse::new("Rate limit exceeded. Please try again later.")),
            )
                .into_response()
        }
    }
}
