use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::{
    cors::CorsLayer, limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer,
};

use crate::handlers::{self, AppState};

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Sustained requests per second allowed for one client IP.
pub const RATE_LIMIT_PER_SECOND: u64 = 5;
/// Requests one client IP may send back to back before being throttled.
pub const RATE_LIMIT_BURST: u32 = 10;

/// Public API routes, without rate limiting.
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/contact", post(handlers::submit_contact))
        .route("/api/v1/services", get(handlers::list_services))
        .route("/api/v1/services/settings", get(handlers::service_settings))
        .route("/api/v1/services/:slug", get(handlers::get_service))
        .route("/api/v1/faq", get(handlers::list_faq))
        .route("/api/v1/about", get(handlers::about_us))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
}

/// Wraps routes in a per-IP rate limiter.
///
/// The client IP comes from `X-Forwarded-For`, `X-Real-IP` or `Forwarded`,
/// falling back to the peer address from connect info.
pub fn rate_limited(
    routes: Router<Arc<AppState>>,
    per_second: u64,
    burst: u32,
) -> anyhow::Result<Router<Arc<AppState>>> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(per_second)
            .burst_size(burst)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .ok_or_else(|| anyhow::anyhow!("Invalid rate limiter configuration"))?,
    );

    Ok(routes.layer(GovernorLayer {
        config: governor_conf,
    }))
}

/// Final app: health check (outside any rate limit), the given API routes,
/// request timeout, tracing and CORS.
pub fn build_app(state: Arc<AppState>, api: Router<Arc<AppState>>) -> Router {
    let timeout = Duration::from_secs(state.config.request_timeout_secs);

    Router::new()
        .route("/health", get(handlers::health))
        .merge(api)
        .with_state(state)
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
