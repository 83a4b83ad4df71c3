//! API Routes
//!
//! Configures the Axum router with all endpoints.

use axum::{middleware, routing::get, Router};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use super::handlers::{
    health_handler, hello_handler, metrics_handler, redis_handler, AppState,
};
use super::middleware::track_metrics;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /` - Static greeting
/// - `GET /redis` - Read-through cache lookup
/// - `GET /healthz` - Store ping
/// - `GET /metrics` - Prometheus metrics
///
/// # Middleware
/// - Metrics: per-route request counter and latency histogram
/// - Tracing: Logs all requests
/// - Catch panic: a panicking handler becomes a 500
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(hello_handler))
        .route("/redis", get(redis_handler))
        .route("/healthz", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), track_metrics))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        .with_state(state)
}
