//! API Module
//!
//! HTTP handlers and routing for the service.
//!
//! # Endpoints
//! - `GET /` - Static greeting
//! - `GET /redis` - Cached-or-generated payload for the current second
//! - `GET /healthz` - Store ping
//! - `GET /metrics` - Prometheus metrics

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
