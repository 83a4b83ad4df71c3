//! API Handlers
//!
//! HTTP request handlers for each endpoint.

use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};
use tracing::info;

use crate::cache::{CacheStore, ProcessSalt, RandomSource, ReadThrough, SystemClock, TtlPolicy};
use crate::config::Config;
use crate::error::Result;
use crate::metrics::Metrics;
use crate::payload::FakePayload;

/// Application state shared across all handlers.
///
/// Built once at startup; handlers only ever read it.
#[derive(Clone)]
pub struct AppState {
    /// Read-through lookup and the store handle behind it
    pub cache: Arc<ReadThrough>,
    /// Prometheus metrics
    pub metrics: Arc<Metrics>,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(cache: ReadThrough, metrics: Metrics) -> Self {
        Self {
            cache: Arc::new(cache),
            metrics: Arc::new(metrics),
        }
    }

    /// Creates a new AppState from configuration and an open store.
    ///
    /// Draws the process salt when key salting is enabled.
    pub fn from_config(config: &Config, store: Arc<dyn CacheStore>) -> Result<Self> {
        let random = Arc::new(RandomSource::from_os());
        let salt = config
            .salt_keys
            .then(|| ProcessSalt::generate(&random));
        if let Some(salt) = &salt {
            info!(salt = %salt, "Generated process salt");
        }

        let cache = ReadThrough::new(
            store,
            Arc::new(FakePayload::default()),
            random,
            Arc::new(SystemClock),
            salt,
            TtlPolicy::from_config(config),
        );
        Ok(Self::new(cache, Metrics::new()?))
    }
}

/// Handler for GET /
pub async fn hello_handler() -> &'static str {
    "Hello, World!"
}

/// Handler for GET /redis
///
/// Returns the value cached for the current second, filling it on a miss.
/// The stored bytes go out untouched, whether or not they are valid UTF-8.
pub async fn redis_handler(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let lookup = state.cache.fetch().await?;
    state.metrics.record_lookup(lookup.outcome);
    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        lookup.value,
    ))
}

/// Handler for GET /healthz
///
/// Pings the store.
pub async fn health_handler(State(state): State<AppState>) -> Result<&'static str> {
    state.cache.store().ping().await?;
    Ok("OK")
}

/// Handler for GET /metrics
pub async fn metrics_handler(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let body = state.metrics.render()?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    ))
}
