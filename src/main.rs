//! Read-through cache demo server
//!
//! Serves fake data through a Redis cache keyed by the current second.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use readthrough_demo::api::{create_router, AppState};
use readthrough_demo::cache::RedisStore;
use readthrough_demo::config::Config;

/// Main entry point for the server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Connect to the cache store
/// 4. Build application state (salt, TTL policy, metrics)
/// 5. Start HTTP server on configured port
/// 6. Handle graceful shutdown on SIGINT/SIGTERM, then release the store
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "readthrough_demo=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting read-through cache demo");

    // Configuration and connection failures end the process before binding
    let config = Config::from_env().inspect_err(|e| error!("{}", e))?;
    info!(
        "Configuration loaded: redis={}, tls={}, port={}, salt_keys={}, ttl_jitter={} ({}..={}s)",
        config.redis_address,
        config.redis_tls,
        config.server_port,
        config.salt_keys,
        config.ttl_jitter,
        config.ttl_min_secs,
        config.ttl_max_secs
    );

    let store = Arc::new(
        RedisStore::connect(&config)
            .await
            .inspect_err(|e| error!("{}", e))?,
    );

    let state = AppState::from_config(&config, store.clone())?;
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    // The router and its state are gone once serve returns.
    match Arc::try_unwrap(store) {
        Ok(store) => store.close(),
        Err(_) => warn!("Cache store still referenced at shutdown"),
    }

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
