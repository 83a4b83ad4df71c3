//! Redis Store Module
//!
//! `CacheStore` implementation over a multiplexed Redis connection.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::IntoConnectionInfo;
use tracing::{debug, info};

use crate::cache::CacheStore;
use crate::config::Config;
use crate::error::{AppError, Result};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

// == Redis Store ==
/// Store handle opened once at startup and shared by every request.
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    /// Dials and authenticates against the configured store.
    ///
    /// Fails with `AppError::Connection` if the store is unreachable or
    /// rejects the credentials. No reconnection attempts are made here.
    pub async fn connect(config: &Config) -> Result<Self> {
        let url = connection_url(&config.redis_address, config.redis_tls);
        let mut info = url
            .as_str()
            .into_connection_info()
            .map_err(|e| AppError::Config(format!("invalid REDIS_URL '{}': {}", url, e)))?;
        if !config.redis_password.is_empty() {
            info.redis.password = Some(config.redis_password.clone());
        }

        let client = redis::Client::open(info).map_err(|e| AppError::Connection(e.to_string()))?;
        let manager_config = ConnectionManagerConfig::new()
            .set_number_of_retries(0)
            .set_connection_timeout(CONNECT_TIMEOUT);
        let conn = ConnectionManager::new_with_config(client, manager_config)
            .await
            .map_err(|e| AppError::Connection(e.to_string()))?;

        info!(
            address = %config.redis_address,
            tls = config.redis_tls,
            "Connected to cache store"
        );
        Ok(Self { conn })
    }

    /// Releases the store handle.
    pub fn close(self) {
        drop(self.conn);
        info!("Cache store connection closed");
    }
}

#[async_trait]
impl CacheStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.conn.clone();
        let value: Option<Vec<u8>> = redis::cmd("GET").arg(key).query_async(&mut conn).await?;
        debug!(key, found = value.is_some(), "GET");
        Ok(value)
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: () = set_pipeline(key, value, ttl).query_async(&mut conn).await?;

        debug!(key, ttl_secs = ttl.map(|t| t.as_secs()), "SET");
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.conn.clone();
        let reply: String = redis::cmd("PING").query_async(&mut conn).await?;
        if reply != "PONG" {
            return Err(AppError::Store(format!("unexpected PING reply: {}", reply)));
        }
        Ok(())
    }
}

// == Set Pipeline ==
/// Builds the MULTI/EXEC block for a fill.
///
/// `SET … KEEPTTL` leaves an existing deadline alone and `EXPIRE … NX` only
/// applies `ttl` when the key has none, so a concurrent fill's TTL survives.
pub fn set_pipeline(key: &str, value: &[u8], ttl: Option<Duration>) -> redis::Pipeline {
    let mut pipe = redis::pipe();
    pipe.atomic()
        .cmd("SET")
        .arg(key)
        .arg(value)
        .arg("KEEPTTL")
        .ignore();
    if let Some(ttl) = ttl {
        pipe.cmd("EXPIRE")
            .arg(key)
            .arg(ttl.as_secs())
            .arg("NX")
            .ignore();
    }
    pipe
}

// == Connection URL ==
/// Builds the connection URL for an address, selecting db 0.
///
/// Addresses that already carry a scheme are used as given.
pub fn connection_url(address: &str, tls: bool) -> String {
    if address.contains("://") {
        return address.to_string();
    }
    let scheme = if tls { "rediss" } else { "redis" };
    format!("{}://{}/0", scheme, address)
}
