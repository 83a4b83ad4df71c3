//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use crate::error::{AppError, Result};

const DEFAULT_SERVER_PORT: u16 = 1323;
const DEFAULT_TTL_MIN_SECS: u64 = 10;
const DEFAULT_TTL_MAX_SECS: u64 = 129;

/// Server configuration parameters.
///
/// The store address and password are required; everything else has a default.
#[derive(Debug, Clone)]
pub struct Config {
    /// Store address as `host:port`
    pub redis_address: String,
    /// Store password, empty means no AUTH
    pub redis_password: String,
    /// Dial the store over TLS
    pub redis_tls: bool,
    /// HTTP server port
    pub server_port: u16,
    /// Append the per-process salt to derived keys
    pub salt_keys: bool,
    /// Apply a random expiration when filling a key
    pub ttl_jitter: bool,
    /// Lower bound of the random expiration, in seconds
    pub ttl_min_secs: u64,
    /// Upper bound of the random expiration, in seconds
    pub ttl_max_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `REDIS_URL` - Store address (required)
    /// - `REDIS_PASSWORD` - Store password (required, may be empty)
    /// - `REDIS_TLS` - Use TLS (default: false)
    /// - `SERVER_PORT` - HTTP server port (default: 1323)
    /// - `CACHE_SALT_KEYS` - Salt keys per process (default: true)
    /// - `CACHE_TTL_JITTER` - Random TTL on fill (default: true)
    /// - `CACHE_TTL_MIN` / `CACHE_TTL_MAX` - TTL bounds in seconds (default: 10 / 129)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let redis_address = lookup("REDIS_URL")
            .ok_or_else(|| AppError::Config("must set REDIS_URL".to_string()))?;
        let redis_password = lookup("REDIS_PASSWORD")
            .ok_or_else(|| AppError::Config("must set REDIS_PASSWORD".to_string()))?;

        let defaults = Self::default();
        let config = Self {
            redis_address,
            redis_password,
            redis_tls: lookup("REDIS_TLS")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.redis_tls),
            server_port: lookup("SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            salt_keys: lookup("CACHE_SALT_KEYS")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.salt_keys),
            ttl_jitter: lookup("CACHE_TTL_JITTER")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.ttl_jitter),
            ttl_min_secs: lookup("CACHE_TTL_MIN")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.ttl_min_secs),
            ttl_max_secs: lookup("CACHE_TTL_MAX")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.ttl_max_secs),
        };

        // EXPIRE 0 deletes the key on the spot, so a fill would never be read back.
        if config.ttl_jitter && config.ttl_min_secs == 0 {
            return Err(AppError::Config(
                "CACHE_TTL_MIN must be at least 1 second".to_string(),
            ));
        }

        if config.ttl_min_secs > config.ttl_max_secs {
            return Err(AppError::Config(format!(
                "CACHE_TTL_MIN ({}) exceeds CACHE_TTL_MAX ({})",
                config.ttl_min_secs, config.ttl_max_secs
            )));
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            redis_address: "127.0.0.1:6379".to_string(),
            redis_password: String::new(),
            redis_tls: false,
            server_port: DEFAULT_SERVER_PORT,
            salt_keys: true,
            ttl_jitter: true,
            ttl_min_secs: DEFAULT_TTL_MIN_SECS,
            ttl_max_secs: DEFAULT_TTL_MAX_SECS,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
