//! Cache Store Contract
//!
//! The three operations the read-through core needs from a key-value store.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

// == Cache Store ==
/// Key-value store consumed by the read-through handler.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Returns the raw value stored at `key`, or None when absent.
    ///
    /// Values are opaque bytes and are returned exactly as stored.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Writes `value` at `key`, keeping any expiration the key already has.
    ///
    /// `ttl` is applied only when the key carries no expiration after the
    /// write, so a deadline set by a concurrent fill is never clobbered.
    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<()>;
}
