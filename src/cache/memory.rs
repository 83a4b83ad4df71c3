//! In-Memory Store Module
//!
//! A process-local `CacheStore` with the same conditional-expiry semantics as
//! the Redis backend.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::{CacheEntry, CacheStore};
use crate::error::Result;

// == Memory Store ==
/// HashMap-backed store guarded by a tokio `RwLock`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remaining lifetime of `key`; None when absent or persistent.
    pub async fn ttl(&self, key: &str) -> Option<Duration> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .and_then(CacheEntry::ttl_remaining)
    }

    /// Number of live entries.
    pub async fn len(&self) -> usize {
        let entries = self.entries.read().await;
        entries.values().filter(|entry| !entry.is_expired()).count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.value.clone()))
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let mut entries = self.entries.write().await;

        let entry = entries
            .entry(key.to_string())
            .or_insert_with(|| CacheEntry::new(Vec::new()));
        // An expired entry is gone as far as callers can tell, deadline included.
        if entry.is_expired() {
            *entry = CacheEntry::new(Vec::new());
        }
        entry.value = value.to_vec();

        if let Some(ttl) = ttl {
            entry.expire_nx(ttl);
        }

        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
