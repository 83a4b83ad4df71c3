//! Read-Through Module
//!
//! Looks up the key for the current second and fills it with a fresh fake
//! payload when the store has nothing there.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use crate::cache::{current_key, Clock, CacheStore, ProcessSalt, RandomSource, TtlPolicy};
use crate::error::Result;
use crate::payload::PayloadSource;

// == Outcome ==
/// Where the returned value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Hit,
    Miss,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Hit => "hit",
            Outcome::Miss => "miss",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a single read-through lookup.
#[derive(Debug, Clone)]
pub struct Lookup {
    pub key: String,
    pub value: Vec<u8>,
    pub outcome: Outcome,
}

// == Read Through ==
/// Everything a lookup depends on, built once at startup.
pub struct ReadThrough {
    store: Arc<dyn CacheStore>,
    payload: Arc<dyn PayloadSource>,
    random: Arc<RandomSource>,
    clock: Arc<dyn Clock>,
    salt: Option<ProcessSalt>,
    ttl: TtlPolicy,
}

impl ReadThrough {
    pub fn new(
        store: Arc<dyn CacheStore>,
        payload: Arc<dyn PayloadSource>,
        random: Arc<RandomSource>,
        clock: Arc<dyn Clock>,
        salt: Option<ProcessSalt>,
        ttl: TtlPolicy,
    ) -> Self {
        Self {
            store,
            payload,
            random,
            clock,
            salt,
            ttl,
        }
    }

    pub fn store(&self) -> &Arc<dyn CacheStore> {
        &self.store
    }

    pub fn salt(&self) -> Option<&ProcessSalt> {
        self.salt.as_ref()
    }

    /// Key for the current second.
    pub fn key(&self) -> String {
        current_key(self.clock.as_ref(), self.salt.as_ref().map(ProcessSalt::as_str))
    }

    /// Returns the stored value for the current key, filling it on a miss.
    ///
    /// Fails at the first failing step; a failed GET never generates.
    /// Concurrent fills of the same key are not coordinated, the last SET wins.
    pub async fn fetch(&self) -> Result<Lookup> {
        let key = self.key();

        if let Some(value) = self.store.get(&key).await? {
            if !value.is_empty() {
                debug!(key = %key, "cache hit");
                return Ok(Lookup {
                    key,
                    value,
                    outcome: Outcome::Hit,
                });
            }
        }

        let value = self.random.with(|rng| self.payload.generate(rng))?.into_bytes();
        let ttl = self.ttl.draw(&self.random);
        self.store.set(&key, &value, ttl).await?;

        info!(
            key = %key,
            ttl_secs = ttl.map(|t| t.as_secs()),
            bytes = value.len(),
            "cache miss, filled"
        );
        Ok(Lookup {
            key,
            value,
            outcome: Outcome::Miss,
        })
    }
}
