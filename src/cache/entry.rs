//! Cache Entry Module
//!
//! Defines the structure for entries held by the in-memory store.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A stored value with an optional deadline.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored value
    pub value: Vec<u8>,
    /// Deadline after which the entry reads as absent, None = no expiration
    pub expires_at: Option<Instant>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry without expiration.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            expires_at: None,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time reaches its deadline.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(deadline) => Instant::now() >= deadline,
            None => false,
        }
    }

    // == Expire If Unset ==
    /// Applies `ttl` only when the entry carries no deadline yet.
    ///
    /// Returns true if the deadline was set.
    pub fn expire_nx(&mut self, ttl: Duration) -> bool {
        if self.expires_at.is_some() {
            return false;
        }
        self.expires_at = Some(Instant::now() + ttl);
        true
    }

    // == Time To Live ==
    /// Returns the remaining lifetime, or None if no expiration is set.
    pub fn ttl_remaining(&self) -> Option<Duration> {
        self.expires_at
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation_no_ttl() {
        let entry = CacheEntry::new(b"test_value".to_vec());

        assert_eq!(entry.value, b"test_value");
        assert!(entry.expires_at.is_none());
        assert!(!entry.is_expired());
        assert!(entry.ttl_remaining().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_expiration() {
        let mut entry = CacheEntry::new(b"test_value".to_vec());
        assert!(entry.expire_nx(Duration::from_secs(1)));
        assert!(!entry.is_expired());

        tokio::time::advance(Duration::from_millis(1100)).await;

        assert!(entry.is_expired());
        assert_eq!(entry.ttl_remaining(), Some(Duration::ZERO));
    }

    #[tokio::test(start_paused = true)]
    async fn test_expire_nx_keeps_existing_deadline() {
        let mut entry = CacheEntry::new(b"test_value".to_vec());
        assert!(entry.expire_nx(Duration::from_secs(10)));
        assert!(!entry.expire_nx(Duration::from_secs(100)));

        assert_eq!(entry.ttl_remaining(), Some(Duration::from_secs(10)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_expiration_boundary_condition() {
        let entry = CacheEntry {
            value: b"test".to_vec(),
            expires_at: Some(Instant::now()),
        };

        assert!(entry.is_expired(), "Entry should be expired at boundary");
    }
}
