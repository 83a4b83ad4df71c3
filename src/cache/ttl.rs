//! TTL Policy Module
//!
//! Decides which expiration, if any, accompanies a fill.

use std::time::Duration;

use rand::Rng;

use crate::cache::RandomSource;
use crate::config::Config;
use crate::error::{AppError, Result};

// == TTL Policy ==
/// Expiration applied to freshly filled keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TtlPolicy {
    /// Entries never expire
    Persistent,
    /// Entries expire after a uniform draw in `[min_secs, max_secs]`
    Jitter { min_secs: u64, max_secs: u64 },
}

impl TtlPolicy {
    /// Checked constructor for a jittered policy.
    ///
    /// Rejects a zero lower bound and inverted bounds.
    pub fn jitter(min_secs: u64, max_secs: u64) -> Result<Self> {
        if min_secs == 0 {
            return Err(AppError::Config(
                "TTL lower bound must be at least 1 second".to_string(),
            ));
        }
        if min_secs > max_secs {
            return Err(AppError::Config(format!(
                "TTL lower bound ({}) exceeds upper bound ({})",
                min_secs, max_secs
            )));
        }
        Ok(TtlPolicy::Jitter { min_secs, max_secs })
    }

    /// Builds the policy described by the configuration.
    pub fn from_config(config: &Config) -> Self {
        if config.ttl_jitter {
            TtlPolicy::Jitter {
                min_secs: config.ttl_min_secs,
                max_secs: config.ttl_max_secs,
            }
        } else {
            TtlPolicy::Persistent
        }
    }

    /// Draws the TTL for a single fill.
    pub fn draw(&self, random: &RandomSource) -> Option<Duration> {
        match *self {
            TtlPolicy::Persistent => None,
            TtlPolicy::Jitter { min_secs, max_secs } => {
                // Hand-built variants may skip `jitter`; order and floor the bounds.
                let low = min_secs.min(max_secs).max(1);
                let high = max_secs.max(min_secs).max(low);
                let secs = random.with(|rng| rng.random_range(low..=high));
                Some(Duration::from_secs(secs))
            }
        }
    }
}

impl Default for TtlPolicy {
    fn default() -> Self {
        TtlPolicy::Jitter {
            min_secs: 10,
            max_secs: 129,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_persistent_draws_nothing() {
        let random = RandomSource::seeded(1);
        assert_eq!(TtlPolicy::Persistent.draw(&random), None);
    }

    #[test]
    fn test_degenerate_range() {
        let random = RandomSource::seeded(1);
        let policy = TtlPolicy::Jitter {
            min_secs: 30,
            max_secs: 30,
        };
        assert_eq!(policy.draw(&random), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        assert_eq!(TtlPolicy::from_config(&config), TtlPolicy::default());

        config.ttl_jitter = false;
        assert_eq!(TtlPolicy::from_config(&config), TtlPolicy::Persistent);
    }

    #[test]
    fn test_jitter_constructor_validates_bounds() {
        assert_eq!(TtlPolicy::jitter(10, 129).unwrap(), TtlPolicy::default());
        assert!(matches!(TtlPolicy::jitter(0, 5), Err(AppError::Config(_))));
        assert!(matches!(TtlPolicy::jitter(50, 20), Err(AppError::Config(_))));
    }

    #[test]
    fn test_inverted_variant_draws_without_panicking() {
        let random = RandomSource::seeded(4);
        let policy = TtlPolicy::Jitter {
            min_secs: 50,
            max_secs: 20,
        };
        for _ in 0..32 {
            let secs = policy.draw(&random).unwrap().as_secs();
            assert!((20..=50).contains(&secs));
        }
    }

    #[test]
    fn test_zero_variant_never_draws_zero() {
        let random = RandomSource::seeded(4);
        let policy = TtlPolicy::Jitter {
            min_secs: 0,
            max_secs: 0,
        };
        assert_eq!(policy.draw(&random), Some(Duration::from_secs(1)));
    }

    proptest! {
        #[test]
        fn prop_default_jitter_within_bounds(seed in any::<u64>()) {
            let random = RandomSource::seeded(seed);
            let ttl = TtlPolicy::default().draw(&random).unwrap().as_secs();
            prop_assert!((10..=129).contains(&ttl));
        }
    }
}
