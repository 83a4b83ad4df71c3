//! Random Source Module
//!
//! Every random draw in the service (salt, TTL, fake payload) goes through a
//! `RandomSource` so tests can seed it.

use std::sync::Mutex;

use rand::{rngs::StdRng, SeedableRng};

// == Random Source ==
/// Shared, seedable random number generator.
#[derive(Debug)]
pub struct RandomSource {
    rng: Mutex<StdRng>,
}

impl RandomSource {
    /// Creates a source seeded from the operating system.
    pub fn from_os() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Creates a deterministic source.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Runs `f` with exclusive access to the generator.
    ///
    /// The lock is never held across an await point.
    pub fn with<R>(&self, f: impl FnOnce(&mut StdRng) -> R) -> R {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut rng)
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::from_os()
    }
}
