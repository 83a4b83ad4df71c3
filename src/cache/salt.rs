//! Process Salt Module
//!
//! A card-number shaped identifier drawn once at startup and appended to
//! every derived key, partitioning the key space per process.

use std::fmt;

use rand::Rng;

use crate::cache::RandomSource;

const GROUPS: usize = 4;
const DIGITS_PER_GROUP: usize = 4;

// == Process Salt ==
/// Per-process key salt, e.g. `4111-1111-1111-1111`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSalt(String);

impl ProcessSalt {
    /// Draws a fresh salt from the random source.
    pub fn generate(random: &RandomSource) -> Self {
        let groups: Vec<String> = random.with(|rng| {
            (0..GROUPS)
                .map(|_| {
                    (0..DIGITS_PER_GROUP)
                        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
                        .collect()
                })
                .collect()
        });
        Self(groups.join("-"))
    }

    /// Wraps a known salt value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProcessSalt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
