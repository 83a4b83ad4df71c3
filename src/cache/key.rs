//! Key Derivation Module
//!
//! Cache keys are built from the current second-of-minute, so each salt owns
//! exactly 60 keys and a key is reused once a minute.

use chrono::Timelike;

// == Clock ==
/// Source of the wall-clock second used for key derivation.
pub trait Clock: Send + Sync {
    /// Returns the current second within the minute (0..=59).
    fn second_of_minute(&self) -> u32;
}

/// Clock backed by the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn second_of_minute(&self) -> u32 {
        // Leap seconds surface as 60 in some sources; fold them into 59.
        chrono::Local::now().second().min(59)
    }
}

/// Clock pinned to a single second.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u32);

impl Clock for FixedClock {
    fn second_of_minute(&self) -> u32 {
        self.0
    }
}

// == Derive Key ==
/// Formats the cache key for a given second and optional salt.
///
/// ```
/// use readthrough_demo::cache::derive_key;
///
/// assert_eq!(derive_key(7, None), "07");
/// assert_eq!(derive_key(7, Some("4111-1111-1111-1111")), "07-4111-1111-1111-1111");
/// ```
pub fn derive_key(second: u32, salt: Option<&str>) -> String {
    match salt {
        Some(salt) => format!("{:02}-{}", second, salt),
        None => format!("{:02}", second),
    }
}

/// Derives the key for "now" according to the given clock.
pub fn current_key(clock: &dyn Clock, salt: Option<&str>) -> String {
    derive_key(clock.second_of_minute(), salt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_derive_key_with_salt() {
        assert_eq!(
            derive_key(7, Some("4111-1111-1111-1111")),
            "07-4111-1111-1111-1111"
        );
    }

    #[test]
    fn test_derive_key_without_salt() {
        assert_eq!(derive_key(0, None), "00");
        assert_eq!(derive_key(59, None), "59");
    }

    #[test]
    fn test_current_key_uses_clock() {
        let clock = FixedClock(42);
        assert_eq!(current_key(&clock, Some("abc")), "42-abc");
    }

    #[test]
    fn test_system_clock_in_range() {
        assert!(SystemClock.second_of_minute() < 60);
    }

    #[test]
    fn test_sixty_distinct_keys_per_salt() {
        let keys: HashSet<String> = (0..60).map(|s| derive_key(s, Some("salt"))).collect();
        assert_eq!(keys.len(), 60);
    }

    proptest! {
        #[test]
        fn prop_derivation_is_deterministic(second in 0u32..60, salt in "[0-9]{4}(-[0-9]{4}){3}") {
            let first = derive_key(second, Some(&salt));
            let second_call = derive_key(second, Some(&salt));
            prop_assert_eq!(&first, &second_call);
            let prefix = format!("{:02}-", second);
            prop_assert!(first.starts_with(&prefix));
            prop_assert!(first.ends_with(&salt));
        }

        #[test]
        fn prop_unsalted_key_is_two_digits(second in 0u32..60) {
            let key = derive_key(second, None);
            prop_assert_eq!(key.len(), 2);
            prop_assert_eq!(key.parse::<u32>().unwrap(), second);
        }
    }
}
