//! Cache Module
//!
//! Key derivation, the store contract and its backends, and the read-through
//! lookup that ties them together.

mod entry;
mod key;
mod memory;
mod random;
mod read_through;
mod redis_store;
mod salt;
mod store;
mod ttl;

// Re-export public types
pub use entry::CacheEntry;
pub use key::{current_key, derive_key, Clock, FixedClock, SystemClock};
pub use memory::MemoryStore;
pub use random::RandomSource;
pub use read_through::{Lookup, Outcome, ReadThrough};
pub use redis_store::{connection_url, set_pipeline, RedisStore};
pub use salt::ProcessSalt;
pub use store::CacheStore;
pub use ttl::TtlPolicy;
