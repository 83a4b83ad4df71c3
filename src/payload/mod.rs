//! Payload Module
//!
//! Synthetic data used to fill cache misses.

mod corpus;
mod generator;

pub use generator::{FakePayload, FakeRecord, PayloadSource, DEFAULT_ROWS};
