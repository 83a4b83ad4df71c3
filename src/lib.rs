//! Read-through cache demo
//!
//! A small HTTP service that serves fake data through a Redis cache keyed by
//! the current second.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod payload;

pub use api::AppState;
pub use config::Config;
pub use error::{AppError, Result};
