//! Response models for the service
//!
//! Bodies that are serialized as JSON; successful payloads are plain text.

pub mod responses;

pub use responses::ErrorResponse;
