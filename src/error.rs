//! Error types for the read-through service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

// == App Error Enum ==
/// Unified error type for the service.
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or invalid environment configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Could not establish or authenticate the store connection
    #[error("connection error: {0}")]
    Connection(String),

    /// GET, SET or PING against the store failed
    #[error("store error: {0}")]
    Store(String),

    /// Synthetic payload could not be produced
    #[error("generation error: {0}")]
    Generation(String),

    /// Internal server error
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Short label used in logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Config(_) => "config",
            AppError::Connection(_) => "connection",
            AppError::Store(_) => "store",
            AppError::Generation(_) => "generation",
            AppError::Internal(_) => "internal",
        }
    }
}

impl From<redis::RedisError> for AppError {
    fn from(err: redis::RedisError) -> Self {
        AppError::Store(err.to_string())
    }
}

impl From<prometheus::Error> for AppError {
    fn from(err: prometheus::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Every failure surfaces to the caller as a 500 carrying the cause.
        error!(kind = self.kind(), error = %self, "request failed");

        let body = Json(ErrorResponse::new(self.to_string()));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the service.
pub type Result<T> = std::result::Result<T, AppError>;
