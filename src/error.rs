//! Error types for the banner service
//!
//! Provides unified error handling using thiserror. Cache operations never
//! fail; only store calls, input validation, and the auth layer produce
//! errors, and a cache miss is normal control flow, not an error.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Banner Error Enum ==
/// Unified error type for the banner service.
#[derive(Error, Debug)]
pub enum BannerError {
    /// No banner matches the given parameters, in cache or store
    #[error("there is no data with the given params")]
    NotFound,

    /// Malformed write or query input, rejected before store or cache
    #[error("invalid request: {0}")]
    Validation(String),

    /// The persistent store failed; the cache is left untouched
    #[error("store error: {0}")]
    Store(String),

    /// Missing or unknown bearer token
    #[error("unauthorized")]
    Unauthorized,

    /// Authenticated, but the role does not permit this operation
    #[error("forbidden")]
    Forbidden,

    /// Internal server error
    #[error("internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for BannerError {
    fn into_response(self) -> Response {
        let status = match &self {
            BannerError::NotFound => StatusCode::NOT_FOUND,
            BannerError::Validation(_) => StatusCode::BAD_REQUEST,
            BannerError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BannerError::Unauthorized => StatusCode::UNAUTHORIZED,
            BannerError::Forbidden => StatusCode::FORBIDDEN,
            BannerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

impl From<sled::Error> for BannerError {
    fn from(err: sled::Error) -> Self {
        BannerError::Store(err.to_string())
    }
}

impl From<serde_json::Error> for BannerError {
    fn from(err: serde_json::Error) -> Self {
        BannerError::Store(format!("record encoding: {err}"))
    }
}

// == Result Type Alias ==
/// Convenience Result type for the banner service.
pub type Result<T> = std::result::Result<T, BannerError>;
