//! HTTP-facing error type.
//!
//! `NotFound` becomes a bare 404, matching what clients of the service
//! already expect. `BadRequest` carries a fixed, human-readable message that
//! is sent back as plain text.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::store::StoreError;

pub const MALFORMED_TODO: &str = "ToDo not provided in correct format.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("todo {0} not found")]
    NotFound(i64),

    #[error("{0}")]
    BadRequest(&'static str),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ApiError::NotFound(id),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
        }
    }
}
