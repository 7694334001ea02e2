//! Errors returned by `TodoClient` build and parse methods.
//!
//! 404 and 400 get their own variants since those are the two failures the
//! service reports on purpose. Every other unexpected status lands in
//! `HttpError` with the raw status and body.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server could not read the request body.
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    #[error("serialization failed: {0}")]
    SerializationError(String),
}
