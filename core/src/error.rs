//! Error types for the todo API client.
//!
//! # Design
//! The server answers 400 and 404 with an `{"error": ...}` body; those get
//! dedicated variants carrying the server's message. Any other unexpected
//! status lands in `HttpError` with the raw status and body.

use thiserror::Error;

/// Errors returned by `TodoClient` methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("not found: {0}")]
    NotFound(String),

    /// The server rejected the request payload or id with 400.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Any other status the operation does not expect.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    #[error("serialization failed: {0}")]
    SerializationError(String),
}
