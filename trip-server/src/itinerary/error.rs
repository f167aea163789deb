//! Itinerary client error types.

use crate::error::ErrorKind;

/// Errors from the routing backend client.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Routing backend returned a non-success status; carries the raw body
    #[error("routing backend returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Response did not match the expected schema
    #[error("unexpected routing response: {message}")]
    Schema { message: String },

    /// Client could not be constructed from its configuration
    #[error("invalid routing client configuration: {0}")]
    Config(String),
}

impl PlanError {
    /// Classify this error for the user. Routing failures are always
    /// network errors; an empty result is not an error.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Network
    }
}
