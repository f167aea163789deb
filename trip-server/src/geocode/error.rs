//! Geocoder error types.

use crate::error::ErrorKind;

/// Errors from the place index client.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Place index returned a non-success status
    #[error("place index returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Response did not match the expected schema
    #[error("unexpected place index response: {message}")]
    Schema { message: String },

    /// No place matched the query text
    #[error("no place matches {query:?}")]
    NotFound { query: String },

    /// More than one place matched the query text
    #[error("{count} places match {query:?}")]
    Ambiguous { query: String, count: usize },

    /// Client could not be constructed from its configuration
    #[error("invalid geocoder configuration: {0}")]
    Config(String),
}

impl GeocodeError {
    /// Classify this error for the user.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GeocodeError::NotFound { .. } | GeocodeError::Ambiguous { .. } => {
                ErrorKind::Validation
            }
            _ => ErrorKind::Network,
        }
    }

    /// The query text that failed validation, if this is a validation error.
    pub fn unresolved_query(&self) -> Option<&str> {
        match self {
            GeocodeError::NotFound { query } | GeocodeError::Ambiguous { query, .. } => {
                Some(query)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GeocodeError::NotFound {
            query: "Atlantis".into(),
        };
        assert_eq!(err.to_string(), "no place matches \"Atlantis\"");

        let err = GeocodeError::Ambiguous {
            query: "Centralen".into(),
            count: 3,
        };
        assert_eq!(err.to_string(), "3 places match \"Centralen\"");

        let err = GeocodeError::Status {
            status: 502,
            body: "Bad Gateway".into(),
        };
        assert_eq!(err.to_string(), "place index returned 502: Bad Gateway");
    }

    #[test]
    fn classification() {
        let not_found = GeocodeError::NotFound {
            query: "x".into(),
        };
        assert_eq!(not_found.kind(), ErrorKind::Validation);
        assert_eq!(not_found.unresolved_query(), Some("x"));

        let schema = GeocodeError::Schema {
            message: "missing features".into(),
        };
        assert_eq!(schema.kind(), ErrorKind::Network);
        assert_eq!(schema.unresolved_query(), None);
    }
}
