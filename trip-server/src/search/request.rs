//! Submitted search form.

use crate::domain::Timestamp;
use crate::itinerary::Direction;

use super::error::RequestError;

/// A complete search form.
///
/// # Invariants
///
/// Origin and destination text are not blank.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    origin: String,
    destination: String,
    direction: Direction,
    time: Timestamp,
}

impl SearchRequest {
    /// Create a request, rejecting blank place text.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        direction: Direction,
        time: Timestamp,
    ) -> Result<Self, RequestError> {
        let origin = origin.into();
        let destination = destination.into();

        if origin.trim().is_empty() {
            return Err(RequestError::Empty("origin"));
        }
        if destination.trim().is_empty() {
            return Err(RequestError::Empty("destination"));
        }

        Ok(Self {
            origin,
            destination,
            direction,
            time,
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn time(&self) -> Timestamp {
        self.time
    }
}
