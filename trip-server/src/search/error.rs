//! Search error types.

use crate::error::ErrorKind;
use crate::geocode::GeocodeError;
use crate::itinerary::PlanError;

/// Message shown for every network-kind failure.
pub const NETWORK_MESSAGE: &str = "A network error has occurred.";

/// Failure of one search chain.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// One or both place names did not resolve to exactly one place
    #[error("Could not find {}.", .unresolved.join(" or "))]
    Unresolved { unresolved: Vec<String> },

    /// Place index could not be queried
    #[error("geocoding failed: {0}")]
    Geocode(#[source] GeocodeError),

    /// Routing backend could not be queried
    #[error("itinerary request failed: {0}")]
    Plan(#[from] PlanError),
}

impl SearchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SearchError::Unresolved { .. } => ErrorKind::Validation,
            SearchError::Geocode(e) => e.kind(),
            SearchError::Plan(e) => e.kind(),
        }
    }

    /// The message shown to the user. Each kind maps to exactly one message.
    pub fn user_message(&self) -> String {
        match self.kind() {
            ErrorKind::Validation => self.to_string(),
            ErrorKind::Network => NETWORK_MESSAGE.to_string(),
        }
    }

    /// Fold the outcome of the two place lookups into one error.
    ///
    /// A network failure on either side wins over validation failures.
    /// Otherwise the unresolved texts are listed origin first.
    pub(crate) fn from_lookups(
        origin: Option<GeocodeError>,
        destination: Option<GeocodeError>,
    ) -> Self {
        let mut unresolved = Vec::new();
        for err in [origin, destination].into_iter().flatten() {
            let query = err.unresolved_query().map(str::to_owned);
            match query {
                Some(query) => unresolved.push(query),
                None => return SearchError::Geocode(err),
            }
        }
        SearchError::Unresolved { unresolved }
    }
}

/// A search form that cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// Selection of a route that is not in the current list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no route at index {index} ({len} routes)")]
pub struct SelectionError {
    pub index: usize,
    pub len: usize,
}
