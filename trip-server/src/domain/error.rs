//! Domain error types.
//!
//! These errors represent validation failures in the itinerary model.
//! They are distinct from API/IO errors.

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// A route must contain at least one leg
    #[error("route must have at least one leg")]
    EmptyRoute,

    /// A leg ends before it starts
    #[error("leg {index} ends before it starts")]
    LegEndsBeforeStart { index: usize },

    /// Coordinate outside the WGS84 range
    #[error("invalid coordinate: lat {lat}, lon {lon}")]
    InvalidCoordinate { lat: f64, lon: f64 },
}
