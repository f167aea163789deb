//! Route (itinerary) types.
//!
//! A `Route` is one candidate itinerary returned by the routing backend:
//! a non-empty, chronologically ordered sequence of legs.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::TimeDelta;

use super::{DomainError, Leg, Timestamp};

/// Derived identity of a route or leg: `(start, distance, end)`.
///
/// Used as a stable list key by the presentation layer. Two structurally
/// different routes can share a key; this is accepted for list rendering
/// only, and selection does not rely on it.
#[derive(Debug, Clone, Copy)]
pub struct SpanKey {
    pub start: Timestamp,
    pub distance: f64,
    pub end: Timestamp,
}

impl SpanKey {
    /// Create a key from its parts.
    pub fn new(start: Timestamp, distance: f64, end: Timestamp) -> Self {
        // Normalize negative zero so equal keys hash equally
        Self {
            start,
            distance: distance + 0.0,
            end,
        }
    }
}

impl PartialEq for SpanKey {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
            && self.distance.to_bits() == other.distance.to_bits()
            && self.end == other.end
    }
}

impl Eq for SpanKey {}

impl Hash for SpanKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.distance.to_bits().hash(state);
        self.end.hash(state);
    }
}

impl fmt::Display for SpanKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.start.to_rfc3339(),
            self.distance,
            self.end.to_rfc3339()
        )
    }
}

/// A complete itinerary from origin to destination.
///
/// # Invariants
///
/// - At least one leg
/// - Every leg ends no earlier than it starts
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    legs: Vec<Leg>,
}

impl Route {
    /// Build a route, validating its invariants.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `legs` is empty or any leg ends before it starts.
    pub fn new(legs: Vec<Leg>) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyRoute);
        }

        if let Some(index) = legs.iter().position(|l| l.end_time() < l.start_time()) {
            return Err(DomainError::LegEndsBeforeStart { index });
        }

        Ok(Self { legs })
    }

    /// All legs in chronological order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Consume the route, returning its legs.
    pub fn into_legs(self) -> Vec<Leg> {
        self.legs
    }

    /// The first leg.
    pub fn first_leg(&self) -> &Leg {
        // Safe: non-empty by construction
        &self.legs[0]
    }

    /// The last leg.
    pub fn last_leg(&self) -> &Leg {
        // Safe: non-empty by construction
        &self.legs[self.legs.len() - 1]
    }

    /// Scheduled departure from the origin.
    pub fn departure_time(&self) -> Timestamp {
        self.first_leg().start_time()
    }

    /// Scheduled arrival at the destination.
    pub fn arrival_time(&self) -> Timestamp {
        self.last_leg().end_time()
    }

    /// Door-to-door duration.
    pub fn duration(&self) -> TimeDelta {
        self.arrival_time()
            .signed_duration_since(self.departure_time())
    }

    /// Sum of all leg distances in meters.
    pub fn total_distance(&self) -> f64 {
        self.legs.iter().map(|l| l.distance).sum()
    }

    /// Number of vehicle changes (non-walk legs minus one).
    pub fn transfers(&self) -> usize {
        self.legs
            .iter()
            .filter(|l| !l.is_walk())
            .count()
            .saturating_sub(1)
    }

    /// List key: `(first start, total distance, last end)`.
    pub fn key(&self) -> SpanKey {
        SpanKey::new(
            self.departure_time(),
            self.total_distance(),
            self.arrival_time(),
        )
    }
}
