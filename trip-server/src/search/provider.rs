//! Upstream abstractions the orchestrator depends on.
//!
//! These allow the search pipeline to be tested with mock upstreams.

use crate::domain::{Point, Route, Timestamp};
use crate::geocode::{GeocodeClient, GeocodeError, Suggestion};
use crate::itinerary::{Direction, ItineraryClient, PlanError};

/// Resolves place names.
pub trait PlaceIndex: Send + Sync {
    /// Resolve text to exactly one point.
    fn search(&self, text: &str) -> impl Future<Output = Result<Point, GeocodeError>> + Send;

    /// Best-effort suggestions for partial input. Never fails.
    fn suggest(&self, text: &str) -> impl Future<Output = Vec<Suggestion>> + Send;
}

/// Finds itineraries between resolved points.
pub trait TripPlanner: Send + Sync {
    fn plan(
        &self,
        origin: &Point,
        destination: &Point,
        direction: Direction,
        time: Timestamp,
    ) -> impl Future<Output = Result<Vec<Route>, PlanError>> + Send;
}

impl PlaceIndex for GeocodeClient {
    async fn search(&self, text: &str) -> Result<Point, GeocodeError> {
        GeocodeClient::search(self, text).await
    }

    async fn suggest(&self, text: &str) -> Vec<Suggestion> {
        GeocodeClient::suggest(self, text).await
    }
}

impl TripPlanner for ItineraryClient {
    async fn plan(
        &self,
        origin: &Point,
        destination: &Point,
        direction: Direction,
        time: Timestamp,
    ) -> Result<Vec<Route>, PlanError> {
        ItineraryClient::plan(self, origin, destination, direction, time).await
    }
}
