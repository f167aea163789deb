//! Search lifecycle orchestration.
//!
//! A submit resolves origin and destination concurrently, then asks the
//! routing backend for itineraries:
//!
//! ```text
//! submit ─┬─ search(origin) ──────┐
//!         └─ search(destination) ─┴─ plan ─ commit
//! ```
//!
//! In-flight requests are never cancelled. Each submit takes a new
//! generation, and a chain only commits its outcome if no newer submit
//! has started in the meantime.

use std::sync::Arc;

use futures::future::join;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use crate::domain::{Point, Route};
use crate::error::ErrorKind;

use super::error::{SearchError, SelectionError};
use super::provider::{PlaceIndex, TripPlanner};
use super::request::SearchRequest;
use super::state::{Generation, SearchState};

/// Whether a finished search chain was allowed to update the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    Applied,
    /// A newer submit started while this one was in flight
    Superseded,
}

/// Drives one search form from submit to results.
pub struct SearchOrchestrator<P, T> {
    places: Arc<P>,
    planner: Arc<T>,
    state: RwLock<SearchState>,
}

impl<P: PlaceIndex, T: TripPlanner> SearchOrchestrator<P, T> {
    pub fn new(places: Arc<P>, planner: Arc<T>) -> Self {
        Self {
            places,
            planner,
            state: RwLock::new(SearchState::default()),
        }
    }

    /// A copy of the current state.
    pub async fn snapshot(&self) -> SearchState {
        self.state.read().await.clone()
    }

    /// Submit a search and wait for it to finish.
    pub async fn submit(&self, request: SearchRequest) -> Commit {
        let generation = self.begin().await;
        self.complete(generation, &request).await
    }

    /// Enter `Searching`, clearing previous routes and the selection.
    ///
    /// Pair with [`complete`](Self::complete); split out so callers can
    /// observe the `Searching` state before the chain runs elsewhere.
    pub async fn begin(&self) -> Generation {
        let generation = self.state.write().await.begin();
        debug!(?generation, "search started");
        generation
    }

    /// Run the search chain for `generation` and commit its outcome if
    /// `generation` is still current.
    pub async fn complete(&self, generation: Generation, request: &SearchRequest) -> Commit {
        let outcome = self.find_itineraries(request).await;

        let mut state = self.state.write().await;
        if !state.is_current(generation) {
            debug!(?generation, "discarding superseded search");
            return Commit::Superseded;
        }

        match outcome {
            Ok(routes) => {
                info!(
                    origin = request.origin(),
                    destination = request.destination(),
                    count = routes.len(),
                    "search succeeded"
                );
                state.succeed(routes);
            }
            Err(e) => {
                match e.kind() {
                    ErrorKind::Network => error!(error = %e, "search failed"),
                    ErrorKind::Validation => warn!(error = %e, "search rejected"),
                }
                state.fail(&e);
            }
        }
        Commit::Applied
    }

    /// Resolve both places and fetch itineraries, without touching state.
    pub async fn find_itineraries(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<Route>, SearchError> {
        let (origin, destination) = self
            .resolve(request.origin(), request.destination())
            .await?;

        let routes = self
            .planner
            .plan(&origin, &destination, request.direction(), request.time())
            .await?;
        Ok(routes)
    }

    /// Look up both place names concurrently.
    async fn resolve(&self, origin: &str, destination: &str) -> Result<(Point, Point), SearchError> {
        let (origin, destination) =
            join(self.places.search(origin), self.places.search(destination)).await;

        match (origin, destination) {
            (Ok(origin), Ok(destination)) => Ok((origin, destination)),
            (origin, destination) => Err(SearchError::from_lookups(origin.err(), destination.err())),
        }
    }

    /// Toggle selection of the route at `index`. Never changes the phase.
    pub async fn select(&self, index: usize) -> Result<Option<usize>, SelectionError> {
        self.state.write().await.toggle(index)
    }

    pub async fn clear_selection(&self) {
        self.state.write().await.clear_selection();
    }
}
