//! OpenTripPlanner routing client.
//!
//! Sends one GraphQL trip query per search and maps every returned
//! itinerary onto a validated [`Route`](crate::domain::Route). An empty
//! itinerary list is a valid answer; any transport, status, or schema
//! problem is reported as a network-kind [`PlanError`].

mod client;
mod error;
mod query;
mod types;

pub use client::{ItineraryClient, ItineraryConfig};
pub use error::PlanError;
pub use query::{Direction, PlanRequest, TRIP_QUERY};
pub use types::PlanResponse;
