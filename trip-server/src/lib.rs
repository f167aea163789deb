//! Trip planner server.
//!
//! Resolves place names with a Pelias place index, asks OpenTripPlanner
//! for itineraries between them, and presents each itinerary as timed,
//! styled segments with decoded map geometry.

pub mod config;
pub mod domain;
pub mod error;
pub mod geocode;
pub mod geometry;
pub mod itinerary;
pub mod present;
pub mod search;
pub mod web;

#[cfg(test)]
mod testing;
