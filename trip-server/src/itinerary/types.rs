//! OpenTripPlanner GraphQL response DTOs.

use serde::Deserialize;

use crate::domain::Leg;

/// Top-level GraphQL response for the trip query.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanResponse {
    /// Absent when the query failed as a whole
    pub data: Option<PlanData>,

    /// GraphQL errors, if any
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanData {
    pub plan_connection: PlanConnection,
}

/// Relay-style connection of itineraries.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanConnection {
    pub edges: Vec<PlanEdge>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlanEdge {
    pub node: ItineraryNode,
}

/// One candidate itinerary.
#[derive(Debug, Clone, Deserialize)]
pub struct ItineraryNode {
    pub legs: Vec<Leg>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}
