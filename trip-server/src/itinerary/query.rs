//! Trip query document and request variables.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Point, Timestamp};

/// GraphQL document for the trip query.
///
/// The search window is fixed at 24 hours; `dateTime` carries either an
/// earliest departure or a latest arrival.
pub const TRIP_QUERY: &str = r#"
query Trip(
  $origin: PlanLabeledLocationInput!
  $destination: PlanLabeledLocationInput!
  $time: PlanDateTimeInput!
) {
  planConnection(
    origin: $origin
    destination: $destination
    dateTime: $time
    searchWindow: "24h"
  ) {
    edges {
      node {
        legs {
          id
          mode
          distance
          from { name lat lon stop { platformCode vehicleMode } }
          to { name lat lon stop { platformCode vehicleMode } }
          start { scheduledTime }
          end { scheduledTime }
          legGeometry { points }
          route { desc shortName }
        }
      }
    }
  }
}
"#;

/// Which end of the itinerary the requested time pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Leave no earlier than the requested time
    DepartAt,
    /// Arrive no later than the requested time
    ArriveBy,
}

impl Direction {
    /// Map the form's depart/arrive toggle.
    pub fn from_depart_at(depart_at: bool) -> Self {
        if depart_at {
            Direction::DepartAt
        } else {
            Direction::ArriveBy
        }
    }
}

/// Full request body: query document plus variables.
#[derive(Debug, Serialize)]
pub struct PlanRequest<'a> {
    pub query: &'static str,
    pub variables: PlanVariables<'a>,
}

impl<'a> PlanRequest<'a> {
    /// Build the request for a trip between two points.
    pub fn new(
        origin: &'a Point,
        destination: &'a Point,
        direction: Direction,
        time: Timestamp,
    ) -> Self {
        let time = time
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Millis, true);

        Self {
            query: TRIP_QUERY,
            variables: PlanVariables {
                origin: LabeledLocation::from_point(origin),
                destination: LabeledLocation::from_point(destination),
                time: match direction {
                    Direction::DepartAt => DateTimeInput::EarliestDeparture(time),
                    Direction::ArriveBy => DateTimeInput::LatestArrival(time),
                },
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlanVariables<'a> {
    pub origin: LabeledLocation<'a>,
    pub destination: LabeledLocation<'a>,
    pub time: DateTimeInput,
}

/// `PlanLabeledLocationInput`
#[derive(Debug, Serialize)]
pub struct LabeledLocation<'a> {
    pub label: &'a str,
    pub location: LocationInput,
}

impl<'a> LabeledLocation<'a> {
    fn from_point(point: &'a Point) -> Self {
        Self {
            label: point.label(),
            location: LocationInput {
                coordinate: CoordinateInput {
                    latitude: point.lat(),
                    longitude: point.lon(),
                },
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LocationInput {
    pub coordinate: CoordinateInput,
}

#[derive(Debug, Serialize)]
pub struct CoordinateInput {
    pub latitude: f64,
    pub longitude: f64,
}

/// `PlanDateTimeInput`: exactly one of the two fields is set.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DateTimeInput {
    EarliestDeparture(String),
    LatestArrival(String),
}
