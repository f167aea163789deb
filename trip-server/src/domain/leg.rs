//! Itinerary leg type.
//!
//! A `Leg` is one mode-homogeneous movement: a single walk, a single bus
//! ride, a single train. Legs deserialize directly from the routing
//! backend's GraphQL response shape.

use chrono::TimeDelta;
use serde::Deserialize;

use super::{Mode, SpanKey, Timestamp};

/// A named location at either end of a leg.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Stop or place name
    pub name: String,
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
    /// Stop details, present when the place is a transit stop
    pub stop: Option<Stop>,
}

/// Transit stop details.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    /// Platform or track designation, e.g. "3b"
    pub platform_code: Option<String>,
    /// Mode of vehicles serving this stop
    pub vehicle_mode: Option<Mode>,
}

/// A point in time on a leg boundary.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegTime {
    pub scheduled_time: Timestamp,
}

/// Encoded leg geometry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LegGeometry {
    /// Google-polyline encoded path
    pub points: String,
}

/// The transit line a non-walk leg rides on.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    /// Long description, e.g. "Malmö C - Helsingborg C"
    pub desc: Option<String>,
    /// Public line number, e.g. "Pågatåg" or "169"
    pub short_name: Option<String>,
}

/// A leg of an itinerary.
///
/// # Invariants
///
/// `start.scheduled_time <= end.scheduled_time`. This is checked when legs
/// are assembled into a [`Route`](super::Route), not at deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    /// Backend leg id (informational)
    pub id: Option<String>,
    pub mode: Mode,
    pub from: Place,
    pub to: Place,
    pub start: LegTime,
    pub end: LegTime,
    /// Distance in meters
    pub distance: f64,
    pub leg_geometry: LegGeometry,
    /// Transit line, absent for walking legs
    pub route: Option<Line>,
}

impl Leg {
    /// Scheduled start of this leg.
    pub fn start_time(&self) -> Timestamp {
        self.start.scheduled_time
    }

    /// Scheduled end of this leg.
    pub fn end_time(&self) -> Timestamp {
        self.end.scheduled_time
    }

    /// Scheduled duration of this leg.
    pub fn duration(&self) -> TimeDelta {
        self.end_time().signed_duration_since(self.start_time())
    }

    /// Returns true if this is a walking leg.
    pub fn is_walk(&self) -> bool {
        self.mode.is_walk()
    }

    /// Public line name, if this leg rides a named line.
    pub fn line_name(&self) -> Option<&str> {
        self.route.as_ref().and_then(|r| r.short_name.as_deref())
    }

    /// Boarding platform, if the origin is a stop with a platform code.
    pub fn board_platform(&self) -> Option<&str> {
        self.from
            .stop
            .as_ref()
            .and_then(|s| s.platform_code.as_deref())
    }

    /// List key for this leg: `(start, distance, end)`.
    pub fn key(&self) -> SpanKey {
        SpanKey::new(self.start_time(), self.distance, self.end_time())
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    const LEG_JSON: &str = r#"{
        "id": "rO0ABXdBABBTY2hlZHVsZWRUcmFuc2l0TGVn",
        "mode": "RAIL",
        "from": {
            "name": "Lund C",
            "lat": 55.7058,
            "lon": 13.1865,
            "stop": { "platformCode": "3b", "vehicleMode": "RAIL" }
        },
        "to": { "name": "Malmö C", "lat": 55.6093, "lon": 13.0004, "stop": null },
        "start": { "scheduledTime": "2025-05-02T09:03:00+02:00" },
        "end": { "scheduledTime": "2025-05-02T09:15:00+02:00" },
        "distance": 16423.5,
        "legGeometry": { "points": "_p~iF~ps|U_ulLnnqC" },
        "route": { "desc": null, "shortName": "Pågatåg" }
    }"#;

    #[test]
    fn deserializes_backend_shape() {
        let leg: Leg = serde_json::from_str(LEG_JSON).unwrap();

        assert_eq!(leg.mode, Mode::Rail);
        assert_eq!(leg.from.name, "Lund C");
        assert_eq!(leg.board_platform(), Some("3b"));
        assert_eq!(leg.line_name(), Some("Pågatåg"));
        assert_eq!(leg.duration(), TimeDelta::minutes(12));
        assert!(leg.to.stop.is_none());
    }

    #[test]
    fn missing_required_field_fails() {
        let without_mode = LEG_JSON.replace("\"mode\": \"RAIL\",", "");
        assert!(serde_json::from_str::<Leg>(&without_mode).is_err());
    }

    #[test]
    fn walk_leg_has_no_line() {
        let walk = leg_at(Mode::Walk, 0, 5, 350.0);
        assert!(walk.is_walk());
        assert_eq!(walk.line_name(), None);
    }

    #[test]
    fn key_uses_times_and_distance() {
        let a = leg_at(Mode::Bus, 0, 10, 1200.0);
        let b = leg_at(Mode::Bus, 0, 10, 1200.0);
        let c = leg_at(Mode::Bus, 0, 10, 1300.0);

        assert_eq!(a.key(), b.key());
        assert_ne!(a.key(), c.key());
    }
}
