//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Leg, Mode, Route, Timestamp};
use crate::geometry::LatLon;
use crate::present::{
    Decomposer, DisplayAttributes, DisplaySegment, SegmentKind, duration, format_clock,
    format_distance, format_duration,
};
use crate::search::{Phase, SearchFailure, SearchState};

/// Response to opening a session.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionCreated {
    pub session_id: Uuid,
}

/// A submitted search form.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    /// Origin place text
    pub origin: String,

    /// Destination place text
    pub destination: String,

    /// Depart at `time` (true) or arrive by it (false)
    #[serde(default = "default_depart_at")]
    pub depart_at: bool,

    /// Requested date and time with offset, RFC 3339
    pub time: Timestamp,
}

fn default_depart_at() -> bool {
    true
}

/// Request to toggle selection of a route.
#[derive(Debug, Deserialize)]
pub struct SelectForm {
    pub index: usize,
}

/// A keystroke in a place field.
#[derive(Debug, Deserialize)]
pub struct FieldInput {
    pub value: String,
}

/// Choice of a suggestion by id.
#[derive(Debug, Deserialize)]
pub struct ChooseForm {
    pub id: String,
}

/// Search state as rendered by the front end.
#[derive(Debug, Serialize)]
pub struct SearchStateView {
    pub phase: Phase,

    /// Set iff the phase is `error`
    pub error: Option<SearchFailure>,

    /// Index of the selected route
    pub selected: Option<usize>,

    /// Full decoded path of the selected route, for the map
    pub selected_path: Vec<LatLon>,

    pub routes: Vec<RouteView>,
}

impl SearchStateView {
    pub fn build(state: &SearchState, decomposer: &Decomposer) -> Self {
        Self {
            phase: state.phase(),
            error: state.error().cloned(),
            selected: state.selected_index(),
            selected_path: state
                .selected_route()
                .map(|r| decomposer.route_path(r))
                .unwrap_or_default(),
            routes: state
                .routes()
                .iter()
                .map(|r| RouteView::build(r, decomposer))
                .collect(),
        }
    }
}

/// One itinerary in the result list.
#[derive(Debug, Serialize)]
pub struct RouteView {
    /// List key: "{start} {distance} {end}"
    pub key: String,

    /// Departure time (HH:MM)
    pub departure: String,

    /// Arrival time (HH:MM)
    pub arrival: String,

    /// e.g. "1 hr, 5 min"
    pub duration: String,

    /// e.g. "16.9 km"
    pub distance: String,

    pub transfers: usize,

    pub segments: Vec<SegmentView>,
}

impl RouteView {
    pub fn build(route: &Route, decomposer: &Decomposer) -> Self {
        Self {
            key: route.key().to_string(),
            departure: format_clock(&route.departure_time()),
            arrival: format_clock(&route.arrival_time()),
            duration: duration(route.first_leg(), route.last_leg()),
            distance: format_distance(route.total_distance()),
            transfers: route.transfers(),
            segments: decomposer
                .decompose(route)
                .iter()
                .map(SegmentView::from_segment)
                .collect(),
        }
    }
}

/// A display segment of an itinerary.
#[derive(Debug, Serialize)]
pub struct SegmentView {
    pub key: String,
    pub kind: SegmentKind,
    pub style: DisplayAttributes,
    pub departure: String,
    pub arrival: String,
    pub duration: String,
    pub distance: String,
    pub path: Vec<LatLon>,
    pub legs: Vec<LegView>,
}

impl SegmentView {
    pub fn from_segment(segment: &DisplaySegment) -> Self {
        Self {
            key: segment.key().to_string(),
            kind: segment.kind,
            style: segment.style.clone(),
            departure: format_clock(&segment.start_time()),
            arrival: format_clock(&segment.end_time()),
            duration: segment.duration_label(),
            distance: format_distance(segment.distance()),
            path: segment.path.clone(),
            legs: segment.legs().iter().map(LegView::from_leg).collect(),
        }
    }
}

/// A single leg inside a segment.
#[derive(Debug, Serialize)]
pub struct LegView {
    pub key: String,
    pub mode: Mode,
    /// Line name, e.g. "Pågatåg"
    pub line: Option<String>,
    pub from: String,
    pub to: String,
    /// Boarding platform
    pub platform: Option<String>,
    pub departure: String,
    pub arrival: String,
    pub duration: String,
    pub distance: String,
}

impl LegView {
    pub fn from_leg(leg: &Leg) -> Self {
        Self {
            key: leg.key().to_string(),
            mode: leg.mode,
            line: leg.line_name().map(str::to_string),
            from: leg.from.name.clone(),
            to: leg.to.name.clone(),
            platform: leg.board_platform().map(str::to_string),
            departure: format_clock(&leg.start_time()),
            arrival: format_clock(&leg.end_time()),
            duration: format_duration(leg.duration()),
            distance: format_distance(leg.distance),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
