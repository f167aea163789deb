//! Itinerary decomposition.
//!
//! Turns a route's flat leg list into the segments shown to the user:
//!
//! ```text
//! WALK  BUS  WALK  RAIL  WALK
//! ^^^^  ^^^^^^^^^^^^^^^  ^^^^
//! lead  transit group    trail
//! ```
//!
//! Walks at either end of the route get their own segment. Everything in
//! between, interior connector walks included, forms one transit group.
//! A route with a single leg is a single segment of that leg's mode.

use std::sync::Arc;

use chrono::TimeDelta;
use serde::Serialize;
use tracing::warn;

use crate::domain::{Leg, Mode, Route, SpanKey, Timestamp};
use crate::geometry::{GooglePolyline, LatLon, PathCodec};

use super::format::format_duration;
use super::style::{DisplayAttributes, ModeStyles};

/// What a segment represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "mode")]
pub enum SegmentKind {
    /// A single leg shown with its own mode
    Mode(Mode),
    /// The middle of a route: transit legs and the walks between them
    TransitGroup,
}

/// A display-ready group of one or more consecutive legs.
///
/// # Invariants
///
/// `legs` is non-empty and chronologically ordered.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySegment {
    pub kind: SegmentKind,
    legs: Vec<Leg>,
    /// Decoded geometry of all legs, concatenated in order
    pub path: Vec<LatLon>,
    pub style: DisplayAttributes,
}

impl DisplaySegment {
    /// The legs in this segment, never empty.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Scheduled start of the first leg.
    pub fn start_time(&self) -> Timestamp {
        self.legs[0].start_time()
    }

    /// Scheduled end of the last leg.
    pub fn end_time(&self) -> Timestamp {
        self.legs[self.legs.len() - 1].end_time()
    }

    pub fn duration(&self) -> TimeDelta {
        self.end_time().signed_duration_since(self.start_time())
    }

    /// Duration as shown to the user, e.g. "12 min".
    pub fn duration_label(&self) -> String {
        format_duration(self.duration())
    }

    /// Sum of leg distances in meters.
    pub fn distance(&self) -> f64 {
        self.legs.iter().map(|l| l.distance).sum()
    }

    /// List key: `(start, distance, end)`.
    pub fn key(&self) -> SpanKey {
        SpanKey::new(self.start_time(), self.distance(), self.end_time())
    }
}

/// Splits routes into display segments.
///
/// Stateless apart from its injected codec and styles; clones share both.
#[derive(Clone)]
pub struct Decomposer {
    codec: Arc<dyn PathCodec>,
    styles: Arc<ModeStyles>,
}

impl Decomposer {
    pub fn new(codec: Arc<dyn PathCodec>, styles: Arc<ModeStyles>) -> Self {
        Self { codec, styles }
    }

    /// The style mapping segments are tagged with.
    pub fn styles(&self) -> &ModeStyles {
        &self.styles
    }

    /// Split a route into segments.
    ///
    /// Never fails: a leg whose geometry cannot be decoded contributes an
    /// empty path and a warning.
    pub fn decompose(&self, route: &Route) -> Vec<DisplaySegment> {
        let legs = route.legs();

        if let [only] = legs {
            let kind = SegmentKind::Mode(only.mode);
            return vec![self.segment(kind, std::slice::from_ref(only))];
        }

        let lead = usize::from(legs[0].is_walk());
        let trail = usize::from(legs[legs.len() - 1].is_walk());
        let middle = &legs[lead..legs.len() - trail];

        let mut segments = Vec::with_capacity(3);
        if lead == 1 {
            segments.push(self.segment(SegmentKind::Mode(Mode::Walk), &legs[..1]));
        }
        if !middle.is_empty() {
            segments.push(self.segment(SegmentKind::TransitGroup, middle));
        }
        if trail == 1 {
            segments.push(self.segment(
                SegmentKind::Mode(Mode::Walk),
                &legs[legs.len() - 1..],
            ));
        }
        segments
    }

    /// Decoded geometry of a whole route, for drawing the selected route.
    pub fn route_path(&self, route: &Route) -> Vec<LatLon> {
        self.decode_legs(route.legs())
    }

    fn segment(&self, kind: SegmentKind, legs: &[Leg]) -> DisplaySegment {
        DisplaySegment {
            kind,
            legs: legs.to_vec(),
            path: self.decode_legs(legs),
            style: self.styles.for_kind(kind),
        }
    }

    fn decode_legs(&self, legs: &[Leg]) -> Vec<LatLon> {
        legs.iter()
            .flat_map(|leg| {
                self.codec
                    .decode(&leg.leg_geometry.points)
                    .unwrap_or_else(|e| {
                        warn!(leg = %leg.key(), error = %e, "malformed leg geometry");
                        Vec::new()
                    })
            })
            .collect()
    }
}

impl Default for Decomposer {
    fn default() -> Self {
        Self::new(
            Arc::new(GooglePolyline::default()),
            Arc::new(ModeStyles::default()),
        )
    }
}

impl std::fmt::Debug for Decomposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Decomposer").finish_non_exhaustive()
    }
}
