//! Domain types for the trip planner.
//!
//! This module contains the itinerary model shared by the geocoder, the
//! routing client and the presentation pipeline. Types enforce their
//! invariants at construction time, so code that receives them can trust
//! their validity.

mod error;
pub(crate) mod leg;
mod mode;
mod point;
mod route;

use chrono::{DateTime, FixedOffset};

pub use error::DomainError;
pub use leg::{Leg, LegGeometry, LegTime, Line, Place, Stop};
pub use mode::Mode;
pub use point::Point;
pub use route::{Route, SpanKey};

/// Timezone-aware timestamp as reported by the routing backend.
pub type Timestamp = DateTime<FixedOffset>;
