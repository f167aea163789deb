//! Itinerary presentation.
//!
//! Pure transformations from routes to what the user sees: grouped
//! segments with decoded geometry and styling, plus duration, distance
//! and clock formatting.

mod decompose;
mod format;
mod style;

pub use decompose::{Decomposer, DisplaySegment, SegmentKind};
pub use format::{duration, format_clock, format_distance, format_duration};
pub use style::{DisplayAttributes, ModeStyles};
