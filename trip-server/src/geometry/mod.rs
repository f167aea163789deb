//! Leg geometry.
//!
//! The routing backend ships each leg's path as an encoded polyline string.
//! Decoding sits behind [`PathCodec`] so the decomposer does not depend on
//! a particular encoding.

mod polyline;

pub use polyline::{GooglePolyline, PolylineError};

/// A `(latitude, longitude)` pair in degrees.
pub type LatLon = (f64, f64);

/// Encodes and decodes leg paths.
pub trait PathCodec: Send + Sync {
    /// Decode an encoded path into ordered coordinates.
    fn decode(&self, encoded: &str) -> Result<Vec<LatLon>, PolylineError>;

    /// Encode ordered coordinates into a path string.
    fn encode(&self, path: &[LatLon]) -> String;
}
