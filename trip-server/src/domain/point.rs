//! Geocoded points.

use std::fmt;

use super::DomainError;

/// A resolved geographic point.
///
/// Points are only produced by the geocoder and are immutable afterwards.
/// The label is the text the user typed, kept for error messages and as
/// the location label sent to the routing backend.
///
/// # Examples
///
/// ```
/// use trip_server::domain::Point;
///
/// let lund = Point::new(55.7058, 13.1865, "Lund C").unwrap();
/// assert_eq!(lund.label(), "Lund C");
///
/// // Latitude outside -90..=90 is rejected
/// assert!(Point::new(91.0, 13.0, "nowhere").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    lat: f64,
    lon: f64,
    label: String,
}

impl Point {
    /// Create a point, validating the coordinate range.
    pub fn new(lat: f64, lon: f64, label: impl Into<String>) -> Result<Self, DomainError> {
        let valid = lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon);
        if !valid {
            return Err(DomainError::InvalidCoordinate { lat, lon });
        }

        Ok(Self {
            lat,
            lon,
            label: label.into(),
        })
    }

    /// Latitude in degrees (WGS84).
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees (WGS84).
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// The query text this point was resolved from.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.5}, {:.5})", self.label, self.lat, self.lon)
    }
}
