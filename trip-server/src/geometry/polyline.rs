//! Google encoded polyline format.
//!
//! Each coordinate is stored as the delta from the previous one, scaled by
//! `10^precision`, zig-zag encoded and split into 5-bit chunks offset by 63.
//! OpenTripPlanner uses precision 5.

use super::{LatLon, PathCodec};

/// Errors from decoding an encoded polyline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolylineError {
    /// A byte outside the encoding alphabet (63..=126)
    #[error("invalid character at byte {index}")]
    InvalidCharacter { index: usize },

    /// Input ended in the middle of a value or coordinate pair
    #[error("polyline is truncated")]
    Truncated,

    /// A value, or the running coordinate, does not fit in 64 bits
    #[error("value at byte {index} overflows")]
    Overflow { index: usize },
}

/// Google polyline codec.
#[derive(Debug, Clone, Copy)]
pub struct GooglePolyline {
    factor: f64,
}

impl GooglePolyline {
    /// Codec with the given decimal precision.
    pub fn with_precision(precision: i32) -> Self {
        Self {
            factor: 10f64.powi(precision),
        }
    }
}

impl Default for GooglePolyline {
    fn default() -> Self {
        Self::with_precision(5)
    }
}

impl PathCodec for GooglePolyline {
    fn decode(&self, encoded: &str) -> Result<Vec<LatLon>, PolylineError> {
        let bytes = encoded.as_bytes();
        let mut path = Vec::new();
        let mut pos = 0;
        let (mut lat, mut lon) = (0i64, 0i64);

        while pos < bytes.len() {
            lat = accumulate(lat, bytes, &mut pos)?;
            if pos >= bytes.len() {
                return Err(PolylineError::Truncated);
            }
            lon = accumulate(lon, bytes, &mut pos)?;
            path.push((lat as f64 / self.factor, lon as f64 / self.factor));
        }

        Ok(path)
    }

    fn encode(&self, path: &[LatLon]) -> String {
        let mut out = String::new();
        let (mut prev_lat, mut prev_lon) = (0i64, 0i64);

        for &(lat, lon) in path {
            let lat = (lat * self.factor).round() as i64;
            let lon = (lon * self.factor).round() as i64;
            push_value(&mut out, lat - prev_lat);
            push_value(&mut out, lon - prev_lon);
            prev_lat = lat;
            prev_lon = lon;
        }

        out
    }
}

/// Add the next delta to a running coordinate.
fn accumulate(current: i64, bytes: &[u8], pos: &mut usize) -> Result<i64, PolylineError> {
    let index = *pos;
    let delta = next_value(bytes, pos)?;
    current
        .checked_add(delta)
        .ok_or(PolylineError::Overflow { index })
}

/// Read one zig-zag encoded value starting at `*pos`.
fn next_value(bytes: &[u8], pos: &mut usize) -> Result<i64, PolylineError> {
    let mut result: u64 = 0;
    let mut shift = 0;

    loop {
        let index = *pos;
        let byte = *bytes.get(index).ok_or(PolylineError::Truncated)?;
        if !(63..=126).contains(&byte) {
            return Err(PolylineError::InvalidCharacter { index });
        }
        if shift > 60 {
            return Err(PolylineError::Overflow { index });
        }

        let chunk = u64::from(byte - 63);
        result |= (chunk & 0x1f) << shift;
        shift += 5;
        *pos += 1;

        if chunk < 0x20 {
            break;
        }
    }

    let value = (result >> 1) as i64;
    Ok(if result & 1 == 1 { !value } else { value })
}

/// Append one zig-zag encoded value.
fn push_value(out: &mut String, value: i64) {
    let mut v = if value < 0 {
        !((value as u64) << 1)
    } else {
        (value as u64) << 1
    };

    while v >= 0x20 {
        out.push(char::from((0x20 | (v & 0x1f)) as u8 + 63));
        v >>= 5;
    }
    out.push(char::from(v as u8 + 63));
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Encoding then decoding preserves coordinates to the codec precision
        #[test]
        fn decode_inverts_encode(
            path in prop::collection::vec((-90.0f64..90.0, -180.0f64..180.0), 0..30)
        ) {
            let codec = GooglePolyline::default();
            let decoded = codec.decode(&codec.encode(&path)).unwrap();

            prop_assert_eq!(decoded.len(), path.len());
            for (orig, back) in path.iter().zip(&decoded) {
                prop_assert!((orig.0 - back.0).abs() <= 0.5e-5 + 1e-9);
                prop_assert!((orig.1 - back.1).abs() <= 0.5e-5 + 1e-9);
            }
        }
    }
}
