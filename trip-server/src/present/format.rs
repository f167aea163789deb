//! Human-readable durations, distances and clock times.

use chrono::TimeDelta;

use crate::domain::{Leg, Timestamp};

const SECS_PER_MIN: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MIN;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;

/// Elapsed time from the start of `first` to the end of `last`.
///
/// See [`format_duration`] for the rendering rules.
pub fn duration(first: &Leg, last: &Leg) -> String {
    format_duration(last.end_time().signed_duration_since(first.start_time()))
}

/// Render a span as e.g. `"1 hr, 30 min"`.
///
/// The span is floored into whole days, hours and minutes. Seconds are
/// only shown when the minutes component is zero. Zero components are
/// skipped; a zero or negative span renders as an empty string.
///
/// ```
/// use chrono::TimeDelta;
/// use trip_server::present::format_duration;
///
/// assert_eq!(format_duration(TimeDelta::minutes(90)), "1 hr, 30 min");
/// assert_eq!(format_duration(TimeDelta::hours(25)), "1 d, 1 hr");
/// assert_eq!(format_duration(TimeDelta::seconds(45)), "45 s");
/// assert_eq!(format_duration(TimeDelta::zero()), "");
/// ```
pub fn format_duration(span: TimeDelta) -> String {
    let total = span.num_seconds();
    if total <= 0 {
        return String::new();
    }

    let days = total / SECS_PER_DAY;
    let hours = total % SECS_PER_DAY / SECS_PER_HOUR;
    let minutes = total % SECS_PER_HOUR / SECS_PER_MIN;
    let seconds = total % SECS_PER_MIN;

    let mut parts = Vec::with_capacity(3);
    if days > 0 {
        parts.push(format!("{days} d"));
    }
    if hours > 0 {
        parts.push(format!("{hours} hr"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes} min"));
    } else if seconds > 0 {
        parts.push(format!("{seconds} s"));
    }

    parts.join(", ")
}

/// Render a distance in meters: `"850 m"` below one kilometer, `"16.4 km"` above.
pub fn format_distance(meters: f64) -> String {
    let rounded = meters.round();
    if rounded < 1000.0 {
        format!("{rounded} m")
    } else {
        format!("{:.1} km", meters / 1000.0)
    }
}

/// Wall-clock time in the timestamp's own offset, as `HH:MM`.
pub fn format_clock(time: &Timestamp) -> String {
    time.format("%H:%M").to_string()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Components stay below their unit and rebuild the floored span
        #[test]
        fn components_are_floored(secs in 1i64..10 * SECS_PER_DAY) {
            let text = format_duration(TimeDelta::seconds(secs));
            prop_assert!(!text.is_empty());

            let mut rebuilt = 0;
            for part in text.split(", ") {
                let (value, unit) = part.split_once(' ').unwrap();
                let value: i64 = value.parse().unwrap();
                prop_assert!(value > 0);
                rebuilt += value * match unit {
                    "d" => SECS_PER_DAY,
                    "hr" => { prop_assert!(value < 24); SECS_PER_HOUR }
                    "min" => { prop_assert!(value < 60); SECS_PER_MIN }
                    "s" => { prop_assert!(value < 60); 1 }
                    other => panic!("unexpected unit {other}"),
                };
            }

            prop_assert!(rebuilt <= secs);
            let minutes = secs % SECS_PER_HOUR / SECS_PER_MIN;
            if minutes > 0 {
                prop_assert_eq!(rebuilt, secs - secs % SECS_PER_MIN);
            } else {
                prop_assert_eq!(rebuilt, secs);
            }
        }

        #[test]
        fn non_positive_is_empty(secs in -100_000i64..=0) {
            prop_assert_eq!(format_duration(TimeDelta::seconds(secs)), "");
        }
    }
}
