//! Travel modes reported by the routing backend.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Mode of a single leg.
///
/// This is a closed set: a mode the backend reports that is not listed here
/// fails deserialization rather than being silently mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mode {
    Airplane,
    Bicycle,
    Bus,
    CableCar,
    Car,
    Carpool,
    Coach,
    Ferry,
    Flex,
    Funicular,
    Gondola,
    Monorail,
    Rail,
    Scooter,
    Subway,
    Taxi,
    Tram,
    Transit,
    Trolleybus,
    Walk,
}

impl Mode {
    /// Every mode, in declaration order.
    pub const ALL: [Mode; 20] = [
        Mode::Airplane,
        Mode::Bicycle,
        Mode::Bus,
        Mode::CableCar,
        Mode::Car,
        Mode::Carpool,
        Mode::Coach,
        Mode::Ferry,
        Mode::Flex,
        Mode::Funicular,
        Mode::Gondola,
        Mode::Monorail,
        Mode::Rail,
        Mode::Scooter,
        Mode::Subway,
        Mode::Taxi,
        Mode::Tram,
        Mode::Transit,
        Mode::Trolleybus,
        Mode::Walk,
    ];

    /// Returns true for walking legs.
    pub fn is_walk(self) -> bool {
        self == Mode::Walk
    }

    /// The wire name, e.g. `CABLE_CAR`.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Airplane => "AIRPLANE",
            Mode::Bicycle => "BICYCLE",
            Mode::Bus => "BUS",
            Mode::CableCar => "CABLE_CAR",
            Mode::Car => "CAR",
            Mode::Carpool => "CARPOOL",
            Mode::Coach => "COACH",
            Mode::Ferry => "FERRY",
            Mode::Flex => "FLEX",
            Mode::Funicular => "FUNICULAR",
            Mode::Gondola => "GONDOLA",
            Mode::Monorail => "MONORAIL",
            Mode::Rail => "RAIL",
            Mode::Scooter => "SCOOTER",
            Mode::Subway => "SUBWAY",
            Mode::Taxi => "TAXI",
            Mode::Tram => "TRAM",
            Mode::Transit => "TRANSIT",
            Mode::Trolleybus => "TROLLEYBUS",
            Mode::Walk => "WALK",
        }
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Airplane => "Airplane",
            Mode::Bicycle => "Bicycle",
            Mode::Bus => "Bus",
            Mode::CableCar => "Cable car",
            Mode::Car => "Car",
            Mode::Carpool => "Carpool",
            Mode::Coach => "Coach",
            Mode::Ferry => "Ferry",
            Mode::Flex => "Flex",
            Mode::Funicular => "Funicular",
            Mode::Gondola => "Gondola",
            Mode::Monorail => "Monorail",
            Mode::Rail => "Train",
            Mode::Scooter => "Scooter",
            Mode::Subway => "Subway",
            Mode::Taxi => "Taxi",
            Mode::Tram => "Tram",
            Mode::Transit => "Transit",
            Mode::Trolleybus => "Trolleybus",
            Mode::Walk => "Walk",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip_through_serde() {
        for mode in Mode::ALL {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode.as_str()));
            let back: Mode = serde_json::from_str(&json).unwrap();
            assert_eq!(back, mode);
        }
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(serde_json::from_str::<Mode>("\"HOVERCRAFT\"").is_err());
    }

    #[test]
    fn only_walk_is_walk() {
        assert!(Mode::Walk.is_walk());
        assert_eq!(Mode::ALL.iter().filter(|m| m.is_walk()).count(), 1);
    }
}
