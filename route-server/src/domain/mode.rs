//! Travel modes.

use std::fmt;

use serde::Serialize;

/// Error returned when a travel mode name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid travel mode {0:?}: expected walk, bike or car")]
pub struct InvalidTravelMode(String);

/// How the traveller moves along a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Walk,
    Bike,
    Car,
}

impl TravelMode {
    /// All modes, in display order.
    pub const ALL: [TravelMode; 3] = [TravelMode::Walk, TravelMode::Bike, TravelMode::Car];

    /// Parse a mode name strictly.
    ///
    /// Accepts exactly `walk`, `bike` or `car`.
    pub fn parse(s: &str) -> Result<Self, InvalidTravelMode> {
        match s {
            "walk" => Ok(TravelMode::Walk),
            "bike" => Ok(TravelMode::Bike),
            "car" => Ok(TravelMode::Car),
            _ => Err(InvalidTravelMode(s.to_string())),
        }
    }

    /// Resolve a mode name, treating anything unrecognised as walking.
    ///
    /// Existing callers rely on this fallback, so a typo such as `"cra"`
    /// silently prices the trip at walking speed.
    ///
    /// ```
    /// use route_server::domain::TravelMode;
    ///
    /// assert_eq!(TravelMode::from_name("car"), TravelMode::Car);
    /// assert_eq!(TravelMode::from_name("scooter"), TravelMode::Walk);
    /// ```
    pub fn from_name(s: &str) -> Self {
        Self::parse(s).unwrap_or(TravelMode::Walk)
    }

    /// Returns the canonical mode name.
    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Walk => "walk",
            TravelMode::Bike => "bike",
            TravelMode::Car => "car",
        }
    }

    /// Label used when listing estimates side by side.
    pub fn label(self) -> &'static str {
        match self {
            TravelMode::Walk => "Walking",
            TravelMode::Bike => "Biking",
            TravelMode::Car => "Driving",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_modes() {
        assert_eq!(TravelMode::parse("walk").unwrap(), TravelMode::Walk);
        assert_eq!(TravelMode::parse("bike").unwrap(), TravelMode::Bike);
        assert_eq!(TravelMode::parse("car").unwrap(), TravelMode::Car);
    }

    #[test]
    fn parse_is_strict() {
        assert!(TravelMode::parse("Car").is_err());
        assert!(TravelMode::parse(" walk").is_err());
        assert!(TravelMode::parse("").is_err());

        let err = TravelMode::parse("scooter").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid travel mode \"scooter\": expected walk, bike or car"
        );
    }

    #[test]
    fn from_name_falls_back_to_walk() {
        assert_eq!(TravelMode::from_name("bike"), TravelMode::Bike);
        assert_eq!(TravelMode::from_name("scooter"), TravelMode::Walk);
        assert_eq!(TravelMode::from_name("CAR"), TravelMode::Walk);
        assert_eq!(TravelMode::from_name(""), TravelMode::Walk);
    }

    #[test]
    fn as_str_roundtrip() {
        for mode in TravelMode::ALL {
            assert_eq!(TravelMode::parse(mode.as_str()).unwrap(), mode);
            assert_eq!(mode.to_string(), mode.as_str());
        }
    }

    #[test]
    fn labels() {
        assert_eq!(TravelMode::Walk.label(), "Walking");
        assert_eq!(TravelMode::Bike.label(), "Biking");
        assert_eq!(TravelMode::Car.label(), "Driving");
    }
}
