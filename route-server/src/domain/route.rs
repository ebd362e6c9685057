//! Route (directed edge) types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::LocationId;

/// Zero-based index of a route in a road network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RouteId(pub usize);

impl RouteId {
    /// Returns the raw index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when parsing an unknown traffic level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid traffic level: {0:?}")]
pub struct InvalidTraffic(String);

/// Congestion on a route. Only affects driving times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Traffic {
    Low,
    Medium,
    High,
}

impl Traffic {
    /// Parse a traffic level, ignoring ASCII case.
    ///
    /// ```
    /// use route_server::domain::Traffic;
    ///
    /// assert_eq!(Traffic::parse("high").unwrap(), Traffic::High);
    /// assert_eq!(Traffic::parse("Medium").unwrap(), Traffic::Medium);
    /// assert!(Traffic::parse("gridlock").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, InvalidTraffic> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Traffic::Low),
            "medium" => Ok(Traffic::Medium),
            "high" => Ok(Traffic::High),
            _ => Err(InvalidTraffic(s.to_string())),
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Traffic::Low => "Low",
            Traffic::Medium => "Medium",
            Traffic::High => "High",
        }
    }
}

impl fmt::Display for Traffic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A directed road between two locations.
///
/// Routes are immutable once created. Several routes may connect the same
/// ordered pair of locations, and a road usable in both directions is two
/// routes.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    start: LocationId,
    end: LocationId,
    distance_km: f64,
    u_turns: u32,
    traffic: Traffic,
    construction: bool,
}

impl Route {
    /// Creates a new route. Endpoint validity is checked by the network.
    pub fn new(
        start: LocationId,
        end: LocationId,
        distance_km: f64,
        u_turns: u32,
        traffic: Traffic,
        construction: bool,
    ) -> Self {
        Self {
            start,
            end,
            distance_km,
            u_turns,
            traffic,
            construction,
        }
    }

    pub fn start(&self) -> LocationId {
        self.start
    }

    pub fn end(&self) -> LocationId {
        self.end
    }

    /// Length in kilometres.
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn u_turns(&self) -> u32 {
        self.u_turns
    }

    pub fn traffic(&self) -> Traffic {
        self.traffic
    }

    /// Whether any part of the route is under construction.
    pub fn has_construction(&self) -> bool {
        self.construction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traffic_parse() {
        assert_eq!(Traffic::parse("low").unwrap(), Traffic::Low);
        assert_eq!(Traffic::parse("LOW").unwrap(), Traffic::Low);
        assert_eq!(Traffic::parse("Medium").unwrap(), Traffic::Medium);
        assert_eq!(Traffic::parse("high").unwrap(), Traffic::High);
    }

    #[test]
    fn traffic_parse_rejects_unknown() {
        let err = Traffic::parse("jam").unwrap_err();
        assert_eq!(err.to_string(), "invalid traffic level: \"jam\"");
        assert!(Traffic::parse("").is_err());
    }

    #[test]
    fn traffic_display() {
        assert_eq!(Traffic::Low.to_string(), "Low");
        assert_eq!(Traffic::Medium.to_string(), "Medium");
        assert_eq!(Traffic::High.to_string(), "High");
    }

    #[test]
    fn traffic_serde_names() {
        assert_eq!(serde_json::to_string(&Traffic::High).unwrap(), "\"high\"");
        let parsed: Traffic = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(parsed, Traffic::Medium);
    }

    #[test]
    fn route_accessors() {
        let route = Route::new(LocationId(0), LocationId(2), 4.2, 1, Traffic::Medium, true);

        assert_eq!(route.start(), LocationId(0));
        assert_eq!(route.end(), LocationId(2));
        assert_eq!(route.distance_km(), 4.2);
        assert_eq!(route.u_turns(), 1);
        assert_eq!(route.traffic(), Traffic::Medium);
        assert!(route.has_construction());
    }
}
