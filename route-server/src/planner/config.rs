//! Planner configuration.

/// Configuration parameters for route planning.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Maximum number of routes in an enumerated path.
    /// Longer paths are never produced, even if they exist.
    pub max_depth: usize,

    /// Number of ranked alternatives to return.
    pub max_results: usize,

    /// Travel time parameters.
    pub cost: CostConfig,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_depth: usize, max_results: usize, cost: CostConfig) -> Self {
        Self {
            max_depth,
            max_results,
            cost,
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_depth: 6,
            max_results: 2,
            cost: CostConfig::default(),
        }
    }
}

/// Parameters of the travel time model.
#[derive(Debug, Clone, PartialEq)]
pub struct CostConfig {
    /// Walking speed (km/h). Also used for unrecognised mode names.
    pub walk_kmh: f64,

    /// Cycling speed (km/h).
    pub bike_kmh: f64,

    /// Driving speed (km/h) before traffic.
    pub car_kmh: f64,

    /// Driving time multiplier in low traffic.
    pub low_traffic: f64,

    /// Driving time multiplier in medium traffic.
    pub medium_traffic: f64,

    /// Driving time multiplier in high traffic.
    pub high_traffic: f64,

    /// Minutes added per u-turn, in every mode.
    pub u_turn_penalty_mins: f64,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            walk_kmh: 5.0,
            bike_kmh: 15.0,
            car_kmh: 30.0,
            low_traffic: 1.0,
            medium_traffic: 1.1,
            high_traffic: 1.25,
            u_turn_penalty_mins: 2.0,
        }
    }
}
