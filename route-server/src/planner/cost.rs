//! Travel time model.
//!
//! A route's time is its distance at the mode's speed, scaled by traffic
//! when driving, plus a fixed penalty per u-turn. A path's time is the sum
//! of its routes' times. Nothing is cached: every call recomputes from the
//! network.

use crate::domain::{DomainError, Path, Route, Traffic, TravelMode};
use crate::network::RoadNetwork;

use super::config::CostConfig;

/// Computes travel times in minutes.
#[derive(Debug, Clone, Default)]
pub struct CostModel {
    config: CostConfig,
}

impl CostModel {
    /// Create a cost model with the given parameters.
    pub fn new(config: CostConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CostConfig {
        &self.config
    }

    /// Base speed for a mode in km/h.
    pub fn speed_kmh(&self, mode: TravelMode) -> f64 {
        match mode {
            TravelMode::Walk => self.config.walk_kmh,
            TravelMode::Bike => self.config.bike_kmh,
            TravelMode::Car => self.config.car_kmh,
        }
    }

    /// Time multiplier for a traffic level. Only driving is affected.
    pub fn traffic_factor(&self, mode: TravelMode, traffic: Traffic) -> f64 {
        if mode != TravelMode::Car {
            return 1.0;
        }
        match traffic {
            Traffic::Low => self.config.low_traffic,
            Traffic::Medium => self.config.medium_traffic,
            Traffic::High => self.config.high_traffic,
        }
    }

    /// Minutes to travel a single route.
    pub fn edge_time(&self, route: &Route, mode: TravelMode) -> f64 {
        let base = route.distance_km() / self.speed_kmh(mode) * 60.0;
        let travel = base * self.traffic_factor(mode, route.traffic());

        // u-turns cost the same on foot as in a car
        travel + f64::from(route.u_turns()) * self.config.u_turn_penalty_mins
    }

    /// Minutes to travel every route of a path.
    pub fn path_time(
        &self,
        network: &RoadNetwork,
        path: &Path,
        mode: TravelMode,
    ) -> Result<f64, DomainError> {
        let mut total = 0.0;
        for &id in path.routes() {
            total += self.edge_time(network.route(id)?, mode);
        }
        Ok(total)
    }

    /// Total length of a path in kilometres.
    pub fn path_distance(&self, network: &RoadNetwork, path: &Path) -> Result<f64, DomainError> {
        let mut total = 0.0;
        for &id in path.routes() {
            total += network.route(id)?.distance_km();
        }
        Ok(total)
    }
}
