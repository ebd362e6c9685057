//! Route planning requests.
//!
//! Ties the enumerator, cost model and ranker together behind a single
//! call, after rejecting requests the core algorithms leave undefined.

use tracing::debug;

use crate::domain::{DomainError, LocationId, Path, TravelMode};
use crate::network::RoadNetwork;

use super::config::PlannerConfig;
use super::cost::CostModel;
use super::rank::{RankedPath, Recommendation, RouteRanker};
use super::search::PathEnumerator;

/// Error from route planning.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// Invalid plan request
    #[error("invalid plan request: {0}")]
    InvalidRequest(String),

    /// Network data referenced something that doesn't exist
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Request for a route plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanRequest {
    pub start: LocationId,
    pub end: LocationId,
    pub mode: TravelMode,
}

impl PlanRequest {
    /// Create a new plan request.
    pub fn new(start: LocationId, end: LocationId, mode: TravelMode) -> Self {
        Self { start, end, mode }
    }

    /// Validate the request against a network.
    pub fn validate(&self, network: &RoadNetwork) -> Result<(), PlanError> {
        for (label, id) in [("start", self.start), ("destination", self.end)] {
            if !network.contains(id) {
                return Err(PlanError::InvalidRequest(format!(
                    "{label} location {id} is out of range (network has {} locations)",
                    network.location_count()
                )));
            }
        }

        if self.start == self.end {
            return Err(PlanError::InvalidRequest(
                "destination cannot be the same as start location".to_string(),
            ));
        }

        Ok(())
    }
}

/// Result of route planning.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    /// Fastest alternatives, best first.
    pub top_routes: Vec<RankedPath>,

    /// The single route to take.
    pub recommendation: Recommendation,

    /// Number of simple paths found before ranking.
    pub paths_found: usize,
}

/// Route planner over a fixed network.
pub struct Planner<'a> {
    network: &'a RoadNetwork,
    config: &'a PlannerConfig,
    cost: CostModel,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a RoadNetwork, config: &'a PlannerConfig) -> Self {
        Self {
            network,
            config,
            cost: CostModel::new(config.cost.clone()),
        }
    }

    /// The cost model used for ranking.
    pub fn cost_model(&self) -> &CostModel {
        &self.cost
    }

    /// Enumerate candidate paths without ranking them.
    pub fn find_all_paths(&self, start: LocationId, end: LocationId) -> Vec<Path> {
        PathEnumerator::new(self.network, self.config.max_depth).find_all_paths(start, end)
    }

    /// Plan routes for a request.
    pub fn plan(&self, request: &PlanRequest) -> Result<RoutePlan, PlanError> {
        request.validate(self.network)?;

        let paths = self.find_all_paths(request.start, request.end);
        let ranker = RouteRanker::new(self.network, &self.cost);

        let top_routes = ranker.top_routes(&paths, request.mode, self.config.max_results)?;
        let recommendation = ranker.recommend(&paths, request.mode)?;

        debug!(
            start = %request.start,
            end = %request.end,
            mode = %request.mode,
            paths = paths.len(),
            "planned routes"
        );

        Ok(RoutePlan {
            top_routes,
            recommendation,
            paths_found: paths.len(),
        })
    }
}
