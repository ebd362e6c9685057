//! Application state for the web layer.

use std::sync::Arc;

use crate::network::RoadNetwork;
use crate::planner::PlannerConfig;

/// Shared application state.
///
/// The network is read-only after startup, so handlers share it without
/// locking.
#[derive(Clone)]
pub struct AppState {
    /// Road network to plan over
    pub network: Arc<RoadNetwork>,

    /// Route planner configuration
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: RoadNetwork, config: PlannerConfig) -> Self {
        Self {
            network: Arc::new(network),
            config: Arc::new(config),
        }
    }
}
