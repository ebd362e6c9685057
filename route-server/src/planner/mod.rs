//! Route planner using exhaustive simple-path search.
//!
//! This module implements the core planning algorithm: enumerate every
//! simple path between two locations up to a depth bound, price each path
//! under a travel mode, and rank the results.

mod config;
mod cost;
mod plan;
mod rank;
mod search;

pub use config::{CostConfig, PlannerConfig};
pub use cost::CostModel;
pub use plan::{PlanError, PlanRequest, Planner, RoutePlan};
pub use rank::{RankedPath, Recommendation, RouteRanker, rank_by_time, rank_fastest};
pub use search::PathEnumerator;
