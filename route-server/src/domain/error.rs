//! Domain error types.
//!
//! These errors represent dangling references into a road network.
//! They are distinct from request validation errors in the planner.

use super::{LocationId, RouteId};

/// Domain-level errors for reference validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Location index is out of bounds for the network
    #[error("invalid location reference: {0}")]
    InvalidLocation(LocationId),

    /// Route index is out of bounds for the network
    #[error("invalid route reference: {0}")]
    InvalidRoute(RouteId),

    /// Consecutive routes in a path don't share an endpoint
    #[error("route {1} does not start where route {0} ends")]
    Discontiguous(RouteId, RouteId),
}
