//! Path type.

use super::RouteId;

/// An ordered sequence of routes.
///
/// Paths produced by the planner are contiguous and never revisit a
/// location; `RoadNetwork::path_locations` checks this for arbitrary paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    routes: Vec<RouteId>,
}

impl Path {
    /// Creates a path from its routes in travel order.
    pub fn new(routes: Vec<RouteId>) -> Self {
        Self { routes }
    }

    /// The routes in travel order.
    pub fn routes(&self) -> &[RouteId] {
        &self.routes
    }

    /// Number of routes (edges) in the path.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// True for the trivial path that stays at its start.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub(crate) fn push(&mut self, route: RouteId) {
        self.routes.push(route);
    }
}

impl From<Vec<RouteId>> for Path {
    fn from(routes: Vec<RouteId>) -> Self {
        Self::new(routes)
    }
}
