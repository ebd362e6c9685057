//! Exhaustive simple-path search.
//!
//! Enumerates every path between two locations that never revisits a
//! location and uses at most `max_depth` routes. The number of such paths
//! grows exponentially with network density; the depth cap is the only
//! bound on search time, so longer legitimate routes are never found.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::domain::{LocationId, Path, RouteId};
use crate::network::RoadNetwork;

/// Depth-first search state: a partial path ending at `location`.
///
/// Each state owns its own visited set and path, so sibling branches never
/// see each other's partial progress.
#[derive(Debug, Clone)]
struct SearchState {
    /// Current location.
    location: LocationId,

    /// Locations on the path so far, including the start.
    visited: HashSet<LocationId>,

    /// Routes taken so far.
    path: Path,
}

impl SearchState {
    fn initial(start: LocationId) -> Self {
        Self {
            location: start,
            visited: HashSet::from([start]),
            path: Path::default(),
        }
    }

    fn extend(&self, route: RouteId, to: LocationId) -> Self {
        let mut visited = self.visited.clone();
        visited.insert(to);
        let mut path = self.path.clone();
        path.push(route);

        Self {
            location: to,
            visited,
            path,
        }
    }
}

/// Finds all simple paths within a depth bound.
pub struct PathEnumerator<'a> {
    network: &'a RoadNetwork,
    max_depth: usize,
}

impl<'a> PathEnumerator<'a> {
    /// Create a new enumerator over `network`.
    pub fn new(network: &'a RoadNetwork, max_depth: usize) -> Self {
        Self { network, max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Find every simple path from `start` to `end`.
    ///
    /// Returns an empty list if either location is not in the network.
    /// When `start == end` the result is a single empty path. Paths come
    /// out in depth-first order following route insertion order; callers
    /// that need a ranking must sort them.
    pub fn find_all_paths(&self, start: LocationId, end: LocationId) -> Vec<Path> {
        if !self.network.contains(start) || !self.network.contains(end) {
            debug!(%start, %end, "location out of range, no paths");
            return Vec::new();
        }

        let mut paths = Vec::new();
        let mut stack = vec![SearchState::initial(start)];
        let mut states_explored = 0usize;

        while let Some(state) = stack.pop() {
            states_explored += 1;

            if state.path.len() > self.max_depth {
                continue;
            }

            // Reaching the destination closes the branch
            if state.location == end {
                trace!(routes = state.path.len(), "found path");
                paths.push(state.path);
                continue;
            }

            let next: Vec<SearchState> = self
                .network
                .routes_from(state.location)
                .filter(|(_, route)| !state.visited.contains(&route.end()))
                .map(|(id, route)| state.extend(id, route.end()))
                .collect();

            // Pushed in reverse so the first route is explored first
            stack.extend(next.into_iter().rev());
        }

        debug!(
            %start,
            %end,
            paths = paths.len(),
            states_explored,
            "path enumeration complete"
        );

        paths
    }
}
