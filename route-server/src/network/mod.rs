//! Road network storage.
//!
//! Locations and routes live in flat vectors and refer to each other by
//! index. A network is populated once at startup and only read afterwards,
//! so queries can share it freely.

mod seed;

pub use seed::demo_network;

use crate::domain::{DomainError, Location, LocationId, Path, Route, RouteId, Traffic};

/// A fixed set of locations joined by directed routes.
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    locations: Vec<Location>,
    routes: Vec<Route>,
}

impl RoadNetwork {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location and return its id.
    pub fn add_location(&mut self, name: impl Into<String>) -> LocationId {
        self.locations.push(Location::new(name));
        LocationId(self.locations.len() - 1)
    }

    /// Add a directed route between two existing locations.
    ///
    /// Fails with [`DomainError::InvalidLocation`] if either endpoint is
    /// out of range.
    pub fn add_route(
        &mut self,
        start: LocationId,
        end: LocationId,
        distance_km: f64,
        u_turns: u32,
        traffic: Traffic,
        construction: bool,
    ) -> Result<RouteId, DomainError> {
        self.location(start)?;
        self.location(end)?;

        self.routes.push(Route::new(
            start,
            end,
            distance_km,
            u_turns,
            traffic,
            construction,
        ));
        Ok(RouteId(self.routes.len() - 1))
    }

    /// All locations, in insertion order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// All routes, in insertion order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Returns true if `id` refers to a location in this network.
    pub fn contains(&self, id: LocationId) -> bool {
        id.0 < self.locations.len()
    }

    /// Look up a location by id.
    pub fn location(&self, id: LocationId) -> Result<&Location, DomainError> {
        self.locations
            .get(id.0)
            .ok_or(DomainError::InvalidLocation(id))
    }

    /// Look up a route by id.
    pub fn route(&self, id: RouteId) -> Result<&Route, DomainError> {
        self.routes.get(id.0).ok_or(DomainError::InvalidRoute(id))
    }

    /// Routes leaving `from`, in insertion order.
    pub fn routes_from(&self, from: LocationId) -> impl Iterator<Item = (RouteId, &Route)> + '_ {
        self.routes
            .iter()
            .enumerate()
            .filter(move |(_, route)| route.start() == from)
            .map(|(idx, route)| (RouteId(idx), route))
    }

    /// The sequence of locations a path passes through, start first.
    ///
    /// An empty path has no locations. Fails if a route id is dangling or
    /// if consecutive routes don't connect.
    pub fn path_locations(&self, path: &Path) -> Result<Vec<LocationId>, DomainError> {
        let mut locations = Vec::with_capacity(path.len() + 1);
        let mut previous: Option<(RouteId, &Route)> = None;

        for &id in path.routes() {
            let route = self.route(id)?;
            match previous {
                None => locations.push(route.start()),
                Some((prev_id, prev)) if prev.end() != route.start() => {
                    return Err(DomainError::Discontiguous(prev_id, id));
                }
                Some(_) => {}
            }
            locations.push(route.end());
            previous = Some((id, route));
        }

        Ok(locations)
    }
}

/// Builder for creating road networks.
///
/// Provides a fluent API for seed data. Route endpoints are only checked
/// when [`build`](Self::build) is called.
#[derive(Debug, Default)]
pub struct RoadNetworkBuilder {
    locations: Vec<String>,
    routes: Vec<(usize, usize, f64, u32, Traffic, bool)>,
}

impl RoadNetworkBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location. Locations are numbered in the order they are added.
    pub fn location(mut self, name: &str) -> Self {
        self.locations.push(name.to_string());
        self
    }

    /// Add a one-way route.
    pub fn route(
        mut self,
        start: usize,
        end: usize,
        distance_km: f64,
        u_turns: u32,
        traffic: Traffic,
        construction: bool,
    ) -> Self {
        self.routes
            .push((start, end, distance_km, u_turns, traffic, construction));
        self
    }

    /// Add a road usable in both directions with identical conditions.
    ///
    /// The forward route is added first.
    pub fn two_way(
        self,
        a: usize,
        b: usize,
        distance_km: f64,
        u_turns: u32,
        traffic: Traffic,
        construction: bool,
    ) -> Self {
        self.route(a, b, distance_km, u_turns, traffic, construction)
            .route(b, a, distance_km, u_turns, traffic, construction)
    }

    /// Build the network.
    pub fn build(self) -> Result<RoadNetwork, DomainError> {
        let mut network = RoadNetwork::new();
        for name in self.locations {
            network.add_location(name);
        }
        for (start, end, distance_km, u_turns, traffic, construction) in self.routes {
            network.add_route(
                LocationId(start),
                LocationId(end),
                distance_km,
                u_turns,
                traffic,
                construction,
            )?;
        }
        Ok(network)
    }
}
