//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, LocationId, Traffic, TravelMode};
use crate::network::RoadNetwork;
use crate::planner::{CostModel, RankedPath, Recommendation};

/// A location in the network.
#[derive(Debug, Serialize)]
pub struct LocationResult {
    /// Zero-based location index, as used in plan requests
    pub index: usize,

    /// Display name
    pub name: String,
}

/// Response listing all locations.
#[derive(Debug, Serialize)]
pub struct LocationsResponse {
    pub locations: Vec<LocationResult>,
}

/// Query parameters for planning routes.
#[derive(Debug, Deserialize)]
pub struct PlanRoutesQuery {
    /// Start location index
    pub start: usize,

    /// Destination location index
    pub end: usize,

    /// Travel mode: walk, bike or car
    pub mode: String,
}

/// One route of a path.
#[derive(Debug, Serialize)]
pub struct SegmentResult {
    /// Route index in the network
    pub route: usize,

    /// Origin location name
    pub from: String,

    /// Destination location name
    pub to: String,

    pub distance_km: f64,

    pub u_turns: u32,

    pub traffic: Traffic,

    /// Whether the route is under construction
    pub construction: bool,
}

/// Estimated time in one travel mode.
#[derive(Debug, Serialize)]
pub struct ModeEstimate {
    pub mode: TravelMode,

    /// Human-readable mode, e.g. "Walking"
    pub label: &'static str,

    pub time_mins: f64,
}

/// A route option.
#[derive(Debug, Serialize)]
pub struct RouteOptionResult {
    /// Route segments in travel order
    pub segments: Vec<SegmentResult>,

    /// Total length in kilometres
    pub total_distance_km: f64,

    /// Whether any segment is under construction
    pub has_construction: bool,

    /// Travel time in the requested mode (minutes)
    pub time_mins: f64,

    /// Travel time in every mode
    pub estimates: Vec<ModeEstimate>,
}

impl RouteOptionResult {
    /// Create from a ranked path.
    pub fn from_ranked(
        ranked: &RankedPath,
        network: &RoadNetwork,
        cost: &CostModel,
    ) -> Result<Self, DomainError> {
        let mut segments = Vec::with_capacity(ranked.path.len());
        for &id in ranked.path.routes() {
            let route = network.route(id)?;
            segments.push(SegmentResult {
                route: id.index(),
                from: network.location(route.start())?.name().to_string(),
                to: network.location(route.end())?.name().to_string(),
                distance_km: route.distance_km(),
                u_turns: route.u_turns(),
                traffic: route.traffic(),
                construction: route.has_construction(),
            });
        }

        let mut estimates = Vec::with_capacity(TravelMode::ALL.len());
        for mode in TravelMode::ALL {
            estimates.push(ModeEstimate {
                mode,
                label: mode.label(),
                time_mins: cost.path_time(network, &ranked.path, mode)?,
            });
        }

        Ok(Self {
            segments,
            total_distance_km: ranked.distance_km,
            has_construction: ranked.has_construction,
            time_mins: ranked.time_mins,
            estimates,
        })
    }
}

/// Which kind of route was recommended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationStatus {
    /// A construction-free route
    Clean,
    /// Every route had construction; the fastest is shown
    Construction,
    /// No route exists
    None,
}

/// The recommended route.
#[derive(Debug, Serialize)]
pub struct RecommendationResult {
    pub status: RecommendationStatus,

    pub route: Option<RouteOptionResult>,
}

impl RecommendationResult {
    /// Create from a planner recommendation.
    pub fn from_recommendation(
        recommendation: &Recommendation,
        network: &RoadNetwork,
        cost: &CostModel,
    ) -> Result<Self, DomainError> {
        let status = match recommendation {
            Recommendation::Clean(_) => RecommendationStatus::Clean,
            Recommendation::Blocked(_) => RecommendationStatus::Construction,
            Recommendation::NoRoute => RecommendationStatus::None,
        };
        let route = recommendation
            .route()
            .map(|ranked| RouteOptionResult::from_ranked(ranked, network, cost))
            .transpose()?;

        Ok(Self { status, route })
    }
}

/// Response for a route plan.
#[derive(Debug, Serialize)]
pub struct PlanRoutesResponse {
    /// Start location name
    pub start: String,

    /// Destination location name
    pub end: String,

    pub mode: TravelMode,

    /// Number of candidate paths considered
    pub paths_found: usize,

    /// Fastest alternatives, best first
    pub top_routes: Vec<RouteOptionResult>,

    pub recommendation: RecommendationResult,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Build a location listing.
pub fn list_locations(network: &RoadNetwork) -> Vec<LocationResult> {
    network
        .locations()
        .iter()
        .enumerate()
        .map(|(index, location)| LocationResult {
            index,
            name: location.name().to_string(),
        })
        .collect()
}

/// Look up a location name for display.
pub fn location_name(network: &RoadNetwork, id: LocationId) -> Result<String, DomainError> {
    Ok(network.location(id)?.name().to_string())
}
