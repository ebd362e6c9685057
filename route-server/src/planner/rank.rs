//! Route ranking for enumerated paths.
//!
//! Orders candidate paths by travel time for the "top choices" view, and
//! picks a single recommendation that avoids construction whenever any
//! construction-free path exists.

use std::cmp::Ordering;

use crate::domain::{DomainError, Path, TravelMode};
use crate::network::RoadNetwork;

use super::cost::CostModel;

/// A path with its aggregate figures for one travel mode.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPath {
    pub path: Path,

    /// Total travel time in minutes.
    pub time_mins: f64,

    /// Total length in kilometres.
    pub distance_km: f64,

    /// True if any route on the path is under construction.
    pub has_construction: bool,
}

/// Outcome of [`RouteRanker::recommend`].
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation {
    /// Best path with no construction.
    Clean(RankedPath),

    /// Every candidate has construction; this is the fastest of them.
    Blocked(RankedPath),

    /// There were no candidates.
    NoRoute,
}

impl Recommendation {
    /// The recommended path, if any.
    pub fn route(&self) -> Option<&RankedPath> {
        match self {
            Recommendation::Clean(ranked) | Recommendation::Blocked(ranked) => Some(ranked),
            Recommendation::NoRoute => None,
        }
    }
}

fn by_time(a: &RankedPath, b: &RankedPath) -> Ordering {
    a.time_mins.total_cmp(&b.time_mins)
}

fn by_time_then_distance(a: &RankedPath, b: &RankedPath) -> Ordering {
    by_time(a, b).then_with(|| a.distance_km.total_cmp(&b.distance_km))
}

/// Rank paths by time, then distance.
///
/// The sort is stable, so paths equal on both keys keep their input order.
pub fn rank_fastest(mut paths: Vec<RankedPath>) -> Vec<RankedPath> {
    paths.sort_by(by_time_then_distance);
    paths
}

/// Rank paths by time only. Stable.
pub fn rank_by_time(mut paths: Vec<RankedPath>) -> Vec<RankedPath> {
    paths.sort_by(by_time);
    paths
}

/// Scores and orders paths under a travel mode.
pub struct RouteRanker<'a> {
    network: &'a RoadNetwork,
    cost: &'a CostModel,
}

impl<'a> RouteRanker<'a> {
    /// Create a new ranker.
    pub fn new(network: &'a RoadNetwork, cost: &'a CostModel) -> Self {
        Self { network, cost }
    }

    /// Compute time, distance and construction status for a path.
    pub fn evaluate(&self, path: &Path, mode: TravelMode) -> Result<RankedPath, DomainError> {
        let mut time_mins = 0.0;
        let mut distance_km = 0.0;
        let mut has_construction = false;

        for &id in path.routes() {
            let route = self.network.route(id)?;
            time_mins += self.cost.edge_time(route, mode);
            distance_km += route.distance_km();
            has_construction |= route.has_construction();
        }

        Ok(RankedPath {
            path: path.clone(),
            time_mins,
            distance_km,
            has_construction,
        })
    }

    fn evaluate_all(
        &self,
        paths: &[Path],
        mode: TravelMode,
    ) -> Result<Vec<RankedPath>, DomainError> {
        paths.iter().map(|path| self.evaluate(path, mode)).collect()
    }

    /// The `n` fastest paths, best first.
    ///
    /// Equal times are broken by shorter distance, then by input order.
    /// Returns fewer than `n` entries if there are fewer candidates.
    pub fn top_routes(
        &self,
        paths: &[Path],
        mode: TravelMode,
        n: usize,
    ) -> Result<Vec<RankedPath>, DomainError> {
        let mut ranked = rank_fastest(self.evaluate_all(paths, mode)?);
        ranked.truncate(n);
        Ok(ranked)
    }

    /// Pick a single path to recommend.
    ///
    /// Any construction-free path beats every path with construction, even
    /// a faster one. Construction-free paths are compared by time then
    /// distance; paths with construction by time alone.
    pub fn recommend(
        &self,
        paths: &[Path],
        mode: TravelMode,
    ) -> Result<Recommendation, DomainError> {
        let (blocked, clean): (Vec<_>, Vec<_>) = self
            .evaluate_all(paths, mode)?
            .into_iter()
            .partition(|ranked| ranked.has_construction);

        if let Some(best) = rank_fastest(clean).into_iter().next() {
            return Ok(Recommendation::Clean(best));
        }
        if let Some(best) = rank_by_time(blocked).into_iter().next() {
            return Ok(Recommendation::Blocked(best));
        }
        Ok(Recommendation::NoRoute)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{RouteId, Traffic};
    use crate::network::RoadNetworkBuilder;
    use proptest::prelude::*;

    fn ranked_strategy() -> impl Strategy<Value = RankedPath> {
        (0usize..100, 0u8..20, 0u8..20, any::<bool>()).prop_map(
            |(id, time, distance, has_construction)| RankedPath {
                path: Path::new(vec![RouteId(id)]),
                time_mins: f64::from(time),
                distance_km: f64::from(distance),
                has_construction,
            },
        )
    }

    fn routes_strategy() -> impl Strategy<Value = Vec<(u8, u8, bool)>> {
        // (distance km, u-turns, construction) for parallel A -> B routes
        prop::collection::vec((1u8..10, 0u8..4, any::<bool>()), 0..10)
    }

    proptest! {
        #[test]
        fn rank_fastest_is_sorted(paths in prop::collection::vec(ranked_strategy(), 0..20)) {
            let ranked = rank_fastest(paths);

            for window in ranked.windows(2) {
                let a = (window[0].time_mins, window[0].distance_km);
                let b = (window[1].time_mins, window[1].distance_km);
                prop_assert!(a <= b, "not sorted: {:?} before {:?}", a, b);
            }
        }

        #[test]
        fn rank_fastest_is_stable(paths in prop::collection::vec(ranked_strategy(), 0..20)) {
            let indexed: Vec<RankedPath> = paths
                .into_iter()
                .enumerate()
                .map(|(i, mut r)| {
                    r.path = Path::new(vec![RouteId(i)]);
                    r
                })
                .collect();
            let ranked = rank_fastest(indexed);

            for window in ranked.windows(2) {
                let (a, b) = (&window[0], &window[1]);
                if a.time_mins == b.time_mins && a.distance_km == b.distance_km {
                    prop_assert!(a.path.routes()[0] < b.path.routes()[0]);
                }
            }
        }

        #[test]
        fn rank_by_time_preserves_elements(paths in prop::collection::vec(ranked_strategy(), 0..20)) {
            let original_len = paths.len();
            let ranked = rank_by_time(paths);

            prop_assert_eq!(ranked.len(), original_len);
            for window in ranked.windows(2) {
                prop_assert!(window[0].time_mins <= window[1].time_mins);
            }
        }

        #[test]
        fn recommend_prefers_clean(routes in routes_strategy()) {
            let mut builder = RoadNetworkBuilder::new().location("A").location("B");
            for &(distance, u_turns, construction) in &routes {
                builder = builder.route(
                    0,
                    1,
                    f64::from(distance),
                    u32::from(u_turns),
                    Traffic::Medium,
                    construction,
                );
            }
            let network = builder.build().unwrap();
            let paths: Vec<Path> = (0..routes.len()).map(|i| Path::new(vec![RouteId(i)])).collect();
            let cost = CostModel::default();
            let ranker = RouteRanker::new(&network, &cost);

            let any_clean = routes.iter().any(|r| !r.2);
            let rec = ranker.recommend(&paths, TravelMode::Car).unwrap();

            match rec {
                Recommendation::Clean(best) => {
                    prop_assert!(any_clean);
                    prop_assert!(!best.has_construction);
                    for path in &paths {
                        let other = ranker.evaluate(path, TravelMode::Car).unwrap();
                        if !other.has_construction {
                            prop_assert!(best.time_mins <= other.time_mins);
                        }
                    }
                }
                Recommendation::Blocked(best) => {
                    prop_assert!(!any_clean);
                    prop_assert!(best.has_construction);
                }
                Recommendation::NoRoute => prop_assert!(routes.is_empty()),
            }
        }
    }
}
