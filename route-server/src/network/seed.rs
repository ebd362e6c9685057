//! Built-in demo network.

use super::{RoadNetwork, RoadNetworkBuilder};
use crate::domain::{DomainError, Traffic};

/// Create the demo town used by the server.
///
/// Six locations joined by ten two-way roads. Distances are in kilometres.
pub fn demo_network() -> Result<RoadNetwork, DomainError> {
    const HOME: usize = 0;
    const SCHOOL: usize = 1;
    const MALL: usize = 2;
    const PARK: usize = 3;
    const HOSPITAL: usize = 4;
    const OFFICE: usize = 5;

    RoadNetworkBuilder::new()
        .location("Home")
        .location("School")
        .location("Mall")
        .location("Park")
        .location("Hospital")
        .location("Office")
        .two_way(HOME, SCHOOL, 3.0, 1, Traffic::Low, false)
        .two_way(SCHOOL, MALL, 2.0, 0, Traffic::Medium, true)
        .two_way(MALL, PARK, 1.5, 2, Traffic::High, false)
        .two_way(PARK, HOSPITAL, 4.0, 1, Traffic::Low, true)
        .two_way(HOSPITAL, OFFICE, 5.0, 0, Traffic::Medium, false)
        .two_way(HOME, MALL, 4.2, 0, Traffic::Medium, false)
        .two_way(MALL, OFFICE, 3.8, 1, Traffic::High, true)
        .two_way(SCHOOL, PARK, 2.5, 0, Traffic::Low, false)
        .two_way(PARK, OFFICE, 2.2, 1, Traffic::Medium, false)
        .two_way(HOME, HOSPITAL, 5.5, 0, Traffic::High, true)
        .build()
}
