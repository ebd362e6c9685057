//! Domain types for the route planner.
//!
//! This module contains the core model of a small road network: named
//! locations, directed routes between them, and paths made of routes.
//! Locations and routes are referenced by stable integer ids into the
//! network's flat storage rather than by direct links.

mod error;
mod location;
mod mode;
mod path;
mod route;

pub use error::DomainError;
pub use location::{Location, LocationId};
pub use mode::{InvalidTravelMode, TravelMode};
pub use path::Path;
pub use route::{InvalidTraffic, Route, RouteId, Traffic};
