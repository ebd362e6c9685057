//! Web layer for the route planner.
//!
//! Provides HTTP endpoints for listing locations and planning routes.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
