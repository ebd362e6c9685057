use std::net::SocketAddr;

use route_server::network::demo_network;
use route_server::planner::PlannerConfig;
use route_server::web::{AppState, create_router};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Default static assets directory, next to this crate's manifest.
const DEFAULT_STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let default_addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    let addr = match std::env::var("ROUTE_SERVER_ADDR") {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            warn!(%raw, error = %e, "invalid ROUTE_SERVER_ADDR, using default");
            default_addr
        }),
        Err(_) => default_addr,
    };
    let static_dir =
        std::env::var("ROUTE_SERVER_STATIC_DIR").unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string());

    // Build the demo network
    let network = demo_network().expect("Failed to build demo network");
    info!(
        locations = network.location_count(),
        routes = network.routes().len(),
        "loaded road network"
    );

    let config = PlannerConfig::default();
    let state = AppState::new(network, config);
    let app = create_router(state, &static_dir);

    info!("Route Planner listening on http://{addr}");
    info!("API Endpoints:");
    info!("  GET  /health              - Health check");
    info!("  GET  /api/locations       - List locations");
    info!("  GET  /api/locations/:idx  - Look up a location");
    info!("  GET  /routes/plan         - Plan routes (?start=&end=&mode=)");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
