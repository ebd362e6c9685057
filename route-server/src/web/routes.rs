//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path as UrlPath, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tracing::{error, info, warn};

use crate::domain::{DomainError, LocationId, TravelMode};
use crate::planner::{PlanError, PlanRequest, Planner};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/locations", get(locations))
        .route("/api/locations/:index", get(location))
        .route("/routes/plan", get(plan_routes))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the plan form.
async fn index_page(State(state): State<AppState>) -> Result<Response, AppError> {
    let template = IndexTemplate {
        locations: list_locations(&state.network),
    };
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {e}"),
    })?;

    Ok(Html(html).into_response())
}

/// List all locations.
async fn locations(State(state): State<AppState>) -> Json<LocationsResponse> {
    Json(LocationsResponse {
        locations: list_locations(&state.network),
    })
}

/// Look up a single location.
async fn location(
    State(state): State<AppState>,
    UrlPath(index): UrlPath<usize>,
) -> Result<Json<LocationResult>, AppError> {
    let name = location_name(&state.network, LocationId(index)).map_err(|_| AppError::NotFound {
        message: format!("Location {index} not found"),
    })?;

    Ok(Json(LocationResult { index, name }))
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Plan routes between two locations.
async fn plan_routes(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<PlanRoutesQuery>,
) -> Result<Response, AppError> {
    let mode = TravelMode::parse(&req.mode).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;
    let request = PlanRequest::new(LocationId(req.start), LocationId(req.end), mode);

    let network = &state.network;
    let planner = Planner::new(network, &state.config);
    let plan = planner.plan(&request)?;

    info!(
        start = req.start,
        end = req.end,
        %mode,
        paths = plan.paths_found,
        "route plan served"
    );

    let cost = planner.cost_model();
    let top_routes = plan
        .top_routes
        .iter()
        .map(|ranked| RouteOptionResult::from_ranked(ranked, network, cost))
        .collect::<Result<Vec<_>, _>>()?;

    let response = PlanRoutesResponse {
        start: location_name(network, request.start)?,
        end: location_name(network, request.end)?,
        mode,
        paths_found: plan.paths_found,
        top_routes,
        recommendation: RecommendationResult::from_recommendation(
            &plan.recommendation,
            network,
            cost,
        )?,
    };

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let template = PlanResultsTemplate::from_response(&response);
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {e}"),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(response).into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::InvalidRequest(message) => AppError::BadRequest { message },
            PlanError::Domain(e) => e.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::HeaderValue;

    use crate::network::demo_network;
    use crate::planner::PlannerConfig;

    fn state() -> AppState {
        AppState::new(demo_network().unwrap(), PlannerConfig::default())
    }

    fn query(start: usize, end: usize, mode: &str) -> Query<PlanRoutesQuery> {
        Query(PlanRoutesQuery {
            start,
            end,
            mode: mode.to_string(),
        })
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn lists_locations() {
        let Json(response) = locations(State(state())).await;

        assert_eq!(response.locations.len(), 6);
        assert_eq!(response.locations[0].name, "Home");
        assert_eq!(response.locations[5].name, "Office");
    }

    #[tokio::test]
    async fn single_location() {
        let Json(found) = location(State(state()), UrlPath(3)).await.unwrap();
        assert_eq!(found.name, "Park");

        let err = location(State(state()), UrlPath(42)).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn plan_home_to_mall_by_car() {
        let response = plan_routes(State(state()), HeaderMap::new(), query(0, 2, "car"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["start"], "Home");
        assert_eq!(json["end"], "Mall");
        assert_eq!(json["mode"], "car");
        assert_eq!(json["top_routes"].as_array().unwrap().len(), 2);
        assert_eq!(json["recommendation"]["status"], "clean");

        // The direct 4.2 km road is the fastest clean option
        let segments = json["recommendation"]["route"]["segments"].as_array().unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0]["route"], 10);
        assert_eq!(segments[0]["traffic"], "medium");

        let estimates = json["top_routes"][0]["estimates"].as_array().unwrap();
        assert_eq!(estimates.len(), 3);
        assert_eq!(estimates[0]["label"], "Walking");
    }

    #[tokio::test]
    async fn plan_renders_html_when_requested() {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("text/html"));

        let response = plan_routes(State(state()), headers, query(0, 5, "walk"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("Route option 1"));
        assert!(html.contains("Best route (no construction)"));
        assert!(html.contains("Walking:"));
    }

    #[tokio::test]
    async fn rejects_unknown_mode() {
        let err = plan_routes(State(state()), HeaderMap::new(), query(0, 2, "scooter"))
            .await
            .unwrap_err();

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("scooter"));
    }

    #[tokio::test]
    async fn rejects_same_start_and_end() {
        let err = plan_routes(State(state()), HeaderMap::new(), query(1, 1, "bike"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn rejects_out_of_range_location() {
        let err = plan_routes(State(state()), HeaderMap::new(), query(0, 6, "bike"))
            .await
            .unwrap_err();

        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn index_page_renders() {
        let response = index_page(State(state())).await.unwrap();
        let html = body_text(response).await;

        assert!(html.contains("Hospital"));
        assert!(html.contains("/routes/plan"));
    }

    #[test]
    fn plan_error_mapping() {
        let err: AppError = PlanError::InvalidRequest("bad".to_string()).into();
        assert!(matches!(err, AppError::BadRequest { message } if message == "bad"));

        let err: AppError = PlanError::Domain(DomainError::InvalidLocation(LocationId(9))).into();
        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[test]
    fn accepts_html_header() {
        let mut headers = HeaderMap::new();
        assert!(!accepts_html(&headers));

        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml"),
        );
        assert!(accepts_html(&headers));

        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        assert!(!accepts_html(&headers));
    }
}
