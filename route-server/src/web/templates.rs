//! Askama templates for the web frontend.

use askama::Template;

use super::dto::{LocationResult, PlanRoutesResponse, RecommendationStatus, RouteOptionResult};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the plan form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub locations: Vec<LocationResult>,
}

/// Plan results page.
#[derive(Template)]
#[template(path = "plan_results.html")]
pub struct PlanResultsTemplate {
    pub start: String,
    pub end: String,
    pub mode: String,
    pub routes: Vec<RouteView>,
    pub recommendation: Option<RouteView>,
    pub all_blocked: bool,
}

impl PlanResultsTemplate {
    /// Create from a plan response.
    pub fn from_response(response: &PlanRoutesResponse) -> Self {
        Self {
            start: response.start.clone(),
            end: response.end.clone(),
            mode: response.mode.to_string(),
            routes: response.top_routes.iter().map(RouteView::from_result).collect(),
            recommendation: response
                .recommendation
                .route
                .as_ref()
                .map(RouteView::from_result),
            all_blocked: response.recommendation.status == RecommendationStatus::Construction,
        }
    }
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Route view model for templates.
#[derive(Debug, Clone)]
pub struct RouteView {
    pub segments: Vec<SegmentView>,
    pub total_distance: String,
    pub has_construction: bool,
    pub time: String,
    pub estimates: Vec<EstimateView>,
}

impl RouteView {
    /// Create from a route option DTO.
    pub fn from_result(result: &RouteOptionResult) -> Self {
        Self {
            segments: result
                .segments
                .iter()
                .map(|s| SegmentView {
                    from: s.from.clone(),
                    to: s.to.clone(),
                    distance: format_km(s.distance_km),
                    u_turns: s.u_turns,
                    traffic: s.traffic.label(),
                    construction: s.construction,
                })
                .collect(),
            total_distance: format_km(result.total_distance_km),
            has_construction: result.has_construction,
            time: format_mins(result.time_mins),
            estimates: result
                .estimates
                .iter()
                .map(|e| EstimateView {
                    label: e.label,
                    time: format_mins(e.time_mins),
                })
                .collect(),
        }
    }
}

/// Segment view model for templates.
#[derive(Debug, Clone)]
pub struct SegmentView {
    pub from: String,
    pub to: String,
    pub distance: String,
    pub u_turns: u32,
    pub traffic: &'static str,
    pub construction: bool,
}

/// Per-mode estimate for templates.
#[derive(Debug, Clone)]
pub struct EstimateView {
    pub label: &'static str,
    pub time: String,
}

/// Format a distance, e.g. "4.2 km".
fn format_km(km: f64) -> String {
    format!("{} km", trim_decimal(km))
}

/// Format a duration, e.g. "9.24 mins".
fn format_mins(mins: f64) -> String {
    format!("{} mins", trim_decimal(mins))
}

/// Two decimal places, without trailing zeros.
fn trim_decimal(value: f64) -> String {
    let s = format!("{value:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
