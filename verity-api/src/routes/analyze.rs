//! Analysis endpoint

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::info;

use crate::AppState;

/// Default lookback window in days
const DEFAULT_DAYS: u32 = 3;
/// Lookback window bounds (the dashboard slider's range)
const MIN_DAYS: u32 = 1;
const MAX_DAYS: u32 = 31;

/// Query parameters for an analysis run
#[derive(Debug, Deserialize)]
pub struct AnalyzeQuery {
    /// Topic to analyze
    pub topic: Option<String>,
    /// Lookback window in days
    pub days: Option<u32>,
}

/// Create analysis routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/analyze", get(analyze))
}

/// GET /api/analyze?topic=...&days=... - Run one analysis
///
/// A missing or empty topic is a prompt to the user, not an internal
/// error. A started run always completes (external failures degrade to
/// empty lists and placeholders inside the driver).
async fn analyze(
    State(state): State<AppState>,
    Query(params): Query<AnalyzeQuery>,
) -> impl IntoResponse {
    let topic = match params.topic.as_deref().map(str::trim) {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "error": "Enter a topic to analyze"
                })),
            )
                .into_response();
        }
    };

    let days = params.days.unwrap_or(DEFAULT_DAYS).clamp(MIN_DAYS, MAX_DAYS);

    info!("Analyzing topic '{}' over {} days", topic, days);
    let report = state.analyzer.analyze(&topic, days).await;

    (StatusCode::OK, Json(report)).into_response()
}
