use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

const HEALTHY: &str = "healthy";
const UNHEALTHY: &str = "unhealthy";

/// Body of `GET /`
#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub genai_client_status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genai_error_details: Option<String>,
}

/// Health check handler
///
/// Always answers 200; a broken client is reported, not propagated.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    let details = state.client().error_details().map(str::to_owned);

    Json(HealthCheckResponse {
        status: HEALTHY,
        message: "Application is running. POST a YouTube link to /summarize to get a summary.",
        genai_client_status: if details.is_none() { HEALTHY } else { UNHEALTHY },
        genai_error_details: details,
    })
}
