use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use http::{StatusCode, header};
use serde::{Deserialize, Serialize};
use tubesum_genai::{Part, VIDEO_MIME_TYPE};

use crate::error::SummarizeError;
use crate::prompt;
use crate::state::AppState;

/// Raw form fields; presence is checked by hand so a missing field is a 400
#[derive(Debug, Deserialize)]
pub struct SummarizeForm {
    youtube_link: Option<String>,
    model: Option<String>,
    additional_prompt: Option<String>,
}

/// A validated summarize request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizeRequest {
    pub youtube_link: String,
    pub model: String,
    pub additional_prompt: Option<String>,
}

impl TryFrom<SummarizeForm> for SummarizeRequest {
    type Error = SummarizeError;

    fn try_from(form: SummarizeForm) -> Result<Self, Self::Error> {
        let youtube_link = required(form.youtube_link, "youtube_link")?;
        let model = required(form.model, "model")?;

        Ok(Self {
            youtube_link,
            model,
            additional_prompt: form.additional_prompt,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, SummarizeError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(SummarizeError::MissingField(field))
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

/// Handle `POST /summarize`
pub async fn summarize_handler(
    State(state): State<AppState>,
    form: Result<Form<SummarizeForm>, FormRejection>,
) -> Result<Json<SummaryResponse>, SummarizeError> {
    let Form(form) = form.map_err(|e| SummarizeError::InvalidForm(e.body_text()))?;
    let request = SummarizeRequest::try_from(form)?;

    tracing::info!(model = %request.model, link = %request.youtube_link, "summarize requested");

    match generate_summary(&state, &request).await {
        Ok(summary) => {
            tracing::info!(model = %request.model, chars = summary.len(), "summary generated");
            Ok(Json(SummaryResponse { summary }))
        }
        Err(e) => {
            tracing::warn!(model = %request.model, error = %e, "summarize failed");
            Err(e)
        }
    }
}

/// Forward a request to the remote model and return its text unmodified
///
/// # Errors
///
/// Returns `ClientUnavailable` when the client failed to initialize,
/// `InvalidLink` when the link is not a usable URI, and the mapped remote
/// error otherwise
pub async fn generate_summary(state: &AppState, request: &SummarizeRequest) -> Result<String, SummarizeError> {
    let client = state.client().ready()?;

    let video = Part::from_uri(&request.youtube_link, VIDEO_MIME_TYPE)
        .map_err(|e| SummarizeError::InvalidLink(e.to_string()))?;

    let parts = prompt::build_contents(video, request.additional_prompt.as_deref());

    let summary = client
        .generate_content(&request.model, parts, state.generation())
        .await?;

    Ok(summary)
}

/// Handle `GET /summarize` by sending browsers to the health page
pub async fn redirect_handler() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
}
