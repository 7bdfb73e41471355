use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;
use tubesum_core::HttpError;
use tubesum_genai::GenAiError;

/// Errors returned by the summarize endpoint
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// A required form field is missing or blank
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The body could not be read as form data
    #[error("Invalid form data: {0}")]
    InvalidForm(String),

    /// The link cannot be turned into a video reference
    #[error("Invalid YouTube link or URI issue: {0}")]
    InvalidLink(String),

    /// The remote client failed to initialize at startup
    #[error("GenAI Client not initialized: {0}")]
    ClientUnavailable(String),

    /// The remote service rejected an input value
    #[error("Input error for GenAI: {0}")]
    InvalidInput(String),

    /// Any other failure of the remote call
    #[error("GenAI content generation failed: {0}")]
    Generation(String),
}

impl From<GenAiError> for SummarizeError {
    fn from(error: GenAiError) -> Self {
        match error {
            GenAiError::InvalidInput(message) => Self::InvalidInput(message),
            GenAiError::Upstream(message) | GenAiError::Config(message) => Self::Generation(message),
        }
    }
}

impl HttpError for SummarizeError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingField(_) | Self::InvalidForm(_) | Self::InvalidLink(_) | Self::InvalidInput(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::ClientUnavailable(_) | Self::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::MissingField(_) | Self::InvalidForm(_) | Self::InvalidLink(_) | Self::InvalidInput(_) => {
                "invalid_request_error"
            }
            Self::ClientUnavailable(_) => "service_unavailable_error",
            Self::Generation(_) => "upstream_error",
        }
    }

    fn client_message(&self) -> String {
        self.to_string()
    }
}

impl IntoResponse for SummarizeError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_body())).into_response()
    }
}
