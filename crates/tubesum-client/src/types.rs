use serde::{Deserialize, Serialize};

/// Model identifiers offered to users; the first is the default
pub const MODEL_OPTIONS: &[&str] = &[
    "gemini-2.0-flash-001",
    "gemini-2.0-pro-001",
    "gemini-2.5-flash-001",
    "gemini-2.5-pro-001",
];

/// Form fields posted to `/summarize`
#[derive(Debug, Clone, Serialize)]
pub struct SummarizeForm {
    pub youtube_link: String,
    pub model: String,
    pub additional_prompt: String,
}

/// Body of a successful summarize response
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}

/// Body of `GET /`
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
    pub genai_client_status: String,
    #[serde(default)]
    pub genai_error_details: Option<String>,
}

impl HealthStatus {
    /// Whether the backend can reach the remote model
    pub fn is_ready(&self) -> bool {
        self.genai_client_status == "healthy"
    }
}
