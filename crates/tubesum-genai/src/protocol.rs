//! Google `generateContent` wire format types
//!
//! Shared by Vertex AI and the Generative Language API, which accept the
//! same request and response bodies.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::GenAiError;

/// MIME type used for video references; the service sniffs the concrete type
pub const VIDEO_MIME_TYPE: &str = "video/*";

// -- Request types --

/// `generateContent` request body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation contents
    pub contents: Vec<Content>,
    /// Sampling parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// Content object containing role and parts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Role ("user" or "model")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

impl Content {
    /// Wrap parts into a single user turn
    pub fn user(parts: Vec<Part>) -> Self {
        Self {
            role: Some("user".to_owned()),
            parts,
        }
    }
}

/// One discrete unit of input to the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Part {
    /// Text content
    Text(String),
    /// Reference to remote media, fetched by the service
    FileData(FileData),
}

impl Part {
    /// Build a text part
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Build a media reference part from a URI
    ///
    /// The URI is sent exactly as given; parsing only decides whether it can
    /// be a media reference at all.
    ///
    /// # Errors
    ///
    /// Returns `GenAiError::InvalidInput` if `uri` is not an absolute URI
    /// with a host
    pub fn from_uri(uri: &str, mime_type: &str) -> Result<Self, GenAiError> {
        let parsed = Url::parse(uri).map_err(|e| GenAiError::InvalidInput(format!("{e}: `{uri}`")))?;

        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(GenAiError::InvalidInput(format!("URI has no host: `{uri}`")));
        }

        Ok(Self::FileData(FileData {
            file_uri: uri.to_owned(),
            mime_type: mime_type.to_owned(),
        }))
    }

    /// Text of this part, if it is a text part
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::FileData(_) => None,
        }
    }
}

/// Remote media reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileData {
    pub file_uri: String,
    pub mime_type: String,
}

/// Generation configuration parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature
    pub temperature: f64,
    /// Nucleus sampling threshold
    pub top_p: f64,
    /// Maximum output tokens
    pub max_output_tokens: u32,
}

impl From<&tubesum_config::GenerationConfig> for GenerationConfig {
    fn from(config: &tubesum_config::GenerationConfig) -> Self {
        Self {
            temperature: config.temperature,
            top_p: config.top_p,
            max_output_tokens: config.max_output_tokens,
        }
    }
}

// -- Response types --

/// `generateContent` response body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate
    ///
    /// Returns `None` when there is no candidate or it carries no text.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content.parts.iter().filter_map(|p| p.text.as_deref()).collect();
        (!text.is_empty()).then_some(text)
    }

    /// Human-readable reason a response has no text
    pub fn empty_reason(&self) -> String {
        if let Some(reason) = self.prompt_feedback.as_ref().and_then(|f| f.block_reason.as_deref()) {
            return format!("prompt blocked: {reason}");
        }

        match self.candidates.first().and_then(|c| c.finish_reason.as_deref()) {
            Some(reason) => format!("response contained no text (finish reason: {reason})"),
            None => "response contained no candidates".to_owned(),
        }
    }
}

/// Generated candidate
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Absent when generation was stopped by a safety filter
    #[serde(default)]
    pub content: Option<ResponseContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Candidate content
///
/// Response parts may carry fields besides `text` (thought signatures,
/// function calls), so they are read leniently.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// Token usage metadata
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
    #[serde(default)]
    pub total_token_count: u32,
}

// -- Error response --

/// Google error response
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub code: u32,
    pub message: String,
    /// Canonical status string (e.g. `INVALID_ARGUMENT`)
    #[serde(default)]
    pub status: String,
}
