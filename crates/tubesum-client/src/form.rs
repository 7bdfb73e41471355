//! Form submission flow of the front end
//!
//! Validates the form locally, calls the backend once, and reduces the
//! result to something the caller can render.

use crate::client::SummarizerClient;
use crate::types::SummarizeForm;

/// Result of submitting the form, ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Generated summary text
    Summary(String),
    /// Input problem or empty result; the backend may not have been called
    Warning(String),
    /// Backend or connectivity failure
    Error(String),
}

/// Submit the summarize form
///
/// A blank link short-circuits with a warning and no request is made.
pub async fn submit(client: &SummarizerClient, youtube_link: &str, model: &str, instructions: &str) -> Outcome {
    if youtube_link.trim().is_empty() {
        return Outcome::Warning("Please enter a YouTube video link.".to_owned());
    }

    let form = SummarizeForm {
        youtube_link: youtube_link.to_owned(),
        model: model.to_owned(),
        additional_prompt: instructions.to_owned(),
    };

    match client.summarize(&form).await {
        Ok(summary) if summary.trim().is_empty() => {
            Outcome::Warning("No summary could be generated, or an unknown error occurred.".to_owned())
        }
        Ok(summary) => Outcome::Summary(summary),
        Err(e) => {
            tracing::debug!(error = %e, "summarize request failed");
            Outcome::Error(e.to_string())
        }
    }
}
