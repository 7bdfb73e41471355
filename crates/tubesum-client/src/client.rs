use std::time::Duration;

use url::Url;

use crate::error::{Result, TubesumClientError};
use crate::types::{HealthStatus, SummarizeForm, SummaryResponse};

/// Backend address used when none is given
pub const DEFAULT_BACKEND_URL: &str = "http://0.0.0.0:8080";

/// Remote video summarization is slow; allow five minutes per request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Typed client for the tubesum backend
#[derive(Debug, Clone)]
pub struct SummarizerClient {
    base_url: Url,
    http: reqwest::Client,
}

impl SummarizerClient {
    /// Create a new client pointing at the given base URL
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be built
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    /// Create a client with a custom request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be built
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url =
            Url::parse(base_url).map_err(|e| TubesumClientError::Config(format!("invalid base URL: {e}")))?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TubesumClientError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { base_url, http })
    }

    /// Get the base URL
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Request a summary for a video
    ///
    /// # Errors
    ///
    /// Returns `Connection` if the backend is unreachable, `Api` for a
    /// non-success status, and `Parse` for an unexpected success body
    pub async fn summarize(&self, form: &SummarizeForm) -> Result<String> {
        let url = make_url(&self.base_url, "/summarize");
        tracing::debug!(%url, model = %form.model, "posting summarize request");

        let response = self
            .http
            .post(url.as_str())
            .form(form)
            .send()
            .await
            .map_err(|source| self.connection_error(source))?;

        let response = handle_error(response).await?;
        let body: SummaryResponse = response
            .json()
            .await
            .map_err(|e| TubesumClientError::Parse(e.to_string()))?;

        Ok(body.summary)
    }

    /// Fetch the backend health status
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable or answers unexpectedly
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = make_url(&self.base_url, "/");

        let response = self
            .http
            .get(url.as_str())
            .send()
            .await
            .map_err(|source| self.connection_error(source))?;

        handle_error(response)
            .await?
            .json()
            .await
            .map_err(|e| TubesumClientError::Parse(e.to_string()))
    }

    fn connection_error(&self, source: reqwest::Error) -> TubesumClientError {
        TubesumClientError::Connection {
            base_url: self.base_url.as_str().trim_end_matches('/').to_owned(),
            source,
        }
    }
}

/// Build a full URL from base and path, keeping any path prefix of the base
fn make_url(base_url: &Url, path: &str) -> Url {
    let mut url = base_url.clone();
    let joined = format!("{}/{}", base_url.path().trim_end_matches('/'), path.trim_start_matches('/'));
    url.set_path(&joined);
    url
}

/// Check an HTTP response for errors
async fn handle_error(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();

    Err(TubesumClientError::Api {
        status: status.as_u16(),
        message: parse_error_body(&body),
    })
}

/// Pull a human-readable message out of an error body
///
/// Understands `{"error": {"message": ...}}`, `{"error": "..."}` and
/// `{"detail": "..."}`; anything else is returned as raw text.
fn parse_error_body(body: &str) -> String {
    let Ok(json) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.to_owned();
    };

    json["error"]["message"]
        .as_str()
        .or_else(|| json["error"].as_str())
        .or_else(|| json["detail"].as_str())
        .map_or_else(|| body.to_owned(), ToOwned::to_owned)
}
