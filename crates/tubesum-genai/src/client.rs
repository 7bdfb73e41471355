//! Google generative model client implementation

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::HeaderValue;
use secrecy::{ExposeSecret, SecretString};
use tubesum_config::{GenAiBackend, GenAiConfig};
use url::Url;

use crate::error::GenAiError;
use crate::protocol::{Content, ErrorResponse, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part};

/// Default Generative Language API base URL
const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Header carrying the developer API key
const API_KEY_HEADER: &str = "x-goog-api-key";

/// A hosted model that turns content parts into text
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Short description of the backend, used in logs
    fn name(&self) -> &str;

    /// Run `generateContent` on `model` and return the generated text
    async fn generate_content(
        &self,
        model: &str,
        parts: Vec<Part>,
        config: GenerationConfig,
    ) -> Result<String, GenAiError>;
}

/// How requests are authenticated
enum Credential {
    /// OAuth bearer token (Vertex AI)
    Bearer(SecretString),
    /// Developer API key
    ApiKey(SecretString),
}

/// Client for Vertex AI or the Generative Language API
pub struct GoogleGenAiClient {
    name: String,
    client: Client,
    /// Everything before `/models/{model}:generateContent`
    models_url: String,
    credential: Credential,
}

impl GoogleGenAiClient {
    /// Create from configuration
    ///
    /// # Errors
    ///
    /// Returns `GenAiError::Config` if the credential for the selected
    /// backend is missing, the project or location is empty, a URL is
    /// invalid, or the HTTP client cannot be built.
    pub fn new(config: &GenAiConfig) -> Result<Self, GenAiError> {
        let (name, models_url, credential) = match config.backend {
            GenAiBackend::VertexAi => {
                if config.project.trim().is_empty() {
                    return Err(GenAiError::Config("genai.project must not be empty".to_owned()));
                }
                if config.location.trim().is_empty() {
                    return Err(GenAiError::Config("genai.location must not be empty".to_owned()));
                }

                let token = non_blank(config.access_token.as_ref()).ok_or_else(|| {
                    GenAiError::Config("an access token is required for the vertex_ai backend".to_owned())
                })?;

                let base = match &config.base_url {
                    Some(url) => url.clone(),
                    None => vertex_base_url(&config.location)?,
                };
                let models_url = format!(
                    "{}/projects/{}/locations/{}/publishers/google",
                    base.as_str().trim_end_matches('/'),
                    config.project,
                    config.location,
                );

                (
                    format!("vertex_ai:{}/{}", config.project, config.location),
                    models_url,
                    Credential::Bearer(token),
                )
            }
            GenAiBackend::GeminiApi => {
                let key = non_blank(config.api_key.as_ref()).ok_or_else(|| {
                    GenAiError::Config("an API key is required for the gemini_api backend".to_owned())
                })?;

                let base = config.base_url.as_ref().map_or(GEMINI_API_BASE_URL, Url::as_str);

                ("gemini_api".to_owned(), base.trim_end_matches('/').to_owned(), Credential::ApiKey(key))
            }
        };

        let client = Client::builder()
            .build()
            .map_err(|e| GenAiError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            name,
            client,
            models_url,
            credential,
        })
    }

    /// Build the `generateContent` endpoint URL for a model
    fn generate_url(&self, model: &str) -> String {
        format!("{}/models/{model}:generateContent", self.models_url)
    }

    fn auth_header(&self) -> Result<(&'static str, HeaderValue), GenAiError> {
        let (name, raw) = match &self.credential {
            Credential::Bearer(token) => ("authorization", format!("Bearer {}", token.expose_secret())),
            Credential::ApiKey(key) => (API_KEY_HEADER, key.expose_secret().to_owned()),
        };

        let mut value = HeaderValue::from_str(&raw)
            .map_err(|_| GenAiError::Config("credential is not a valid header value".to_owned()))?;
        value.set_sensitive(true);

        Ok((name, value))
    }
}

#[async_trait]
impl GenerativeModel for GoogleGenAiClient {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate_content(
        &self,
        model: &str,
        parts: Vec<Part>,
        config: GenerationConfig,
    ) -> Result<String, GenAiError> {
        validate_model_name(model)?;

        let wire_request = GenerateContentRequest {
            contents: vec![Content::user(parts)],
            generation_config: Some(config),
        };
        let (header_name, header_value) = self.auth_header()?;

        let response = self
            .client
            .post(self.generate_url(model))
            .header(header_name, header_value)
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(backend = %self.name, error = %e, "upstream request failed");
                GenAiError::Upstream(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = upstream_message(&body);
            tracing::warn!(backend = %self.name, %status, model, "upstream returned error");

            if status == reqwest::StatusCode::BAD_REQUEST {
                return Err(GenAiError::InvalidInput(message));
            }
            return Err(GenAiError::Upstream(format!("provider returned {status}: {message}")));
        }

        let wire_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenAiError::Upstream(format!("failed to parse response: {e}")))?;

        if let Some(usage) = &wire_response.usage_metadata {
            tracing::debug!(
                backend = %self.name,
                model,
                prompt_tokens = usage.prompt_token_count,
                output_tokens = usage.candidates_token_count,
                "generation finished"
            );
        }

        wire_response
            .text()
            .ok_or_else(|| GenAiError::Upstream(wire_response.empty_reason()))
    }
}

/// Credentials expanded from an unset variable arrive as empty strings
fn non_blank(secret: Option<&SecretString>) -> Option<SecretString> {
    secret
        .filter(|s| !s.expose_secret().trim().is_empty())
        .cloned()
}

/// Regional Vertex AI endpoint; `global` has no regional prefix
fn vertex_base_url(location: &str) -> Result<Url, GenAiError> {
    let raw = if location == "global" {
        "https://aiplatform.googleapis.com/v1".to_owned()
    } else {
        format!("https://{location}-aiplatform.googleapis.com/v1")
    };

    Url::parse(&raw).map_err(|e| GenAiError::Config(format!("invalid location `{location}`: {e}")))
}

/// Reject model names that cannot form a valid endpoint path
fn validate_model_name(model: &str) -> Result<(), GenAiError> {
    if model.trim().is_empty() {
        return Err(GenAiError::InvalidInput("model name must not be empty".to_owned()));
    }

    if model.chars().any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#' | ':')) {
        return Err(GenAiError::InvalidInput(format!("invalid model name: `{model}`")));
    }

    Ok(())
}

/// Extract the human-readable message from a Google error body
fn upstream_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body).map_or_else(|_| body.trim().to_owned(), |e| e.error.message)
}
