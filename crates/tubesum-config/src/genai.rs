use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Cloud project used when none is configured
pub const DEFAULT_PROJECT_ID: &str = "fussing-around-learning-gcp";

/// Vertex AI region used when none is configured
pub const DEFAULT_LOCATION: &str = "us-central1";

/// Remote generative-AI client configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenAiConfig {
    /// Which Google endpoint family to call
    #[serde(default)]
    pub backend: GenAiBackend,
    /// Cloud project (Vertex AI only)
    #[serde(default = "default_project")]
    pub project: String,
    /// Cloud region (Vertex AI only)
    #[serde(default = "default_location")]
    pub location: String,
    /// OAuth access token (Vertex AI)
    #[serde(default)]
    pub access_token: Option<SecretString>,
    /// API key (developer API)
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override, mostly useful for pointing at a mock
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Sampling parameters sent with every request
    #[serde(default)]
    pub generation: GenerationConfig,
}

impl Default for GenAiConfig {
    fn default() -> Self {
        Self {
            backend: GenAiBackend::default(),
            project: default_project(),
            location: default_location(),
            access_token: None,
            api_key: None,
            base_url: None,
            generation: GenerationConfig::default(),
        }
    }
}

/// Supported remote endpoint families
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenAiBackend {
    /// Vertex AI `publishers/google` models, authenticated with a bearer token
    #[default]
    VertexAi,
    /// Generative Language API, authenticated with an API key
    GeminiApi,
}

/// Sampling parameters
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationConfig {
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Nucleus sampling threshold
    #[serde(default = "default_top_p")]
    pub top_p: f64,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            top_p: default_top_p(),
            max_output_tokens: default_max_output_tokens(),
        }
    }
}

fn default_project() -> String {
    DEFAULT_PROJECT_ID.to_string()
}

fn default_location() -> String {
    DEFAULT_LOCATION.to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_temperature() -> f64 {
    1.0
}

#[allow(clippy::missing_const_for_fn)]
fn default_top_p() -> f64 {
    0.95
}

#[allow(clippy::missing_const_for_fn)]
fn default_max_output_tokens() -> u32 {
    8192
}
