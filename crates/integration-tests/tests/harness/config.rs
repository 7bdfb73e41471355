//! Programmatic configuration builder for integration tests

#![allow(dead_code)]

use std::net::SocketAddr;

use secrecy::SecretString;
use tubesum_config::{Config, GenAiBackend, GenAiConfig, ServerConfig, TelemetryConfig};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults and no credentials
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                },
                genai: GenAiConfig::default(),
                telemetry: TelemetryConfig::default(),
            },
        }
    }

    /// Point the developer-API backend at a mock
    pub fn with_gemini_api(mut self, base_url: &str) -> Self {
        self.config.genai.backend = GenAiBackend::GeminiApi;
        self.config.genai.api_key = Some(SecretString::from("test-key"));
        self.config.genai.base_url = Some(base_url.parse().expect("valid URL"));
        self
    }

    /// Point the Vertex AI backend at a mock
    pub fn with_vertex_ai(mut self, base_url: &str) -> Self {
        self.config.genai.backend = GenAiBackend::VertexAi;
        self.config.genai.project = "test-project".to_owned();
        self.config.genai.location = "us-central1".to_owned();
        self.config.genai.access_token = Some(SecretString::from("ya29.test-token"));
        self.config.genai.base_url = Some(base_url.parse().expect("valid URL"));
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
