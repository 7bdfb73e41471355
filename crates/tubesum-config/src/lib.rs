#![allow(clippy::must_use_candidate)]

mod env;
pub mod genai;
mod loader;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use genai::*;
pub use server::*;
pub use telemetry::*;

/// Top-level tubesum configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Remote generative-AI client configuration
    #[serde(default)]
    pub genai: GenAiConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
