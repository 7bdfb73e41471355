//! Client for Google's hosted generative models
//!
//! Sends multimodal `generateContent` requests (video by reference plus text)
//! to Vertex AI or the Generative Language API and returns the generated text.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod client;
pub mod error;
pub mod protocol;

pub use client::{GenerativeModel, GoogleGenAiClient};
pub use error::GenAiError;
pub use protocol::{GenerationConfig, Part, VIDEO_MIME_TYPE};
