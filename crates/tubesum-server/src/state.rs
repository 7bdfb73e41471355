use std::fmt;
use std::sync::Arc;

use tubesum_config::GenAiConfig;
use tubesum_genai::{GenerationConfig, GenerativeModel, GoogleGenAiClient};

use crate::error::SummarizeError;

/// Detail reported when initialization was never attempted
const NOT_INITIALIZED: &str = "Client not initialized.";

/// Process-wide handle to the remote model
///
/// Set once at startup and never mutated; a failed initialization is not
/// retried.
#[derive(Clone, Default)]
pub enum ClientHandle {
    #[default]
    Uninitialized,
    Ready(Arc<dyn GenerativeModel>),
    /// Initialization error message
    Failed(String),
}

impl ClientHandle {
    /// Construct the remote client, capturing any failure
    pub fn initialize(config: &GenAiConfig) -> Self {
        match GoogleGenAiClient::new(config) {
            Ok(client) => {
                tracing::info!(backend = client.name(), "GenAI client initialized");
                Self::Ready(Arc::new(client))
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to initialize GenAI client");
                Self::Failed(e.to_string())
            }
        }
    }

    /// Error detail when the client is not usable
    pub fn error_details(&self) -> Option<&str> {
        match self {
            Self::Ready(_) => None,
            Self::Uninitialized => Some(NOT_INITIALIZED),
            Self::Failed(message) => Some(message),
        }
    }

    /// The ready client, or the error to return to callers
    pub(crate) fn ready(&self) -> Result<&Arc<dyn GenerativeModel>, SummarizeError> {
        match self {
            Self::Ready(client) => Ok(client),
            other => Err(SummarizeError::ClientUnavailable(
                other.error_details().unwrap_or(NOT_INITIALIZED).to_owned(),
            )),
        }
    }
}

impl fmt::Debug for ClientHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => f.write_str("Uninitialized"),
            Self::Ready(client) => f.debug_tuple("Ready").field(&client.name()).finish(),
            Self::Failed(message) => f.debug_tuple("Failed").field(message).finish(),
        }
    }
}

/// Shared state for route handlers
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
struct AppStateInner {
    client: ClientHandle,
    generation: GenerationConfig,
}

impl AppState {
    pub fn new(client: ClientHandle, generation: GenerationConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner { client, generation }),
        }
    }

    pub fn client(&self) -> &ClientHandle {
        &self.inner.client
    }

    /// Sampling parameters sent with every request
    pub fn generation(&self) -> GenerationConfig {
        self.inner.generation
    }
}
