//! HTTP surface of tubesum: health check and video summarization

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod health;
mod prompt;
mod state;
mod summarize;
#[cfg(test)]
mod test_support;

use std::net::SocketAddr;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;
use tubesum_config::Config;
use tubesum_genai::GenerationConfig;

pub use error::SummarizeError;
pub use health::HealthCheckResponse;
pub use prompt::{DEFAULT_PROMPT, build_contents};
pub use state::{AppState, ClientHandle};
pub use summarize::{SummarizeRequest, SummaryResponse, generate_summary};

/// Build the router with all routes and middleware
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health_handler))
        .route(
            "/summarize",
            post(summarize::summarize_handler).get(summarize::redirect_handler),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// Initializes the remote client once; a failure is recorded in the
    /// state and reported by the health check rather than aborting startup.
    pub fn new(config: &Config) -> Self {
        let client = ClientHandle::initialize(&config.genai);
        let generation = GenerationConfig::from(&config.genai.generation);

        Self::from_state(AppState::new(client, generation), config.server.resolve_listen_address())
    }

    /// Build the server around prepared state
    pub fn from_state(state: AppState, listen_address: SocketAddr) -> Self {
        Self {
            router: router(state),
            listen_address,
        }
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Override the listen address
    #[must_use]
    pub fn with_listen_address(mut self, listen_address: SocketAddr) -> Self {
        self.listen_address = listen_address;
        self
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
