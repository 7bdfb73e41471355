/// Client-specific result type
pub type Result<T> = std::result::Result<T, TubesumClientError>;

/// Errors from the tubesum client
#[derive(Debug, thiserror::Error)]
pub enum TubesumClientError {
    /// The backend could not be reached or did not answer in time
    #[error(
        "Could not connect to the summarization backend: {source}. Ensure the tubesum server is running at {base_url}."
    )]
    Connection {
        /// Configured backend address
        base_url: String,
        source: reqwest::Error,
    },

    /// Backend answered with a non-success status
    #[error("Error from backend (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message parsed from the body, or the raw body
        message: String,
    },

    /// Failed to parse a success response
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}
