use thiserror::Error;

/// Errors raised by the generative-AI client
#[derive(Debug, Error)]
pub enum GenAiError {
    /// The service rejected an input value (bad URI, unknown model, bad argument)
    #[error("{0}")]
    InvalidInput(String),

    /// Transport failure or any other non-input error from the service
    #[error("{0}")]
    Upstream(String),

    /// The client could not be constructed from configuration
    #[error("{0}")]
    Config(String),
}

