#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Typed HTTP client for the tubesum backend
//!
//! Provides the request/response types of the summarize API and the
//! form-submission flow used by the command-line front end

mod client;
pub mod error;
pub mod form;
pub mod types;

pub use client::{DEFAULT_BACKEND_URL, REQUEST_TIMEOUT, SummarizerClient};
pub use error::{Result, TubesumClientError};
pub use form::{Outcome, submit};
pub use types::*;
