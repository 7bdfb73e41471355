//! Types shared between the tubesum crates

mod error;

pub use error::{ErrorBody, ErrorDetails, HttpError};
