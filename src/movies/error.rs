//! Errors produced while talking to the movie endpoint.

use thiserror::Error;

/// Message shown when a fetch fails and the retry loop takes over.
pub const FETCH_FAILED_MESSAGE: &str = "Something went wrong ...Retrying";

#[derive(Debug, Error)]
pub enum MovieError {
    /// Endpoint answered with a non-success status.
    #[error("Endpoint returned HTTP {status}")]
    Status { status: u16 },

    /// Request never produced a response.
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Response body was not the JSON shape the source style expects.
    #[error("Malformed response: {0}")]
    Decode(String),

    /// Create succeeded but the response did not carry a generated key.
    #[error("Create response did not include a generated key")]
    MissingKey,

    /// Endpoint could not be turned into a record URL.
    #[error("Invalid endpoint URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// Write attempted against a read-only endpoint.
    #[error("Endpoint does not accept {operation} requests")]
    Unsupported { operation: &'static str },
}

impl MovieError {
    /// Text for the error branch of the view when a fetch fails.
    pub fn fetch_message(&self) -> String {
        FETCH_FAILED_MESSAGE.to_string()
    }

    pub fn add_message(&self) -> String {
        format!("Failed to add movie: {}", self)
    }

    pub fn delete_message(&self) -> String {
        format!("Failed to delete movie: {}", self)
    }
}
