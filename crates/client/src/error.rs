//! Client-side error taxonomy.

use thiserror::Error;

/// Errors surfaced by resource clients.
///
/// No retry or backoff happens here; recovery is manual (the user
/// re-triggers the action).
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Server rejected the request: {0}")]
    Rejected(String),

    #[error("Response envelope is missing its data payload")]
    MissingData,

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}
