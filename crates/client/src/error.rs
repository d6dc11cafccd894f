//! Error types for the probe client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while constructing the probe client.
///
/// Probe outcomes (HTTP error statuses, per-attempt transport failures) are
/// NOT errors: they are classified results recorded on the attempt itself so
/// the campaign can keep going. Only client construction can fail.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP client construction error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// API key was not provided.
    #[error("API key is required")]
    MissingApiKey,
}
