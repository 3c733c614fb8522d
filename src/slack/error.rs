//! Error types for Slack delivery.

use thiserror::Error;

/// Error type for HTTP operations.
///
/// Describes what went wrong at the transport level.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, TLS failures, connection
    /// refused, and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error raised while delivering a message.
///
/// Never escapes [`SlackPoster::post`](super::SlackPoster::post): it is
/// reported through the [`Reporter`](super::Reporter) and swallowed.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The HTTP request itself failed.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The request body could not be serialized.
    #[error("Failed to encode message body: {0}")]
    Encode(#[from] serde_json::Error),

    /// The token contains characters not allowed in a header value.
    #[error("API token is not a valid header value")]
    InvalidToken,
}
