use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Errors never cross an aggregator boundary: both feeds catch them and
/// degrade to their fallback payloads instead.
#[derive(Debug, Error)]
pub enum FeedError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed or joined.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The provider returned a body that could not be decoded.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// The provider returned an unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The data received from the provider was in an unexpected shape.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),
}
