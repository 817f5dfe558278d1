use thiserror::Error;

/// Provider-related errors.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP request error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// RPC error response
    #[error("RPC error: code={code}, message={message}")]
    Rpc {
        /// Error code
        code: i64,
        /// Error message
        message: String,
    },

    /// Response carried neither a result nor an error
    #[error("No result in response")]
    NoResult,

    /// Every configured endpoint failed
    #[error("All endpoints failed: {0}")]
    AllEndpointsFailed(String),

    /// A signing method was invoked without a session token
    #[error("{0}")]
    Unauthorized(String),
}
