use thiserror::Error;

/// Token-related errors.
#[derive(Error, Debug)]
pub enum TokenError {
    /// HTTP request error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The API answered with a non-success status.
    #[error("{endpoint} failed: {status}")]
    Api {
        /// Which API failed.
        endpoint: &'static str,
        /// HTTP status code.
        status: u16,
    },

    /// A user or contract address was required but empty.
    #[error("User address is required")]
    MissingAddress,

    /// An address did not parse.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// A hex quantity did not parse.
    #[error("Invalid hex quantity: {0}")]
    InvalidQuantity(String),

    /// The provider call failed.
    #[error(transparent)]
    Provider(#[from] passport_provider::ProviderError),

    /// Transfer calldata construction failed.
    #[error(transparent)]
    Abi(#[from] passport_abi::Error),
}
