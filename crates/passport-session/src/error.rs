use thiserror::Error;

/// Session-related errors.
#[derive(Error, Debug)]
pub enum SessionError {
    /// A required environment variable was not set.
    #[error("Missing environment variable: {0}")]
    MissingEnv(String),

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The authorization server rejected the request.
    #[error("Authorization failed: {error}{}", .description.as_deref().map(|d| format!(" ({d})")).unwrap_or_default())]
    Auth {
        /// OAuth error code.
        error: String,
        /// Optional human-readable detail.
        description: Option<String>,
    },

    /// The device authorization expired before the user approved it.
    #[error("Device authorization expired before approval")]
    DeviceFlowExpired,

    /// An action was attempted without a logged-in session.
    #[error("{0}")]
    NotLoggedIn(String),

    /// A JWT could not be decoded.
    #[error("Malformed token: {0}")]
    MalformedToken(String),
}

impl SessionError {
    /// The canonical not-logged-in error.
    pub fn not_logged_in() -> Self {
        SessionError::NotLoggedIn(passport_core::messages::NOT_LOGGED_IN.to_string())
    }
}
