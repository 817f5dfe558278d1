use std::env;

use passport_core::{network_config, Network};

use crate::{Result, SessionError};

/// OAuth audience requested for Passport tokens.
pub const AUDIENCE: &str = "platform_api";
/// OAuth scopes requested at login.
pub const SCOPE: &str = "openid offline_access email transact";

const DEFAULT_AUTHORITY: &str = "https://auth.immutable.com";

/// Passport client configuration, normally read from the environment.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Target network (production maps to mainnet, sandbox to testnet).
    pub network: Network,
    /// OAuth client id.
    pub client_id: String,
    /// Publishable API key sent with Immutable API requests.
    pub publishable_key: String,
    /// Redirect URI registered for the client.
    pub redirect_uri: Option<String>,
    /// Post-logout redirect URI.
    pub logout_redirect_uri: Option<String>,
    /// Base URL of the authorization server.
    pub authority: String,
    /// Base URL of the Immutable REST API (linked addresses).
    pub api_base_url: String,
}

impl SessionConfig {
    /// Builds a configuration from `PASSPORT_*` environment variables.
    ///
    /// `PASSPORT_CLIENT_ID` and `PASSPORT_PUBLISHABLE_KEY` are required;
    /// `PASSPORT_ENVIRONMENT` defaults to sandbox (testnet).
    pub fn from_env() -> Result<Self> {
        let network = match env::var("PASSPORT_ENVIRONMENT") {
            Ok(value) if value.eq_ignore_ascii_case("production") => Network::Mainnet,
            _ => Network::Testnet,
        };
        let client_id = required_env("PASSPORT_CLIENT_ID")?;
        let publishable_key = required_env("PASSPORT_PUBLISHABLE_KEY")?;

        Ok(Self {
            network,
            client_id,
            publishable_key,
            redirect_uri: env::var("PASSPORT_REDIRECT_URI").ok(),
            logout_redirect_uri: env::var("PASSPORT_LOGOUT_URI").ok(),
            authority: DEFAULT_AUTHORITY.to_string(),
            api_base_url: network_config(network).api_base_url.to_string(),
        })
    }

    /// Builds a configuration with explicit values, defaulting the endpoints
    /// from the network table.
    pub fn new(
        network: Network,
        client_id: impl Into<String>,
        publishable_key: impl Into<String>,
    ) -> Self {
        Self {
            network,
            client_id: client_id.into(),
            publishable_key: publishable_key.into(),
            redirect_uri: None,
            logout_redirect_uri: None,
            authority: DEFAULT_AUTHORITY.to_string(),
            api_base_url: network_config(network).api_base_url.to_string(),
        }
    }

    /// Overrides the authorization server base URL.
    pub fn with_authority(mut self, authority: impl Into<String>) -> Self {
        self.authority = authority.into();
        self
    }

    /// Overrides the Immutable API base URL.
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

fn required_env(name: &str) -> Result<String> {
    env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| SessionError::MissingEnv(name.to_string()))
}
