use std::time::{Duration, Instant};

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::RwLock;

use passport_core::UserProfile;

use crate::config::{AUDIENCE, SCOPE};
use crate::{decode_jwt_payload, Result, SessionConfig, SessionError};

const DEVICE_CODE_GRANT: &str = "urn:ietf:params:oauth:grant-type:device_code";

/// Tokens issued for the session.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenSet {
    /// Bearer token for API and RPC calls.
    pub access_token: String,
    /// OIDC identity token.
    #[serde(default)]
    pub id_token: Option<String>,
    /// Token used to obtain fresh access tokens.
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Lifetime of the access token in seconds.
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// Response to a device authorization request.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceCodeResponse {
    /// Code the wallet polls the token endpoint with.
    pub device_code: String,
    /// Short code the user enters in the browser.
    pub user_code: String,
    /// Page where the user enters the code.
    pub verification_uri: String,
    /// Verification page with the code pre-filled.
    #[serde(default)]
    pub verification_uri_complete: Option<String>,
    /// Seconds until the device code expires.
    pub expires_in: u64,
    /// Polling interval in seconds.
    #[serde(default = "default_interval")]
    pub interval: u64,
}

fn default_interval() -> u64 {
    5
}

#[derive(Debug, Deserialize)]
struct OAuthErrorBody {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LinkedAddressesResponse {
    #[serde(default)]
    linked_addresses: Vec<String>,
}

/// A Passport login session.
///
/// Holds the current [`TokenSet`] behind a lock; every login or refresh
/// replaces it wholesale.
pub struct PassportSession {
    config: SessionConfig,
    client: Client,
    tokens: RwLock<Option<TokenSet>>,
}

impl PassportSession {
    /// Creates a session client for the given configuration.
    pub fn new(config: SessionConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(format!("passport-wallet/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            config,
            client,
            tokens: RwLock::new(None),
        })
    }

    /// Returns the configuration the session was built with.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Starts a device-authorization login.
    pub async fn begin_device_login(&self) -> Result<DeviceCodeResponse> {
        let url = format!("{}/oauth/device/code", self.config.authority);
        let response = self
            .client
            .post(&url)
            .form(&[
                ("client_id", self.config.client_id.as_str()),
                ("scope", SCOPE),
                ("audience", AUDIENCE),
            ])
            .send()
            .await?;
        Ok(response.error_for_status()?.json().await?)
    }

    /// Polls the token endpoint until the user approves (or the device code
    /// expires), then stores and returns the token set.
    pub async fn poll_device_login(&self, device: &DeviceCodeResponse) -> Result<TokenSet> {
        let deadline = Instant::now() + Duration::from_secs(device.expires_in);
        let mut interval = device.interval;

        loop {
            tokio::time::sleep(Duration::from_secs(interval)).await;
            if Instant::now() >= deadline {
                return Err(SessionError::DeviceFlowExpired);
            }

            let url = format!("{}/oauth/token", self.config.authority);
            let response = self
                .client
                .post(&url)
                .form(&[
                    ("grant_type", DEVICE_CODE_GRANT),
                    ("device_code", device.device_code.as_str()),
                    ("client_id", self.config.client_id.as_str()),
                ])
                .send()
                .await?;

            if response.status().is_success() {
                let tokens: TokenSet = response.json().await?;
                *self.tokens.write().await = Some(tokens.clone());
                tracing::info!("passport login complete");
                return Ok(tokens);
            }

            let body: OAuthErrorBody = response.json().await?;
            match body.error.as_str() {
                "authorization_pending" => continue,
                "slow_down" => interval += 5,
                "expired_token" => return Err(SessionError::DeviceFlowExpired),
                _ => {
                    return Err(SessionError::Auth {
                        error: body.error,
                        description: body.error_description,
                    })
                }
            }
        }
    }

    /// Exchanges the refresh token for a fresh token set.
    pub async fn refresh(&self) -> Result<TokenSet> {
        let refresh_token = {
            let tokens = self.tokens.read().await;
            tokens
                .as_ref()
                .and_then(|t| t.refresh_token.clone())
                .ok_or_else(SessionError::not_logged_in)?
        };

        let url = format!("{}/oauth/token", self.config.authority);
        let response = self
            .client
            .post(&url)
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token.as_str()),
                ("client_id", self.config.client_id.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let body: OAuthErrorBody = response.json().await?;
            return Err(SessionError::Auth {
                error: body.error,
                description: body.error_description,
            });
        }

        let mut tokens: TokenSet = response.json().await?;
        // Auth0-style servers omit the refresh token on rotation-less grants
        if tokens.refresh_token.is_none() {
            tokens.refresh_token = Some(refresh_token);
        }
        *self.tokens.write().await = Some(tokens.clone());
        Ok(tokens)
    }

    /// Ends the session. The logout endpoint is best-effort; local state is
    /// always cleared.
    pub async fn logout(&self) {
        *self.tokens.write().await = None;

        let mut url = format!(
            "{}/v2/logout?client_id={}",
            self.config.authority, self.config.client_id
        );
        if let Some(return_to) = &self.config.logout_redirect_uri {
            url.push_str("&returnTo=");
            url.push_str(return_to);
        }
        if let Err(error) = self.client.get(&url).send().await {
            tracing::warn!(%error, "logout endpoint call failed");
        }
    }

    /// Whether a token set is currently held.
    pub async fn is_logged_in(&self) -> bool {
        self.tokens.read().await.is_some()
    }

    /// The raw access token.
    pub async fn access_token(&self) -> Result<String> {
        let tokens = self.tokens.read().await;
        tokens
            .as_ref()
            .map(|t| t.access_token.clone())
            .ok_or_else(SessionError::not_logged_in)
    }

    /// The raw ID token.
    pub async fn id_token(&self) -> Result<String> {
        let tokens = self.tokens.read().await;
        tokens
            .as_ref()
            .and_then(|t| t.id_token.clone())
            .ok_or_else(SessionError::not_logged_in)
    }

    /// The decoded access token claims.
    pub async fn decoded_access_token(&self) -> Result<Value> {
        decode_jwt_payload(&self.access_token().await?)
    }

    /// The decoded ID token claims.
    pub async fn decoded_id_token(&self) -> Result<Value> {
        decode_jwt_payload(&self.id_token().await?)
    }

    /// Fetches the user's profile from the userinfo endpoint.
    pub async fn user_info(&self) -> Result<UserProfile> {
        let token = self.access_token().await?;
        let url = format!("{}/userinfo", self.config.authority);
        let response = self.client.get(&url).bearer_auth(token).send().await?;
        Ok(response.error_for_status()?.json().await?)
    }

    /// Fetches the external addresses linked to the Passport account.
    pub async fn linked_addresses(&self) -> Result<Vec<String>> {
        let token = self.access_token().await?;
        let url = format!(
            "{}/passport-profile/v1/linked-addresses",
            self.config.api_base_url
        );
        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .header(
                "x-immutable-publishable-key",
                &self.config.publishable_key,
            )
            .send()
            .await?;
        let body: LinkedAddressesResponse = response.error_for_status()?.json().await?;
        Ok(body.linked_addresses)
    }
}
