//! Shared CLI state.

use serde_json::Value;
use tokio::sync::watch;

use passport_core::{Network, UserProfile, DEFAULT_TRANSACTION_TO, DEFAULT_TRANSACTION_VALUE};
use passport_provider::PassportProvider;
use passport_session::PassportSession;
use passport_tokens::TokenClient;

/// Raw and decoded session tokens, replaced wholesale on login and refresh.
#[derive(Debug, Clone, Default)]
pub struct TokenState {
    pub id_token: Option<String>,
    pub access_token: Option<String>,
    pub decoded_id_token: Option<Value>,
    pub decoded_access_token: Option<Value>,
}

/// The transaction form plus the outcome of the last send.
#[derive(Debug, Clone)]
pub struct TransactionState {
    pub to: String,
    pub value: String,
    pub data: String,
    pub hash: Option<String>,
    pub error: Option<String>,
    pub sending: bool,
}

impl Default for TransactionState {
    fn default() -> Self {
        Self {
            to: DEFAULT_TRANSACTION_TO.to_string(),
            value: DEFAULT_TRANSACTION_VALUE.to_string(),
            data: String::new(),
            hash: None,
            error: None,
            sending: false,
        }
    }
}

/// Everything the menu handlers share.
///
/// The `watch` senders hold the reactive pieces; each handler overwrites the
/// whole value rather than patching fields.
pub struct App {
    pub network: Network,
    pub session: PassportSession,
    pub provider: PassportProvider,
    pub tokens: TokenClient,
    pub profile: watch::Sender<Option<UserProfile>>,
    pub token_state: watch::Sender<TokenState>,
    pub tx_state: watch::Sender<TransactionState>,
    pub address: watch::Sender<Option<String>>,
}

impl App {
    /// The connected wallet address, when one is known.
    pub fn current_address(&self) -> Option<String> {
        self.address.borrow().clone()
    }

    /// Resets the per-login state after a logout.
    pub fn clear_login_state(&self) {
        self.profile.send_replace(None);
        self.token_state.send_replace(TokenState::default());
        self.address.send_replace(None);
    }
}
