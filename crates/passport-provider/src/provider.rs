use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use tokio::sync::RwLock;
use url::Url;

use passport_core::{messages, TransactionRequest};

use crate::jsonrpc::RpcClient;
use crate::{ProviderError, Result};

/// Configuration for the provider endpoints.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Primary RPC URL
    pub url: String,
    /// Fallback URLs
    pub fallback_urls: Vec<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ProviderConfig {
    /// Creates a new provider configuration with the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            fallback_urls: Vec::new(),
            timeout_secs: 30,
        }
    }

    /// Adds a fallback URL.
    pub fn with_fallback(mut self, url: impl Into<String>) -> Self {
        self.fallback_urls.push(url.into());
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.url).map_err(|e| ProviderError::InvalidUrl(e.to_string()))?;
        for url in &self.fallback_urls {
            Url::parse(url).map_err(|e| ProviderError::InvalidUrl(e.to_string()))?;
        }
        Ok(())
    }

    /// Returns all URLs (primary + fallbacks).
    pub fn all_urls(&self) -> Vec<&str> {
        let mut urls = vec![self.url.as_str()];
        urls.extend(self.fallback_urls.iter().map(|s| s.as_str()));
        urls
    }
}

/// EIP-1193-style provider bound to the Passport session.
///
/// Read methods work without authentication; the signing methods
/// ([`send_transaction`](Self::send_transaction),
/// [`sign_typed_data`](Self::sign_typed_data),
/// [`personal_sign`](Self::personal_sign),
/// [`request_accounts`](Self::request_accounts)) require the session's access
/// token to have been attached via [`set_access_token`](Self::set_access_token).
pub struct PassportProvider {
    config: ProviderConfig,
    client: RpcClient,
    access_token: RwLock<Option<String>>,
}

impl PassportProvider {
    /// Creates a provider for the configured endpoints.
    pub fn new(config: ProviderConfig) -> Result<Self> {
        config.validate()?;
        let client = RpcClient::new(config.timeout_secs)?;
        Ok(Self {
            config,
            client,
            access_token: RwLock::new(None),
        })
    }

    /// Attaches the session access token used for signing methods.
    pub async fn set_access_token(&self, token: impl Into<String>) {
        *self.access_token.write().await = Some(token.into());
    }

    /// Drops the session access token.
    pub async fn clear_access_token(&self) {
        *self.access_token.write().await = None;
    }

    /// Sends `method` to the primary endpoint, failing over to each fallback
    /// on transport errors. RPC-level errors are returned immediately.
    pub async fn request<P, R>(&self, method: &str, params: P) -> Result<R>
    where
        P: Serialize + Clone,
        R: DeserializeOwned,
    {
        let bearer = self.access_token.read().await.clone();
        let mut last_error = None;
        for url in self.config.all_urls() {
            match self
                .client
                .rpc_call(url, method, params.clone(), bearer.as_deref())
                .await
            {
                Ok(result) => return Ok(result),
                Err(error @ ProviderError::Rpc { .. }) => return Err(error),
                Err(error) => {
                    tracing::warn!(%url, %method, %error, "endpoint failed, trying next");
                    last_error = Some(error);
                }
            }
        }
        Err(ProviderError::AllEndpointsFailed(
            last_error.map(|e| e.to_string()).unwrap_or_default(),
        ))
    }

    async fn require_auth(&self) -> Result<()> {
        if self.access_token.read().await.is_none() {
            return Err(ProviderError::Unauthorized(
                messages::UNAUTHORIZED.to_string(),
            ));
        }
        Ok(())
    }

    /// `eth_getBalance` at the latest block; hex wei.
    pub async fn get_balance(&self, address: &str) -> Result<String> {
        self.request("eth_getBalance", json!([address, "latest"]))
            .await
    }

    /// `eth_getStorageAt` at the latest block.
    pub async fn get_storage_at(&self, address: &str, position: &str) -> Result<String> {
        self.request("eth_getStorageAt", json!([address, position, "latest"]))
            .await
    }

    /// `eth_estimateGas`; hex gas amount.
    pub async fn estimate_gas(&self, tx: &TransactionRequest) -> Result<String> {
        self.request("eth_estimateGas", json!([tx])).await
    }

    /// `eth_call` at the latest block; hex return data.
    pub async fn call(&self, tx: &TransactionRequest) -> Result<String> {
        self.request("eth_call", json!([tx, "latest"])).await
    }

    /// `eth_getTransactionReceipt`; `None` while pending.
    pub async fn get_transaction_receipt(&self, tx_hash: &str) -> Result<Option<Value>> {
        self.request("eth_getTransactionReceipt", json!([tx_hash]))
            .await
    }

    /// `eth_getTransactionCount` at the latest block; hex nonce.
    pub async fn get_transaction_count(&self, address: &str) -> Result<String> {
        self.request("eth_getTransactionCount", json!([address, "latest"]))
            .await
    }

    /// `eth_getCode` at the latest block.
    pub async fn get_code(&self, address: &str) -> Result<String> {
        self.request("eth_getCode", json!([address, "latest"])).await
    }

    /// `eth_getBlockByHash` without transaction bodies.
    pub async fn get_block_by_hash(&self, block_hash: &str) -> Result<Option<Value>> {
        self.request("eth_getBlockByHash", json!([block_hash, false]))
            .await
    }

    /// `eth_getBlockByNumber` without transaction bodies. `block_number` is a
    /// named tag or 0x-prefixed hex (see [`passport_core::block_parameter`]).
    pub async fn get_block_by_number(&self, block_number: &str) -> Result<Option<Value>> {
        self.request("eth_getBlockByNumber", json!([block_number, false]))
            .await
    }

    /// `eth_getTransactionByHash`.
    pub async fn get_transaction_by_hash(&self, tx_hash: &str) -> Result<Option<Value>> {
        self.request("eth_getTransactionByHash", json!([tx_hash]))
            .await
    }

    /// `eth_sendTransaction` through the session signer; transaction hash.
    pub async fn send_transaction(&self, tx: &TransactionRequest) -> Result<String> {
        self.require_auth().await?;
        self.request("eth_sendTransaction", json!([tx])).await
    }

    /// `eth_signTypedData_v4` (EIP-712). The typed data is serialized to a
    /// JSON string parameter, as the provider interface expects.
    pub async fn sign_typed_data(&self, address: &str, typed_data: &Value) -> Result<String> {
        self.require_auth().await?;
        let serialized = serde_json::to_string(typed_data)?;
        self.request("eth_signTypedData_v4", json!([address, serialized]))
            .await
    }

    /// `personal_sign`; note the message-first parameter order.
    pub async fn personal_sign(&self, address: &str, message: &str) -> Result<String> {
        self.require_auth().await?;
        self.request("personal_sign", json!([message, address])).await
    }

    /// `eth_requestAccounts`; prompts the session for wallet access.
    pub async fn request_accounts(&self) -> Result<Vec<String>> {
        self.require_auth().await?;
        self.request("eth_requestAccounts", json!([])).await
    }

    /// `eth_accounts`.
    pub async fn get_accounts(&self) -> Result<Vec<String>> {
        self.request("eth_accounts", json!([])).await
    }

    /// `eth_chainId`; hex chain id.
    pub async fn get_chain_id(&self) -> Result<String> {
        self.request("eth_chainId", json!([])).await
    }

    /// `eth_blockNumber`; hex block number.
    pub async fn get_block_number(&self) -> Result<String> {
        self.request("eth_blockNumber", json!([])).await
    }

    /// `eth_gasPrice`; hex wei.
    pub async fn get_gas_price(&self) -> Result<String> {
        self.request("eth_gasPrice", json!([])).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider_for(server: &MockServer) -> PassportProvider {
        PassportProvider::new(ProviderConfig::new(server.uri()).with_timeout(5)).unwrap()
    }

    #[tokio::test]
    async fn test_get_balance_params() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "method": "eth_getBalance",
                "params": ["0xacbe301e5b46f4dd532b74e209adac0c06d42f8c", "latest"]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0", "id": 1, "result": "0x38d7ea4c68000"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        let balance = provider
            .get_balance("0xacbe301e5b46f4dd532b74e209adac0c06d42f8c")
            .await
            .unwrap();
        assert_eq!(balance, "0x38d7ea4c68000");
    }

    #[tokio::test]
    async fn test_send_transaction_requires_token() {
        let server = MockServer::start().await;
        let provider = provider_for(&server);
        let tx = TransactionRequest {
            to: Some("0xacbe301e5b46f4dd532b74e209adac0c06d42f8c".to_string()),
            value: Some("0x38d7ea4c68000".to_string()),
            ..Default::default()
        };
        let err = provider.send_transaction(&tx).await.unwrap_err();
        assert!(matches!(err, ProviderError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_send_transaction_attaches_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("authorization", "Bearer token-123"))
            .and(body_partial_json(json!({ "method": "eth_sendTransaction" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0", "id": 1, "result": "0xhash"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        provider.set_access_token("token-123").await;
        let tx = TransactionRequest::call("0x1", "0x");
        assert_eq!(provider.send_transaction(&tx).await.unwrap(), "0xhash");
    }

    #[tokio::test]
    async fn test_sign_typed_data_serializes_payload() {
        let server = MockServer::start().await;
        let typed = json!({ "domain": { "chainId": 13473 }, "primaryType": "Order" });
        let expected = serde_json::to_string(&typed).unwrap();
        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "method": "eth_signTypedData_v4",
                "params": ["0xabc", expected]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0", "id": 1, "result": "0xsig"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        provider.set_access_token("t").await;
        let sig = provider.sign_typed_data("0xabc", &typed).await.unwrap();
        assert_eq!(sig, "0xsig");
    }

    #[tokio::test]
    async fn test_failover_on_transport_error() {
        let bad = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&bad)
            .await;
        let good = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0", "id": 1, "result": "0x34a1"
            })))
            .mount(&good)
            .await;

        let config = ProviderConfig::new(bad.uri())
            .with_fallback(good.uri())
            .with_timeout(5);
        let provider = PassportProvider::new(config).unwrap();
        assert_eq!(provider.get_block_number().await.unwrap(), "0x34a1");
    }

    #[tokio::test]
    async fn test_rpc_error_is_not_retried() {
        let first = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0", "id": 1,
                "error": { "code": -32000, "message": "execution reverted" }
            })))
            .expect(1)
            .mount(&first)
            .await;
        let second = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0", "id": 1, "result": "0x0"
            })))
            .expect(0)
            .mount(&second)
            .await;

        let config = ProviderConfig::new(first.uri())
            .with_fallback(second.uri())
            .with_timeout(5);
        let provider = PassportProvider::new(config).unwrap();
        let err = provider
            .call(&TransactionRequest::call("0x1", "0x"))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Rpc { code: -32000, .. }));
    }

    #[test]
    fn test_config_validation() {
        assert!(ProviderConfig::new("not a url").validate().is_err());
        assert!(ProviderConfig::new("https://rpc.testnet.immutable.com")
            .with_fallback("https://rpc.immutable.com")
            .validate()
            .is_ok());
    }
}
