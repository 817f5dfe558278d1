use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{ProviderError, Result};

/// RPC request payload.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcRequest<T: Serialize> {
    /// JSON-RPC version
    pub jsonrpc: &'static str,
    /// Method name
    pub method: String,
    /// Parameters
    pub params: T,
    /// Request ID
    pub id: u64,
}

impl<T: Serialize> JsonRpcRequest<T> {
    /// Creates a new JSON-RPC request.
    pub fn new(method: impl Into<String>, params: T, id: u64) -> Self {
        Self {
            jsonrpc: "2.0",
            method: method.into(),
            params,
            id,
        }
    }
}

/// RPC response payload.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcResponse<T> {
    /// JSON-RPC version
    pub jsonrpc: String,
    /// Response ID
    pub id: u64,
    /// Result (if successful)
    pub result: Option<T>,
    /// Error (if failed)
    pub error: Option<JsonRpcError>,
}

/// RPC error object.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcError {
    /// Error code
    pub code: i64,
    /// Error message
    pub message: String,
    /// Additional data
    pub data: Option<serde_json::Value>,
}

/// HTTP client with connection reuse for JSON-RPC calls.
pub struct RpcClient {
    client: Client,
    request_id: AtomicU64,
}

impl RpcClient {
    /// Creates a new RPC client with the given request timeout.
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(format!("passport-wallet/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ProviderError::Http)?;

        Ok(Self {
            client,
            request_id: AtomicU64::new(1),
        })
    }

    /// Makes a JSON-RPC request, optionally with a bearer token.
    pub async fn rpc_call<P, R>(
        &self,
        url: &str,
        method: &str,
        params: P,
        bearer: Option<&str>,
    ) -> Result<R>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let id = self.request_id.fetch_add(1, Ordering::SeqCst);
        let request = JsonRpcRequest::new(method, params, id);

        let mut builder = self.client.post(url).json(&request);
        if let Some(token) = bearer {
            builder = builder.bearer_auth(token);
        }
        let response = builder.send().await?;
        let rpc_response: JsonRpcResponse<R> = response.json().await?;

        if let Some(error) = rpc_response.error {
            return Err(ProviderError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        rpc_response.result.ok_or(ProviderError::NoResult)
    }

    /// Returns the number of requests made.
    pub fn request_count(&self) -> u64 {
        self.request_id.load(Ordering::SeqCst) - 1
    }
}

impl std::fmt::Debug for RpcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcClient")
            .field("request_count", &self.request_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_rpc_call_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .and(body_partial_json(json!({
                "jsonrpc": "2.0",
                "method": "eth_blockNumber",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": "0x34a1"
            })))
            .mount(&server)
            .await;

        let client = RpcClient::new(5).unwrap();
        let result: String = client
            .rpc_call(&server.uri(), "eth_blockNumber", Value::Array(vec![]), None)
            .await
            .unwrap();
        assert_eq!(result, "0x34a1");
        assert_eq!(client.request_count(), 1);
    }

    #[tokio::test]
    async fn test_rpc_call_error_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "error": { "code": -32602, "message": "invalid params" }
            })))
            .mount(&server)
            .await;

        let client = RpcClient::new(5).unwrap();
        let result: Result<String> = client
            .rpc_call(&server.uri(), "eth_getBalance", json!(["bad"]), None)
            .await;
        match result {
            Err(ProviderError::Rpc { code, message }) => {
                assert_eq!(code, -32602);
                assert_eq!(message, "invalid params");
            }
            other => panic!("expected RPC error, got {other:?}"),
        }
    }
}
