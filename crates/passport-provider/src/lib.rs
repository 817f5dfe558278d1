//! # Passport Provider
//!
//! The JSON-RPC side of the Passport demo wallet. Wraps a pooled HTTP client
//! around the zkEVM RPC endpoint, attaches the session's bearer token, fails
//! over to a fallback endpoint on transport errors, and exposes one wrapper
//! per supported `eth_*` method.
//!
//! ## Example
//!
//! ```ignore
//! use passport_provider::{PassportProvider, ProviderConfig};
//!
//! let provider = PassportProvider::new(ProviderConfig::new("https://rpc.testnet.immutable.com"))?;
//! let balance = provider.get_balance("0xacbe301e5b46f4dd532b74e209adac0c06d42f8c").await?;
//! println!("balance: {balance} wei (hex)");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
pub use error::ProviderError;
mod jsonrpc;
pub use jsonrpc::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, RpcClient};
mod provider;
pub use provider::{PassportProvider, ProviderConfig};

/// Result type for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;
