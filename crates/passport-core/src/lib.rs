//! # Passport Core
//!
//! Shared building blocks for the Passport demo wallet: network
//! configuration for Immutable zkEVM (testnet and mainnet), the plain data
//! records exchanged with the explorer and NFT indexer APIs, and a couple of
//! display helpers used by the CLI.
//!
//! ## Example
//!
//! ```
//! use passport_core::{Network, network_config};
//!
//! let config = network_config(Network::Testnet);
//! assert_eq!(config.chain_id, 13473);
//! assert_eq!(config.chain_name, "imtbl-zkevm-testnet");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
pub use error::Error;
mod network;
pub use network::{network_config, Network, NetworkConfig, NETWORK_CONFIGS};
mod types;
pub use types::{
    Asset, AttributeEntry, BlockTransaction, BlockTransactions, Collection, Erc20Token,
    ExplorerApiResponse, ExplorerTokenInfo, ExplorerTokenItem, NftItem, NftOwnerResponse,
    TokenMetadata, TransactionRequest, UserProfile,
};
mod display;
pub use display::{block_parameter, format_transactions};

/// Canonical user-facing error messages.
pub mod messages {
    /// Raised when an action requires an authenticated session.
    pub const NOT_LOGGED_IN: &str = "User must be logged in to perform this action";
    /// Raised when the provider is used without a connected wallet.
    pub const UNAUTHORIZED: &str = "Unauthorized - Please connect your wallet first";
    /// Raised when a transaction form is missing its destination.
    pub const INVALID_PARAMS: &str = "Invalid parameters - \"to\" field is required";
    /// Generic transaction failure message.
    pub const TRANSACTION_FAILED: &str = "Transaction failed";
}

/// Destination pre-filled into the demo transaction form.
pub const DEFAULT_TRANSACTION_TO: &str = "0xacbe301e5b46f4dd532b74e209adac0c06d42f8c";
/// Value (in wei) pre-filled into the demo transaction form.
pub const DEFAULT_TRANSACTION_VALUE: &str = "1000000000000000";
