//! # Passport Tokens
//!
//! Balance and collection helpers for the Passport demo wallet. ERC-20
//! holdings come from the block-explorer token listing with a raw-RPC
//! fallback over a short list of well-known tokens; NFTs come from the
//! Immutable indexer with a secondary owners endpoint as fallback. Raw
//! replies are reshaped for display: decimals fall back to 18, balances are
//! formatted to six decimal places, and NFTs are grouped into collections by
//! contract address.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
pub use error::TokenError;
mod format;
pub use format::{format_units, parse_decimals, parse_hex_quantity};
mod decode;
pub use decode::{decode_decimals_return, decode_string_return};
mod client;
pub use client::TokenClient;
mod erc20;
pub use erc20::{
    check_custom_token, check_token_balance, fetch_token_metadata, fetch_user_tokens,
    filter_erc20, sort_by_formatted_balance, to_erc20_token, KnownToken, KNOWN_TOKENS,
};
mod nft;
pub use nft::{fetch_collection_assets, fetch_user_collections, group_collections};
mod transfer;
pub use transfer::{build_transfer_call, TransferKind};

/// Result type for token operations.
pub type Result<T> = std::result::Result<T, TokenError>;
