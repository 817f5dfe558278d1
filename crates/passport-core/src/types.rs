use serde::{Deserialize, Serialize};

/// Profile of the logged-in Passport user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Email address, when the `email` scope was granted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// OIDC subject identifier.
    pub sub: String,
}

/// An `eth_sendTransaction` / `eth_call` parameter object.
///
/// All fields are 0x-prefixed hex strings; absent fields are omitted from the
/// serialized request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRequest {
    /// Sender address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Destination address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// Gas limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas: Option<String>,
    /// Gas price in wei.
    #[serde(rename = "gasPrice", skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<String>,
    /// Value in wei.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Call data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// Nonce.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
}

impl TransactionRequest {
    /// A call with only `to` and `data` set, as used for read-only contract
    /// queries.
    pub fn call(to: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            to: Some(to.into()),
            data: Some(data.into()),
            ..Default::default()
        }
    }
}

/// A single NFT owned by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Token id within the collection.
    pub token_id: String,
    /// Collection contract address.
    pub contract_address: String,
    /// ERC-721 or ERC-1155.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_type: Option<String>,
    /// Owned balance as a decimal string.
    pub balance: String,
    /// Owned quantity as a decimal string (ERC-1155).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description from metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Image URL from metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Metadata attributes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeEntry>,
    /// Owning account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_address: Option<String>,
    /// Last indexer update timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// One trait/value pair from NFT metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeEntry {
    /// Trait name.
    pub trait_type: String,
    /// Trait value.
    pub value: String,
}

/// A group of NFTs sharing a contract address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    /// Collection contract address.
    pub contract_address: String,
    /// Display name.
    pub name: String,
    /// Number of owned assets in the collection.
    pub asset_count: u64,
    /// ERC-721 or ERC-1155.
    pub contract_type: String,
}

/// An ERC-20 holding shaped for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Erc20Token {
    /// Token contract address.
    pub contract_address: String,
    /// Token name.
    pub name: String,
    /// Token symbol.
    pub symbol: String,
    /// Token decimals.
    pub decimals: u8,
    /// Raw balance in base units, decimal string.
    pub balance: String,
    /// Balance scaled by decimals, six fractional digits.
    pub formatted_balance: String,
    /// Icon URL, when the explorer knows one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// Token name/symbol/decimals read from the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Token name.
    pub name: String,
    /// Token symbol.
    pub symbol: String,
    /// Token decimals.
    pub decimals: u8,
}

/// Token descriptor nested in an explorer token listing item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerTokenInfo {
    /// Token contract address.
    pub address_hash: String,
    /// Token name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Token symbol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Decimals as a decimal string; may be absent or malformed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimals: Option<String>,
    /// "ERC-20", "ERC-721" or "ERC-1155".
    #[serde(rename = "type")]
    pub token_type: String,
    /// Icon URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// One item from the explorer address token listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerTokenItem {
    /// The token descriptor.
    pub token: ExplorerTokenInfo,
    /// Held amount in base units, decimal string.
    pub value: String,
    /// Token id for NFT rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_id: Option<String>,
}

/// Explorer `/api/v2/addresses/{address}/tokens` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExplorerApiResponse {
    /// Listed tokens.
    #[serde(default)]
    pub items: Vec<ExplorerTokenItem>,
}

/// One NFT row from the indexer accounts/owners endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftItem {
    /// Collection contract address.
    pub contract_address: String,
    /// ERC-721 or ERC-1155.
    pub contract_type: String,
    /// Token id.
    pub token_id: String,
    /// Owning account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_address: Option<String>,
    /// Owned quantity, decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    /// Owned balance, decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<String>,
    /// Last indexer update timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// NFT indexer listing response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NftOwnerResponse {
    /// Listed NFTs.
    #[serde(default)]
    pub result: Vec<NftItem>,
}

/// A transaction as it appears inside a block body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockTransaction {
    /// Transaction hash.
    pub hash: String,
    /// Sender.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Destination; absent for contract creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// Value in wei, hex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Gas limit, hex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas: Option<String>,
}

/// Block transaction list: hashes only, or full objects when the block was
/// requested with bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockTransactions {
    /// Hash-only form.
    Hashes(Vec<String>),
    /// Full transaction objects.
    Full(Vec<BlockTransaction>),
}
