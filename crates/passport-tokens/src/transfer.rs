use passport_abi::encode_function_call;
use passport_core::TransactionRequest;
use serde_json::json;

use crate::Result;

/// The kind of asset being transferred, with its per-standard parameters.
///
/// Amounts and token ids are decimal strings, addresses 0x-prefixed hex, all
/// passed through to the ABI coercion layer which validates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferKind {
    /// `transfer(address,uint256)` on an ERC-20 contract.
    Erc20 {
        /// Recipient address.
        to: String,
        /// Amount in base units.
        amount: String,
    },
    /// `safeTransferFrom(address,address,uint256)` on an ERC-721 contract.
    Erc721 {
        /// Current owner.
        from: String,
        /// Recipient address.
        to: String,
        /// Token id.
        token_id: String,
    },
    /// `safeTransferFrom(address,address,uint256,uint256,bytes)` on an
    /// ERC-1155 contract.
    Erc1155 {
        /// Current owner.
        from: String,
        /// Recipient address.
        to: String,
        /// Token id.
        token_id: String,
        /// Amount of that token id.
        amount: String,
    },
}

/// Builds the transaction request for a token transfer.
///
/// The result carries only `to` and `data`; the caller sets `from` before
/// handing it to `eth_sendTransaction`.
pub fn build_transfer_call(contract_address: &str, kind: &TransferKind) -> Result<TransactionRequest> {
    let data = match kind {
        TransferKind::Erc20 { to, amount } => encode_function_call(
            "transfer(address,uint256)",
            &[json!(to), json!(amount)],
        )?,
        TransferKind::Erc721 { from, to, token_id } => encode_function_call(
            "safeTransferFrom(address,address,uint256)",
            &[json!(from), json!(to), json!(token_id)],
        )?,
        TransferKind::Erc1155 {
            from,
            to,
            token_id,
            amount,
        } => encode_function_call(
            "safeTransferFrom(address,address,uint256,uint256,bytes)",
            &[json!(from), json!(to), json!(token_id), json!(amount), json!("0x")],
        )?,
    };
    Ok(TransactionRequest::call(contract_address, data))
}
