use alloy::primitives::{Address, U256};

use passport_core::{Erc20Token, ExplorerTokenItem, TokenMetadata, TransactionRequest};
use passport_provider::PassportProvider;

use crate::decode::{decode_decimals_return, decode_string_return};
use crate::format::{format_units, parse_decimals, parse_hex_quantity};
use crate::{Result, TokenClient, TokenError};

const SELECTOR_NAME: &str = "0x06fdde03";
const SELECTOR_SYMBOL: &str = "0x95d89b41";
const SELECTOR_DECIMALS: &str = "0x313ce567";
const SELECTOR_BALANCE_OF: &str = "0x70a08231";

/// A token checked by the raw-RPC fallback when the explorer is unavailable.
#[derive(Debug, Clone, Copy)]
pub struct KnownToken {
    /// Token contract address.
    pub address: &'static str,
    /// Token symbol.
    pub symbol: &'static str,
    /// Token name.
    pub name: &'static str,
    /// Token decimals.
    pub decimals: u8,
}

/// Well-known ERC-20 tokens on Immutable zkEVM.
pub const KNOWN_TOKENS: &[KnownToken] = &[
    KnownToken {
        address: "0x3B2F62d42DB19B30588648bf1c184865D4C3B1D6",
        symbol: "IMX",
        name: "Immutable X",
        decimals: 18,
    },
    KnownToken {
        address: "0x1CcCa691501174B4A623CeDA58cC8f1a76dc3439",
        symbol: "USDC",
        name: "USD Coin",
        decimals: 6,
    },
    KnownToken {
        address: "0xadc0e51476f6a483e65d2a379ebb0a4ac68852e9",
        symbol: "1R0R",
        name: "R0AR TOKEN",
        decimals: 18,
    },
];

/// Keeps only ERC-20 rows with a positive balance.
pub fn filter_erc20(items: &[ExplorerTokenItem]) -> Vec<ExplorerTokenItem> {
    items
        .iter()
        .filter(|item| {
            item.token.token_type == "ERC-20"
                && item
                    .value
                    .parse::<U256>()
                    .map(|v| v > U256::ZERO)
                    .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// Shapes an explorer row into an [`Erc20Token`] for display.
pub fn to_erc20_token(item: &ExplorerTokenItem) -> Erc20Token {
    let decimals = parse_decimals(item.token.decimals.as_deref());
    let raw = item.value.parse::<U256>().unwrap_or(U256::ZERO);
    Erc20Token {
        contract_address: item.token.address_hash.clone(),
        name: item
            .token
            .name
            .clone()
            .unwrap_or_else(|| "Unknown Token".to_string()),
        symbol: item
            .token
            .symbol
            .clone()
            .unwrap_or_else(|| "UNKNOWN".to_string()),
        decimals,
        balance: raw.to_string(),
        formatted_balance: format_units(raw, decimals),
        logo: item.token.icon_url.clone(),
    }
}

/// Sorts tokens by formatted balance, largest first.
pub fn sort_by_formatted_balance(tokens: &mut [Erc20Token]) {
    tokens.sort_by(|a, b| {
        let a_value = a.formatted_balance.parse::<f64>().unwrap_or(0.0);
        let b_value = b.formatted_balance.parse::<f64>().unwrap_or(0.0);
        b_value
            .partial_cmp(&a_value)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

fn balance_of_calldata(owner: Address) -> String {
    format!(
        "{SELECTOR_BALANCE_OF}{:0>64}",
        hex::encode(owner.as_slice())
    )
}

/// Reads `balanceOf(owner)` from the token contract; an empty reply is zero.
pub async fn check_token_balance(
    provider: &PassportProvider,
    token_address: &str,
    owner: &str,
) -> Result<U256> {
    let owner: Address = owner
        .parse()
        .map_err(|_| TokenError::InvalidAddress(owner.to_string()))?;
    let tx = TransactionRequest::call(token_address, balance_of_calldata(owner));
    let response = provider.call(&tx).await?;
    parse_hex_quantity(&response)
}

/// Reads name/symbol/decimals from the contract as an unordered concurrent
/// batch. Each call failing independently falls back to defaults.
pub async fn fetch_token_metadata(
    provider: &PassportProvider,
    contract_address: &str,
) -> TokenMetadata {
    let name_call = TransactionRequest::call(contract_address, SELECTOR_NAME);
    let symbol_call = TransactionRequest::call(contract_address, SELECTOR_SYMBOL);
    let decimals_call = TransactionRequest::call(contract_address, SELECTOR_DECIMALS);

    let (name, symbol, decimals) = tokio::join!(
        provider.call(&name_call),
        provider.call(&symbol_call),
        provider.call(&decimals_call),
    );

    TokenMetadata {
        name: decode_string_return(name.as_deref().ok())
            .unwrap_or_else(|| "Unknown Token".to_string()),
        symbol: decode_string_return(symbol.as_deref().ok())
            .unwrap_or_else(|| "UNKNOWN".to_string()),
        decimals: decode_decimals_return(decimals.as_deref().ok()),
    }
}

/// Looks up an arbitrary token address for the user; `None` when the balance
/// is zero.
pub async fn check_custom_token(
    provider: &PassportProvider,
    token_address: &str,
    owner: &str,
) -> Result<Option<Erc20Token>> {
    let balance = check_token_balance(provider, token_address, owner).await?;
    if balance.is_zero() {
        return Ok(None);
    }

    let metadata = fetch_token_metadata(provider, token_address).await;
    Ok(Some(Erc20Token {
        contract_address: token_address.to_string(),
        name: metadata.name,
        symbol: metadata.symbol,
        decimals: metadata.decimals,
        balance: balance.to_string(),
        formatted_balance: format_units(balance, metadata.decimals),
        logo: None,
    }))
}

/// Fetches the user's ERC-20 holdings from the explorer, falling back to
/// scanning [`KNOWN_TOKENS`] over RPC when the explorer is unavailable.
pub async fn fetch_user_tokens(
    client: &TokenClient,
    provider: Option<&PassportProvider>,
    address: &str,
) -> Result<Vec<Erc20Token>> {
    if address.is_empty() {
        return Err(TokenError::MissingAddress);
    }

    match client.fetch_address_tokens(address).await {
        Ok(items) => {
            let mut tokens: Vec<Erc20Token> =
                filter_erc20(&items).iter().map(to_erc20_token).collect();
            sort_by_formatted_balance(&mut tokens);
            Ok(tokens)
        }
        Err(error) => {
            tracing::warn!(%error, "explorer token listing failed, falling back to RPC");
            fetch_tokens_with_rpc(provider, address).await
        }
    }
}

async fn fetch_tokens_with_rpc(
    provider: Option<&PassportProvider>,
    address: &str,
) -> Result<Vec<Erc20Token>> {
    let Some(provider) = provider else {
        tracing::warn!("provider not available for RPC token scan");
        return Ok(Vec::new());
    };

    let mut tokens = Vec::new();
    for known in KNOWN_TOKENS {
        match check_token_balance(provider, known.address, address).await {
            Ok(balance) if !balance.is_zero() => {
                tokens.push(Erc20Token {
                    contract_address: known.address.to_string(),
                    name: known.name.to_string(),
                    symbol: known.symbol.to_string(),
                    decimals: known.decimals,
                    balance: balance.to_string(),
                    formatted_balance: format_units(balance, known.decimals),
                    logo: None,
                });
            }
            Ok(_) => {}
            Err(error) => {
                tracing::warn!(token = known.symbol, %error, "balance check failed");
            }
        }
    }
    sort_by_formatted_balance(&mut tokens);
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use passport_core::ExplorerTokenInfo;
    use passport_provider::ProviderConfig;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn explorer_item(token_type: &str, value: &str, decimals: Option<&str>) -> ExplorerTokenItem {
        ExplorerTokenItem {
            token: ExplorerTokenInfo {
                address_hash: "0x1cc".to_string(),
                name: Some("USD Coin".to_string()),
                symbol: Some("USDC".to_string()),
                decimals: decimals.map(str::to_string),
                token_type: token_type.to_string(),
                icon_url: None,
            },
            value: value.to_string(),
            token_id: None,
        }
    }

    #[test]
    fn test_filter_erc20_keeps_positive_fungibles() {
        let items = vec![
            explorer_item("ERC-20", "1500000", Some("6")),
            explorer_item("ERC-20", "0", Some("6")),
            explorer_item("ERC-721", "1", None),
            explorer_item("ERC-20", "not-a-number", Some("6")),
        ];
        let kept = filter_erc20(&items);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].value, "1500000");
    }

    #[test]
    fn test_to_erc20_token_formats_balance() {
        let token = to_erc20_token(&explorer_item("ERC-20", "1500000", Some("6")));
        assert_eq!(token.decimals, 6);
        assert_eq!(token.balance, "1500000");
        assert_eq!(token.formatted_balance, "1.500000");
    }

    #[test]
    fn test_to_erc20_token_decimals_fallback() {
        let token = to_erc20_token(&explorer_item("ERC-20", "1000000000000000000", None));
        assert_eq!(token.decimals, 18);
        assert_eq!(token.formatted_balance, "1.000000");
    }

    #[test]
    fn test_to_erc20_token_implausible_decimals() {
        // explorer rows claiming more than 18 decimals fall back to 18
        let token = to_erc20_token(&explorer_item("ERC-20", "1000000000000000000", Some("78")));
        assert_eq!(token.decimals, 18);
        assert_eq!(token.formatted_balance, "1.000000");
    }

    #[test]
    fn test_to_erc20_token_name_fallbacks() {
        let mut item = explorer_item("ERC-20", "1", Some("0"));
        item.token.name = None;
        item.token.symbol = None;
        let token = to_erc20_token(&item);
        assert_eq!(token.name, "Unknown Token");
        assert_eq!(token.symbol, "UNKNOWN");
    }

    #[test]
    fn test_sort_by_formatted_balance() {
        let mut tokens: Vec<Erc20Token> = [("A", "1.000000"), ("B", "20.500000"), ("C", "0.000001")]
            .iter()
            .map(|(symbol, formatted)| Erc20Token {
                contract_address: "0x0".to_string(),
                name: symbol.to_string(),
                symbol: symbol.to_string(),
                decimals: 18,
                balance: "0".to_string(),
                formatted_balance: formatted.to_string(),
                logo: None,
            })
            .collect();
        sort_by_formatted_balance(&mut tokens);
        let order: Vec<&str> = tokens.iter().map(|t| t.symbol.as_str()).collect();
        assert_eq!(order, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_balance_of_calldata_padding() {
        let owner: Address = "0xacbe301e5b46f4dd532b74e209adac0c06d42f8c".parse().unwrap();
        let data = balance_of_calldata(owner);
        assert_eq!(
            data,
            "0x70a08231000000000000000000000000acbe301e5b46f4dd532b74e209adac0c06d42f8c"
        );
    }

    async fn rpc_provider(server: &MockServer) -> PassportProvider {
        PassportProvider::new(ProviderConfig::new(server.uri()).with_timeout(5)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_token_metadata_decodes_all_three() {
        let server = MockServer::start().await;
        let name_ret = {
            let mut s = String::from("0x");
            s.push_str(&format!("{:0>64x}", 0x20));
            s.push_str(&format!("{:0>64x}", 3));
            s.push_str(&format!("{:0<64}", hex::encode("IMX")));
            s
        };
        Mock::given(method("POST"))
            .and(body_string_contains(SELECTOR_NAME))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0", "id": 1, "result": name_ret
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(body_string_contains(SELECTOR_SYMBOL))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0", "id": 1, "result": "0x"
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(body_string_contains(SELECTOR_DECIMALS))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0", "id": 1,
                "result": format!("0x{:0>64x}", 6)
            })))
            .mount(&server)
            .await;

        let provider = rpc_provider(&server).await;
        let metadata = fetch_token_metadata(&provider, "0x1cc").await;
        assert_eq!(metadata.name, "IMX");
        // empty symbol reply falls back
        assert_eq!(metadata.symbol, "UNKNOWN");
        assert_eq!(metadata.decimals, 6);
    }

    #[tokio::test]
    async fn test_check_custom_token_zero_balance_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0", "id": 1, "result": "0x0"
            })))
            .mount(&server)
            .await;

        let provider = rpc_provider(&server).await;
        let result = check_custom_token(
            &provider,
            "0x1cc",
            "0xacbe301e5b46f4dd532b74e209adac0c06d42f8c",
        )
        .await
        .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_fetch_user_tokens_explorer_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/addresses/0xabc/tokens"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    {
                        "token": {
                            "address_hash": "0x1cc",
                            "name": "USD Coin",
                            "symbol": "USDC",
                            "decimals": "6",
                            "type": "ERC-20"
                        },
                        "value": "2000000"
                    },
                    {
                        "token": {
                            "address_hash": "0xnft",
                            "name": "Cats",
                            "symbol": "CAT",
                            "type": "ERC-721"
                        },
                        "value": "1"
                    }
                ]
            })))
            .mount(&server)
            .await;

        let client =
            TokenClient::with_base_urls(server.uri(), server.uri(), "imtbl-zkevm-testnet").unwrap();
        let tokens = fetch_user_tokens(&client, None, "0xabc").await.unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].symbol, "USDC");
        assert_eq!(tokens[0].formatted_balance, "2.000000");
    }

    #[tokio::test]
    async fn test_fetch_user_tokens_rpc_fallback() {
        // Explorer down, every known token answers with the same raw balance
        let explorer = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&explorer)
            .await;
        let rpc = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_string_contains(SELECTOR_BALANCE_OF))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0", "id": 1, "result": "0x1bc16d674ec80000"
            })))
            .mount(&rpc)
            .await;

        let client =
            TokenClient::with_base_urls(explorer.uri(), explorer.uri(), "imtbl-zkevm-testnet")
                .unwrap();
        let provider = rpc_provider(&rpc).await;
        let tokens = fetch_user_tokens(
            &client,
            Some(&provider),
            "0xacbe301e5b46f4dd532b74e209adac0c06d42f8c",
        )
        .await
        .unwrap();

        assert_eq!(tokens.len(), KNOWN_TOKENS.len());
        // 2e18 raw: the 6-decimal USDC reads as the largest formatted value
        assert_eq!(tokens[0].symbol, "USDC");
        assert_eq!(tokens[0].formatted_balance, "2000000000000.000000");
        let imx = tokens.iter().find(|t| t.symbol == "IMX").unwrap();
        assert_eq!(imx.formatted_balance, "2.000000");
    }

    #[tokio::test]
    async fn test_fetch_user_tokens_fallback_without_provider() {
        let explorer = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&explorer)
            .await;

        let client =
            TokenClient::with_base_urls(explorer.uri(), explorer.uri(), "imtbl-zkevm-testnet")
                .unwrap();
        let tokens = fetch_user_tokens(&client, None, "0xabc").await.unwrap();
        assert!(tokens.is_empty());
    }
}
