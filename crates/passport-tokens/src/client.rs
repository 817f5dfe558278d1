use std::time::Duration;

use reqwest::Client;

use passport_core::{network_config, ExplorerApiResponse, ExplorerTokenItem, Network, NftOwnerResponse};

use crate::{Result, TokenError};

const PAGE_SIZE: u32 = 200;

/// REST client for the explorer and NFT indexer APIs.
pub struct TokenClient {
    client: Client,
    api_base_url: String,
    explorer_base_url: String,
    chain_name: String,
}

impl TokenClient {
    /// Creates a client for the given network's endpoints.
    pub fn new(network: Network) -> Result<Self> {
        let config = network_config(network);
        Self::with_base_urls(
            config.api_base_url,
            config.explorer_base_url,
            config.chain_name,
        )
    }

    /// Creates a client with explicit base URLs.
    pub fn with_base_urls(
        api_base_url: impl Into<String>,
        explorer_base_url: impl Into<String>,
        chain_name: impl Into<String>,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(format!("passport-wallet/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            api_base_url: api_base_url.into(),
            explorer_base_url: explorer_base_url.into(),
            chain_name: chain_name.into(),
        })
    }

    /// Chain name used in indexer API paths.
    pub fn chain_name(&self) -> &str {
        &self.chain_name
    }

    /// Lists every token (fungible and not) the explorer knows for `address`.
    pub async fn fetch_address_tokens(&self, address: &str) -> Result<Vec<ExplorerTokenItem>> {
        if address.is_empty() {
            return Err(TokenError::MissingAddress);
        }
        let url = format!(
            "{}/api/v2/addresses/{address}/tokens",
            self.explorer_base_url
        );
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(TokenError::Api {
                endpoint: "Explorer API",
                status: response.status().as_u16(),
            });
        }
        let body: ExplorerApiResponse = response.json().await?;
        Ok(body.items)
    }

    /// Lists NFTs owned by `address`, optionally restricted to one contract.
    pub async fn fetch_account_nfts(
        &self,
        address: &str,
        contract_address: Option<&str>,
    ) -> Result<NftOwnerResponse> {
        if address.is_empty() {
            return Err(TokenError::MissingAddress);
        }
        let mut url = format!(
            "{}/v1/chains/{}/accounts/{address}/nfts?page_size={PAGE_SIZE}",
            self.api_base_url, self.chain_name
        );
        if let Some(contract) = contract_address {
            url.push_str("&contract_address=");
            url.push_str(contract);
        }
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(TokenError::Api {
                endpoint: "Accounts NFTs API",
                status: response.status().as_u16(),
            });
        }
        Ok(response.json().await?)
    }

    /// Fallback NFT listing keyed by owner rather than account.
    pub async fn fetch_nft_owners(&self, address: &str) -> Result<NftOwnerResponse> {
        if address.is_empty() {
            return Err(TokenError::MissingAddress);
        }
        let url = format!(
            "{}/v1/chains/{}/nfts/owners/{address}?page_size={PAGE_SIZE}",
            self.api_base_url, self.chain_name
        );
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(TokenError::Api {
                endpoint: "NFT owners API",
                status: response.status().as_u16(),
            });
        }
        Ok(response.json().await?)
    }
}
