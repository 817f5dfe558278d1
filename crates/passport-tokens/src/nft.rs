use std::collections::BTreeMap;

use passport_core::{Asset, Collection, NftItem};

use crate::{Result, TokenClient};

/// Groups owned NFTs into collections keyed by contract address.
///
/// The indexer listing carries no collection names, so a placeholder derived
/// from the contract address is used. Asset counts sum the owned quantities;
/// a missing or malformed quantity counts as 1.
pub fn group_collections(nfts: &[NftItem]) -> Vec<Collection> {
    let mut collections: BTreeMap<&str, Collection> = BTreeMap::new();

    for nft in nfts {
        let entry = collections
            .entry(nft.contract_address.as_str())
            .or_insert_with(|| Collection {
                contract_address: nft.contract_address.clone(),
                name: placeholder_name(&nft.contract_address),
                asset_count: 0,
                contract_type: nft.contract_type.clone(),
            });
        let quantity = nft
            .quantity
            .as_deref()
            .and_then(|q| q.parse::<u64>().ok())
            .unwrap_or(1);
        entry.asset_count += quantity;
    }

    collections.into_values().collect()
}

fn placeholder_name(contract_address: &str) -> String {
    if contract_address.len() > 10 {
        format!(
            "Collection {}...{}",
            &contract_address[..6],
            &contract_address[contract_address.len() - 4..]
        )
    } else {
        format!("Collection {contract_address}")
    }
}

/// Fetches the user's collections, grouped from the accounts NFT listing.
///
/// Falls back to the owners endpoint when the accounts endpoint errors or
/// returns nothing.
pub async fn fetch_user_collections(client: &TokenClient, address: &str) -> Result<Vec<Collection>> {
    match client.fetch_account_nfts(address, None).await {
        Ok(response) if !response.result.is_empty() => Ok(group_collections(&response.result)),
        Ok(_) => {
            tracing::info!("no NFTs from accounts endpoint, trying owners endpoint");
            collections_from_owners(client, address).await
        }
        Err(error) => {
            tracing::warn!(%error, "accounts NFTs endpoint failed, trying owners endpoint");
            collections_from_owners(client, address).await
        }
    }
}

async fn collections_from_owners(client: &TokenClient, address: &str) -> Result<Vec<Collection>> {
    match client.fetch_nft_owners(address).await {
        Ok(response) => Ok(group_collections(&response.result)),
        Err(error) => {
            tracing::warn!(%error, "owners endpoint failed");
            Ok(Vec::new())
        }
    }
}

/// Fetches the user's assets within one collection, shaped for display.
pub async fn fetch_collection_assets(
    client: &TokenClient,
    address: &str,
    contract_address: &str,
) -> Result<Vec<Asset>> {
    let response = client
        .fetch_account_nfts(address, Some(contract_address))
        .await?;

    let assets = response
        .result
        .into_iter()
        .map(|nft| Asset {
            token_id: nft.token_id.clone(),
            contract_address: nft.contract_address.clone(),
            name: Some(format!("{} #{}", nft.contract_type, nft.token_id)),
            contract_type: Some(nft.contract_type),
            balance: nft.balance.unwrap_or_else(|| "1".to_string()),
            quantity: nft.quantity,
            description: None,
            image_url: None,
            attributes: Vec::new(),
            account_address: nft.account_address,
            updated_at: nft.updated_at,
        })
        .collect();
    Ok(assets)
}
