//! Balance, NFT and transfer handlers.

use passport_tokens::{
    build_transfer_call, check_custom_token, fetch_collection_assets, fetch_user_collections,
    fetch_user_tokens, format_units, parse_hex_quantity, TransferKind,
};

use crate::state::App;
use crate::{prompt, prompt_or, wait_for_enter};

/// The wallet address to operate on: the connected one, or prompted.
async fn resolve_address(app: &App) -> Result<Option<String>, anyhow::Error> {
    if let Some(address) = app.current_address() {
        return Ok(Some(address));
    }
    let input = prompt("Wallet address (0x...)")?;
    if input.is_empty() {
        println!("No address given.");
        return Ok(None);
    }
    Ok(Some(input))
}

pub async fn handle_balances(app: &App) -> Result<(), anyhow::Error> {
    let Some(address) = resolve_address(app).await? else {
        return Ok(());
    };

    println!("\n───────── Balances for {address} ─────────");

    match app.provider.get_balance(&address).await {
        Ok(hex_balance) => match parse_hex_quantity(&hex_balance) {
            Ok(wei) => println!("Native (tIMX/IMX): {}", format_units(wei, 18)),
            Err(e) => println!("Native balance unreadable: {e}"),
        },
        Err(e) => println!("❌ Native balance failed: {e}"),
    }

    match fetch_user_tokens(&app.tokens, Some(&app.provider), &address).await {
        Ok(tokens) if tokens.is_empty() => println!("\nNo ERC-20 balances"),
        Ok(tokens) => {
            println!("\nERC-20 balances:");
            for token in tokens {
                println!(
                    "  {:>16}  {} ({})",
                    token.formatted_balance, token.symbol, token.name
                );
            }
        }
        Err(e) => println!("❌ Token listing failed: {e}"),
    }

    let custom = prompt("\nCheck a custom token? (contract address or blank)")?;
    if !custom.is_empty() {
        match check_custom_token(&app.provider, &custom, &address).await {
            Ok(Some(token)) => println!(
                "  {} {} ({}, {} decimals)",
                token.formatted_balance, token.symbol, token.name, token.decimals
            ),
            Ok(None) => println!("  Zero balance for that token"),
            Err(e) => println!("❌ Custom token check failed: {e}"),
        }
    }

    wait_for_enter();
    Ok(())
}

pub async fn handle_nfts(app: &App) -> Result<(), anyhow::Error> {
    let Some(address) = resolve_address(app).await? else {
        return Ok(());
    };

    let collections = fetch_user_collections(&app.tokens, &address).await?;
    if collections.is_empty() {
        println!("\nNo NFT collections found");
        wait_for_enter();
        return Ok(());
    }

    println!("\n───────── Collections ─────────");
    for (index, collection) in collections.iter().enumerate() {
        println!(
            "[{}] {} - {} asset(s) ({})",
            index + 1,
            collection.name,
            collection.asset_count,
            collection.contract_type
        );
    }

    let pick = prompt("\nView a collection? (number or blank)")?;
    if let Ok(index) = pick.parse::<usize>() {
        if let Some(collection) = collections.get(index.saturating_sub(1)) {
            let assets =
                fetch_collection_assets(&app.tokens, &address, &collection.contract_address)
                    .await?;
            println!("\nAssets in {}:", collection.name);
            for asset in assets {
                println!(
                    "  - {} (id {}, balance {})",
                    asset.name.as_deref().unwrap_or("?"),
                    asset.token_id,
                    asset.balance
                );
            }
        }
    }

    wait_for_enter();
    Ok(())
}

pub async fn handle_transfer(app: &App) -> Result<(), anyhow::Error> {
    let Some(from) = app.current_address() else {
        println!("\nConnect a wallet first (login).");
        wait_for_enter();
        return Ok(());
    };

    println!("\n───────── Transfer ─────────");
    println!("[1] ERC-20");
    println!("[2] ERC-721");
    println!("[3] ERC-1155");
    let kind_choice = prompt("Token standard")?;

    let contract = prompt("Token contract address")?;
    let to = prompt("Recipient address")?;

    let kind = match kind_choice.as_str() {
        "1" => {
            let amount = prompt("Amount (base units)")?;
            TransferKind::Erc20 { to, amount }
        }
        "2" => {
            let token_id = prompt("Token id")?;
            TransferKind::Erc721 {
                from: from.clone(),
                to,
                token_id,
            }
        }
        "3" => {
            let token_id = prompt("Token id")?;
            let amount = prompt_or("Amount", "1")?;
            TransferKind::Erc1155 {
                from: from.clone(),
                to,
                token_id,
                amount,
            }
        }
        _ => {
            println!("Invalid option.");
            return Ok(());
        }
    };

    let mut request = match build_transfer_call(&contract, &kind) {
        Ok(request) => request,
        Err(e) => {
            println!("❌ Could not build transfer: {e}");
            wait_for_enter();
            return Ok(());
        }
    };
    request.from = Some(from);

    let confirm = prompt("Send the transfer? (yes/N)")?;
    if !confirm.eq_ignore_ascii_case("yes") {
        println!("Cancelled.");
        return Ok(());
    }

    match app.provider.send_transaction(&request).await {
        Ok(hash) => println!("✅ Transfer sent! Hash: {hash}"),
        Err(e) => println!("❌ Transfer failed: {e}"),
    }

    wait_for_enter();
    Ok(())
}
