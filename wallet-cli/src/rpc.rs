//! Raw JSON-RPC query menu.

use passport_core::{block_parameter, BlockTransactions, TransactionRequest};

use crate::state::App;
use crate::{prompt, prompt_or, wait_for_enter};

pub async fn handle_rpc_menu(app: &App) -> Result<(), anyhow::Error> {
    loop {
        println!("\n───────── RPC queries ─────────");
        println!("[1]  Block number");
        println!("[2]  Gas price");
        println!("[3]  Chain id");
        println!("[4]  Balance of address");
        println!("[5]  Transaction count (nonce)");
        println!("[6]  Code at address");
        println!("[7]  Storage at position");
        println!("[8]  Block by number");
        println!("[9]  Block by hash");
        println!("[10] Transaction by hash");
        println!("[11] Transaction receipt");
        println!("[12] Estimate gas");
        println!("[13] eth_call");
        println!("[14] Accounts");
        println!("[B]  Back");

        let choice = prompt("\nSelect option")?;
        match choice.to_lowercase().as_str() {
            "b" => return Ok(()),
            "1" => print_result(app.provider.get_block_number().await),
            "2" => print_result(app.provider.get_gas_price().await),
            "3" => print_result(app.provider.get_chain_id().await),
            "4" => {
                let address = prompt("Address")?;
                print_result(app.provider.get_balance(&address).await);
            }
            "5" => {
                let address = prompt("Address")?;
                print_result(app.provider.get_transaction_count(&address).await);
            }
            "6" => {
                let address = prompt("Address")?;
                print_result(app.provider.get_code(&address).await);
            }
            "7" => {
                let address = prompt("Address")?;
                let position = prompt_or("Position", "0x0")?;
                print_result(app.provider.get_storage_at(&address, &position).await);
            }
            "8" => query_block_by_number(app).await?,
            "9" => {
                let hash = prompt("Block hash")?;
                print_json(app.provider.get_block_by_hash(&hash).await);
            }
            "10" => {
                let hash = prompt("Transaction hash")?;
                print_json(app.provider.get_transaction_by_hash(&hash).await);
            }
            "11" => {
                let hash = prompt("Transaction hash")?;
                print_json(app.provider.get_transaction_receipt(&hash).await);
            }
            "12" => {
                let to = prompt("To")?;
                let value = prompt_or("Value (hex wei)", "0x0")?;
                let tx = TransactionRequest {
                    to: Some(to),
                    value: Some(value),
                    ..Default::default()
                };
                print_result(app.provider.estimate_gas(&tx).await);
            }
            "13" => {
                let to = prompt("To")?;
                let data = prompt("Data (0x...)")?;
                print_result(app.provider.call(&TransactionRequest::call(to, data)).await);
            }
            "14" => match app.provider.get_accounts().await {
                Ok(accounts) if accounts.is_empty() => println!("No accounts"),
                Ok(accounts) => {
                    for account in accounts {
                        println!("  - {account}");
                    }
                }
                Err(e) => println!("❌ {e}"),
            },
            _ => println!("Invalid option"),
        }

        wait_for_enter();
    }
}

async fn query_block_by_number(app: &App) -> Result<(), anyhow::Error> {
    let tag = prompt_or("Tag (latest/earliest/pending/number)", "latest")?;
    let custom = if tag == "number" {
        prompt("Block number (decimal or 0x hex)")?
    } else {
        String::new()
    };

    let parameter = match block_parameter(&tag, &custom) {
        Ok(parameter) => parameter,
        Err(e) => {
            println!("❌ {e}");
            return Ok(());
        }
    };

    match app.provider.get_block_by_number(&parameter).await {
        Ok(Some(block)) => {
            if let Some(number) = block.get("number").and_then(|n| n.as_str()) {
                println!("Block {number}");
            }
            if let Some(hash) = block.get("hash").and_then(|h| h.as_str()) {
                println!("Hash: {hash}");
            }
            let transactions = block
                .get("transactions")
                .cloned()
                .and_then(|t| serde_json::from_value::<BlockTransactions>(t).ok());
            println!(
                "{}",
                passport_core::format_transactions(transactions.as_ref())
            );
        }
        Ok(None) => println!("No such block"),
        Err(e) => println!("❌ {e}"),
    }
    Ok(())
}

fn print_result(result: passport_provider::Result<String>) {
    match result {
        Ok(value) => println!("Result: {value}"),
        Err(e) => println!("❌ {e}"),
    }
}

fn print_json(result: passport_provider::Result<Option<serde_json::Value>>) {
    match result {
        Ok(Some(value)) => {
            println!(
                "{}",
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
            )
        }
        Ok(None) => println!("Not found"),
        Err(e) => println!("❌ {e}"),
    }
}
