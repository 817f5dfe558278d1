//! Transaction and signing handlers.

use serde_json::json;

use passport_core::{messages, network_config, TransactionRequest};

use crate::state::{App, TransactionState};
use crate::{prompt, prompt_or, wait_for_enter};

pub async fn handle_send_transaction(app: &App) -> Result<(), anyhow::Error> {
    let form = app.tx_state.borrow().clone();

    println!("\n───────── Send transaction ─────────");
    let to = prompt_or("To", &form.to)?;
    if to.is_empty() {
        println!("{}", messages::INVALID_PARAMS);
        wait_for_enter();
        return Ok(());
    }
    let value = prompt_or("Value (wei)", &form.value)?;
    let data = prompt("Data (0x..., blank for none)")?;

    let value_hex = match value.parse::<u128>() {
        Ok(wei) => format!("0x{wei:x}"),
        Err(_) if value.starts_with("0x") => value.clone(),
        Err(_) => {
            println!("Invalid value: {value}");
            wait_for_enter();
            return Ok(());
        }
    };

    app.tx_state.send_replace(TransactionState {
        to: to.clone(),
        value: value.clone(),
        data: data.clone(),
        hash: None,
        error: None,
        sending: true,
    });

    let request = TransactionRequest {
        from: app.current_address(),
        to: Some(to.clone()),
        value: Some(value_hex),
        data: (!data.is_empty()).then_some(data.clone()),
        ..Default::default()
    };

    println!("\nSending...");
    let (hash, error) = match app.provider.send_transaction(&request).await {
        Ok(hash) => {
            println!("✅ Transaction sent! Hash: {hash}");
            (Some(hash), None)
        }
        Err(e) => {
            println!("❌ {}: {e}", messages::TRANSACTION_FAILED);
            (None, Some(e.to_string()))
        }
    };

    app.tx_state.send_replace(TransactionState {
        to,
        value,
        data,
        hash: hash.clone(),
        error,
        sending: false,
    });

    if let Some(hash) = hash {
        let check = prompt("Check the receipt? (yes/N)")?;
        if check.eq_ignore_ascii_case("yes") {
            match app.provider.get_transaction_receipt(&hash).await {
                Ok(Some(receipt)) => {
                    println!("{}", serde_json::to_string_pretty(&receipt)?)
                }
                Ok(None) => println!("Still pending."),
                Err(e) => println!("❌ Receipt lookup failed: {e}"),
            }
        }
    }

    wait_for_enter();
    Ok(())
}

pub async fn handle_signing(app: &App) -> Result<(), anyhow::Error> {
    let Some(address) = app.current_address() else {
        println!("\nConnect a wallet first (login).");
        wait_for_enter();
        return Ok(());
    };

    println!("\n───────── Sign ─────────");
    println!("[1] personal_sign");
    println!("[2] eth_signTypedData_v4");
    let choice = prompt("Method")?;

    match choice.as_str() {
        "1" => {
            let message = prompt("Message")?;
            match app.provider.personal_sign(&address, &message).await {
                Ok(signature) => println!("✅ Signature: {signature}"),
                Err(e) => println!("❌ Signing failed: {e}"),
            }
        }
        "2" => {
            let input = prompt("Typed data JSON (blank for demo payload)")?;
            let typed_data = if input.is_empty() {
                demo_typed_data(app)
            } else {
                match serde_json::from_str(&input) {
                    Ok(value) => value,
                    Err(e) => {
                        println!("Invalid JSON: {e}");
                        wait_for_enter();
                        return Ok(());
                    }
                }
            };
            match app.provider.sign_typed_data(&address, &typed_data).await {
                Ok(signature) => println!("✅ Signature: {signature}"),
                Err(e) => println!("❌ Signing failed: {e}"),
            }
        }
        _ => println!("Invalid option."),
    }

    wait_for_enter();
    Ok(())
}

/// A minimal EIP-712 payload for trying out typed-data signing.
fn demo_typed_data(app: &App) -> serde_json::Value {
    let chain_id = network_config(app.network).chain_id;
    json!({
        "types": {
            "EIP712Domain": [
                { "name": "name", "type": "string" },
                { "name": "version", "type": "string" },
                { "name": "chainId", "type": "uint256" }
            ],
            "Greeting": [
                { "name": "contents", "type": "string" }
            ]
        },
        "domain": {
            "name": "Passport Wallet Demo",
            "version": "1",
            "chainId": chain_id
        },
        "primaryType": "Greeting",
        "message": {
            "contents": "Hello from Immutable zkEVM"
        }
    })
}
