//! Passport demo wallet CLI for Immutable zkEVM.
//!
//! Login goes through the Passport device-authorization flow; balances come
//! from the block explorer and NFT indexer; transactions and signing requests
//! are relayed to the Passport JSON-RPC endpoint with the session's access
//! token attached.

mod account;
mod balances;
mod encoding;
mod rpc;
mod state;
mod transact;

use std::io::{self, Write};

use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

use passport_core::{network_config, Network};
use passport_provider::{PassportProvider, ProviderConfig};
use passport_session::{PassportSession, SessionConfig};
use passport_tokens::TokenClient;

use state::{App, TokenState, TransactionState};

const VERSION: &str = env!("CARGO_PKG_VERSION");

enum CliResponse {
    Continue,
    Exit,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    print_banner();

    let network = select_network();
    let config = network_config(network);
    println!("\nNetwork: {} (chain id {})", config.name, config.chain_id);
    println!("RPC:     {}", config.rpc_url);

    // The interactive pick wins over PASSPORT_ENVIRONMENT
    let session_config = SessionConfig::from_env()
        .map_err(|e| {
            anyhow::anyhow!(
                "{e}; set PASSPORT_CLIENT_ID and PASSPORT_PUBLISHABLE_KEY (see .env.example)"
            )
        })?
        .with_api_base_url(config.api_base_url);

    let mut provider_config = ProviderConfig::new(config.rpc_url);
    if let Ok(fallback) = std::env::var("PASSPORT_RPC_FALLBACK") {
        provider_config = provider_config.with_fallback(fallback);
    }

    let app = App {
        network,
        session: PassportSession::new(session_config)?,
        provider: PassportProvider::new(provider_config)?,
        tokens: TokenClient::new(network)?,
        profile: watch::channel(None).0,
        token_state: watch::channel(TokenState::default()).0,
        tx_state: watch::channel(TransactionState::default()).0,
        address: watch::channel(None).0,
    };

    loop {
        print_main_menu(&app).await;
        let choice = prompt("Your choice")?;
        match handle_main_menu_choice(&app, choice.trim()).await {
            Ok(CliResponse::Exit) => {
                println!("\nGoodbye!");
                return Ok(());
            }
            Ok(CliResponse::Continue) => continue,
            Err(e) => {
                eprintln!("Error: {e}");
                continue;
            }
        }
    }
}

fn print_banner() {
    println!("\n  ╔═══════════════════════════════════════════╗");
    println!("  ║   PASSPORT WALLET - Immutable zkEVM demo  ║");
    println!("  ╚═══════════════════════════════════════════╝");
    println!("                 v{VERSION}\n");
}

fn select_network() -> Network {
    println!("Select network:");
    println!();
    println!("  [1] Testnet (imtbl-zkevm-testnet, recommended)");
    println!("  [2] Mainnet (imtbl-zkevm-mainnet, real funds!)");

    let input = prompt("\nYour choice (default: 1)").unwrap_or_default();
    match input.trim() {
        "2" => {
            println!("\n⚠️  Mainnet selected - transactions move real funds.");
            let confirm = prompt("Are you sure? (yes/N)").unwrap_or_default();
            if confirm.trim().eq_ignore_ascii_case("yes") {
                Network::Mainnet
            } else {
                println!("Staying on testnet.");
                Network::Testnet
            }
        }
        _ => Network::Testnet,
    }
}

async fn print_main_menu(app: &App) {
    let status = if app.session.is_logged_in().await {
        match app.current_address() {
            Some(address) => format!("logged in · {address}"),
            None => "logged in".to_string(),
        }
    } else {
        "not logged in".to_string()
    };

    println!("\n════════════════════════════════════════════════");
    println!("  PASSPORT WALLET ({}) - {status}", app.network);
    println!("════════════════════════════════════════════════");
    println!("[1] Login with Passport");
    println!("[2] Profile & linked addresses");
    println!("[3] Session tokens");
    println!("[4] Refresh session");
    println!("[5] Token balances");
    println!("[6] NFT collections");
    println!("[7] Transfer a token");
    println!("[8] Send transaction");
    println!("[9] Sign message / typed data");
    println!("[R] RPC queries");
    println!("[E] Encode / decode tools");
    println!("[L] Logout");
    println!("[X] Exit");
}

async fn handle_main_menu_choice(app: &App, choice: &str) -> Result<CliResponse, anyhow::Error> {
    match choice.to_uppercase().as_str() {
        "X" => Ok(CliResponse::Exit),
        "1" => {
            account::handle_login(app).await;
            Ok(CliResponse::Continue)
        }
        "2" => {
            account::handle_profile(app).await;
            Ok(CliResponse::Continue)
        }
        "3" => {
            account::handle_session_tokens(app).await;
            Ok(CliResponse::Continue)
        }
        "4" => {
            account::handle_refresh(app).await;
            Ok(CliResponse::Continue)
        }
        "5" => {
            balances::handle_balances(app).await?;
            Ok(CliResponse::Continue)
        }
        "6" => {
            balances::handle_nfts(app).await?;
            Ok(CliResponse::Continue)
        }
        "7" => {
            balances::handle_transfer(app).await?;
            Ok(CliResponse::Continue)
        }
        "8" => {
            transact::handle_send_transaction(app).await?;
            Ok(CliResponse::Continue)
        }
        "9" => {
            transact::handle_signing(app).await?;
            Ok(CliResponse::Continue)
        }
        "R" => {
            rpc::handle_rpc_menu(app).await?;
            Ok(CliResponse::Continue)
        }
        "E" => {
            encoding::handle_encoding_menu()?;
            Ok(CliResponse::Continue)
        }
        "L" => {
            account::handle_logout(app).await;
            Ok(CliResponse::Continue)
        }
        _ => {
            println!("Invalid option. Please try again.");
            Ok(CliResponse::Continue)
        }
    }
}

/// Prints `label`, flushes, and reads one trimmed line from stdin.
pub fn prompt(label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Like [`prompt`], but an empty reply falls back to `default`.
pub fn prompt_or(label: &str, default: &str) -> io::Result<String> {
    let input = prompt(&format!("{label} [{default}]"))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

pub fn wait_for_enter() {
    println!("\nPress Enter to continue...");
    let mut _pause = String::new();
    io::stdin().read_line(&mut _pause).ok();
}
