//! Login, profile and session-token handlers.

use passport_core::messages;

use crate::state::{App, TokenState};
use crate::wait_for_enter;

pub async fn handle_login(app: &App) {
    let device = match app.session.begin_device_login().await {
        Ok(device) => device,
        Err(e) => {
            println!("❌ Could not start login: {e}");
            return;
        }
    };

    println!("\nTo sign in, open this page in a browser:");
    match &device.verification_uri_complete {
        Some(url) => println!("  {url}"),
        None => println!("  {}", device.verification_uri),
    }
    println!("and confirm the code: {}", device.user_code);
    println!("\nWaiting for approval (expires in {}s)...", device.expires_in);

    let tokens = match app.session.poll_device_login(&device).await {
        Ok(tokens) => tokens,
        Err(e) => {
            println!("❌ Login failed: {e}");
            return;
        }
    };

    app.provider.set_access_token(&tokens.access_token).await;
    app.token_state.send_replace(TokenState {
        id_token: tokens.id_token.clone(),
        access_token: Some(tokens.access_token.clone()),
        decoded_id_token: app.session.decoded_id_token().await.ok(),
        decoded_access_token: app.session.decoded_access_token().await.ok(),
    });

    println!("✅ Logged in!");

    match app.session.user_info().await {
        Ok(profile) => {
            if let Some(email) = &profile.email {
                println!("   Email: {email}");
            }
            app.profile.send_replace(Some(profile));
        }
        Err(e) => println!("⚠️  Could not fetch profile: {e}"),
    }

    match app.provider.request_accounts().await {
        Ok(accounts) => match accounts.first() {
            Some(address) => {
                println!("   Wallet: {address}");
                app.address.send_replace(Some(address.clone()));
            }
            None => println!("⚠️  No wallet address returned"),
        },
        Err(e) => println!("⚠️  Could not connect wallet: {e}"),
    }

    wait_for_enter();
}

pub async fn handle_profile(app: &App) {
    if !app.session.is_logged_in().await {
        println!("\n{}", messages::NOT_LOGGED_IN);
        wait_for_enter();
        return;
    }

    match app.session.user_info().await {
        Ok(profile) => {
            println!("\n───────── Profile ─────────");
            println!("Subject:  {}", profile.sub);
            println!("Email:    {}", profile.email.as_deref().unwrap_or("-"));
            println!("Nickname: {}", profile.nickname.as_deref().unwrap_or("-"));
            app.profile.send_replace(Some(profile));
        }
        Err(e) => println!("❌ Could not fetch profile: {e}"),
    }

    match app.session.linked_addresses().await {
        Ok(addresses) if addresses.is_empty() => println!("\nNo linked addresses"),
        Ok(addresses) => {
            println!("\nLinked addresses:");
            for address in addresses {
                println!("  - {address}");
            }
        }
        Err(e) => println!("⚠️  Could not fetch linked addresses: {e}"),
    }

    wait_for_enter();
}

pub async fn handle_session_tokens(app: &App) {
    let state = app.token_state.borrow().clone();
    if state.access_token.is_none() {
        println!("\n{}", messages::NOT_LOGGED_IN);
        wait_for_enter();
        return;
    }

    println!("\n───────── Session tokens ─────────");
    if let Some(token) = &state.access_token {
        println!("Access token: {}", truncated(token));
    }
    if let Some(claims) = &state.decoded_access_token {
        println!(
            "Access claims:\n{}",
            serde_json::to_string_pretty(claims).unwrap_or_default()
        );
    }
    if let Some(token) = &state.id_token {
        println!("\nID token: {}", truncated(token));
    }
    if let Some(claims) = &state.decoded_id_token {
        println!(
            "ID claims:\n{}",
            serde_json::to_string_pretty(claims).unwrap_or_default()
        );
    }

    wait_for_enter();
}

pub async fn handle_refresh(app: &App) {
    match app.session.refresh().await {
        Ok(tokens) => {
            app.provider.set_access_token(&tokens.access_token).await;
            app.token_state.send_replace(TokenState {
                id_token: tokens.id_token.clone(),
                access_token: Some(tokens.access_token.clone()),
                decoded_id_token: app.session.decoded_id_token().await.ok(),
                decoded_access_token: app.session.decoded_access_token().await.ok(),
            });
            println!("✅ Session refreshed");
        }
        Err(e) => println!("❌ Refresh failed: {e}"),
    }
    wait_for_enter();
}

pub async fn handle_logout(app: &App) {
    app.session.logout().await;
    app.provider.clear_access_token().await;
    app.clear_login_state();
    println!("✅ Logged out");
}

fn truncated(token: &str) -> String {
    if token.len() > 40 {
        format!("{}...", &token[..40])
    } else {
        token.to_string()
    }
}
