//! # Passport Session
//!
//! Client for the hosted Passport identity service: environment-driven
//! configuration, device-authorization login, token refresh, JWT payload
//! decoding, user info, and linked addresses. Signing never happens here --
//! the session only produces the bearer tokens that authorize the JSON-RPC
//! provider.
//!
//! ## Example
//!
//! ```ignore
//! use passport_session::{PassportSession, SessionConfig};
//!
//! let session = PassportSession::new(SessionConfig::from_env()?)?;
//! let device = session.begin_device_login().await?;
//! println!("visit {} and enter {}", device.verification_uri, device.user_code);
//! session.poll_device_login(&device).await?;
//! let profile = session.user_info().await?;
//! println!("logged in as {}", profile.sub);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
pub use error::SessionError;
mod config;
pub use config::SessionConfig;
mod jwt;
pub use jwt::decode_jwt_payload;
mod session;
pub use session::{DeviceCodeResponse, PassportSession, TokenSet};

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
