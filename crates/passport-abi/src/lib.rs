//! # Passport ABI
//!
//! Contract-call encoding utilities for the Passport demo wallet: Keccak-256
//! hashing with 4-byte selector extraction, calldata construction from
//! human-readable function signatures, and calldata decoding against a JSON
//! ABI with a selector-only fallback.
//!
//! ## Example
//!
//! ```
//! use passport_abi::{keccak256_hash, InputKind};
//!
//! let result = keccak256_hash("transfer(address,uint256)", InputKind::Utf8).unwrap();
//! assert_eq!(result.selector, "0xa9059cbb");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
pub use error::Error;
mod hash;
pub use hash::{keccak256, keccak256_hash, HashResult, InputKind};
mod encode;
pub use encode::{encode_function_call, parse_parameters};
mod decode;
pub use decode::{decode_calldata, BasicDecoded, DecodedArg, DecodedCall, DecodedData};
mod selectors;
pub use selectors::{selector_for, COMMON_SELECTORS};
