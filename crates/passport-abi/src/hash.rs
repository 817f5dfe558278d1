use serde::Serialize;
use tiny_keccak::{Hasher, Keccak};

use crate::Error;

/// How the hash input string should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    /// Hash the UTF-8 bytes of the string.
    #[default]
    Utf8,
    /// Interpret the string as hex bytes (0x prefix optional).
    Hex,
}

/// A Keccak-256 digest with its 4-byte selector prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashResult {
    /// 0x-prefixed 32-byte digest.
    pub hash: String,
    /// 0x-prefixed first 4 bytes of the digest.
    pub selector: String,
}

/// Computes the Keccak-256 digest of `data`.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut keccak = Keccak::v256();
    let mut output = [0u8; 32];
    keccak.update(data);
    keccak.finalize(&mut output);
    output
}

/// Hashes `input` and extracts the function selector (first 4 bytes).
pub fn keccak256_hash(input: &str, kind: InputKind) -> Result<HashResult, Error> {
    if input.trim().is_empty() {
        return Err(Error::EmptyInput);
    }

    let bytes = match kind {
        InputKind::Utf8 => input.as_bytes().to_vec(),
        InputKind::Hex => {
            let clean = input.strip_prefix("0x").unwrap_or(input);
            if !clean.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(Error::InvalidHex);
            }
            hex::decode(clean).map_err(|_| Error::InvalidHex)?
        }
    };

    let digest = keccak256(&bytes);
    let hash = format!("0x{}", hex::encode(digest));
    let selector = hash[..10].to_string();
    Ok(HashResult { hash, selector })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keccak256_empty_bytes() {
        // keccak256("") is a well-known constant
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_transfer_signature_selector() {
        let result = keccak256_hash("transfer(address,uint256)", InputKind::Utf8).unwrap();
        assert_eq!(result.selector, "0xa9059cbb");
        assert_eq!(
            result.hash,
            "0xa9059cbb2ab09eb219583f4a59a5d0623ade346d962bcd4e46b11da047c9049b"
        );
    }

    #[test]
    fn test_balance_of_selector() {
        let result = keccak256_hash("balanceOf(address)", InputKind::Utf8).unwrap();
        assert_eq!(result.selector, "0x70a08231");
    }

    #[test]
    fn test_hex_input_with_and_without_prefix() {
        let with = keccak256_hash("0xdeadbeef", InputKind::Hex).unwrap();
        let without = keccak256_hash("deadbeef", InputKind::Hex).unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn test_invalid_hex_rejected() {
        assert!(matches!(
            keccak256_hash("0xzz", InputKind::Hex),
            Err(Error::InvalidHex)
        ));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(
            keccak256_hash("   ", InputKind::Utf8),
            Err(Error::EmptyInput)
        ));
    }
}
