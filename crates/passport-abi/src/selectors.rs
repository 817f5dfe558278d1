/// Well-known function signatures and their selectors.
pub const COMMON_SELECTORS: &[(&str, &str)] = &[
    // ERC-20
    ("transfer(address,uint256)", "0xa9059cbb"),
    ("approve(address,uint256)", "0x095ea7b3"),
    ("balanceOf(address)", "0x70a08231"),
    ("allowance(address,address)", "0xdd62ed3e"),
    // ERC-721
    ("setApprovalForAll(address,bool)", "0xa22cb465"),
    ("ownerOf(uint256)", "0x6352211e"),
    ("safeTransferFrom(address,address,uint256)", "0x42842e0e"),
    ("transferFrom(address,address,uint256)", "0x23b872dd"),
    // Common metadata
    ("name()", "0x06fdde03"),
    ("symbol()", "0x95d89b41"),
    ("decimals()", "0x313ce567"),
];

/// Looks up the selector for a well-known signature.
pub fn selector_for(signature: &str) -> Option<&'static str> {
    COMMON_SELECTORS
        .iter()
        .find(|(sig, _)| *sig == signature)
        .map(|(_, selector)| *selector)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{keccak256_hash, InputKind};

    #[test]
    fn test_selector_lookup() {
        assert_eq!(selector_for("transfer(address,uint256)"), Some("0xa9059cbb"));
        assert_eq!(selector_for("mint(uint256)"), None);
    }

    #[test]
    fn test_table_matches_keccak() {
        for (signature, selector) in COMMON_SELECTORS {
            let computed = keccak256_hash(signature, InputKind::Utf8).unwrap();
            assert_eq!(computed.selector, *selector, "mismatch for {signature}");
        }
    }
}
