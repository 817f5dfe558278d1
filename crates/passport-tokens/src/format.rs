use alloy::primitives::U256;

use crate::{Result, TokenError};

/// Default ERC-20 decimals when the field is absent or malformed.
pub const DEFAULT_DECIMALS: u8 = 18;

/// Parses an explorer decimals string, falling back to 18.
///
/// Values outside 0..=18 are treated as malformed, matching the range check
/// on the RPC decode path.
pub fn parse_decimals(decimals: Option<&str>) -> u8 {
    decimals
        .and_then(|d| d.trim().parse::<u8>().ok())
        .filter(|d| *d <= DEFAULT_DECIMALS)
        .unwrap_or(DEFAULT_DECIMALS)
}

/// Parses a 0x-prefixed hex quantity; an empty reply (`0x` or `""`) is zero.
pub fn parse_hex_quantity(value: &str) -> Result<U256> {
    let clean = value.trim().strip_prefix("0x").unwrap_or(value.trim());
    if clean.is_empty() {
        return Ok(U256::ZERO);
    }
    U256::from_str_radix(clean, 16).map_err(|_| TokenError::InvalidQuantity(value.to_string()))
}

/// Scales a raw base-unit balance by `decimals`, rendering six fractional
/// digits. Integer math throughout, so large balances keep their precision.
pub fn format_units(raw: U256, decimals: u8) -> String {
    if decimals == 0 {
        return format!("{raw}.000000");
    }
    let scale = U256::from(10u64).pow(U256::from(decimals));
    let whole = raw / scale;
    let frac = raw % scale;

    let mut frac_digits = format!("{frac:0>width$}", width = decimals as usize);
    frac_digits.truncate(6);
    format!("{whole}.{frac_digits:0<6}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimals_fallback() {
        assert_eq!(parse_decimals(Some("6")), 6);
        assert_eq!(parse_decimals(Some("18")), 18);
        assert_eq!(parse_decimals(Some("not a number")), 18);
        assert_eq!(parse_decimals(Some("")), 18);
        assert_eq!(parse_decimals(None), 18);
    }

    #[test]
    fn test_parse_decimals_rejects_out_of_range() {
        // a decimals value past 18 would overflow the 10^decimals scale
        assert_eq!(parse_decimals(Some("19")), 18);
        assert_eq!(parse_decimals(Some("78")), 18);
        assert_eq!(parse_decimals(Some("255")), 18);
    }

    #[test]
    fn test_parse_hex_quantity() {
        assert_eq!(parse_hex_quantity("0x0").unwrap(), U256::ZERO);
        assert_eq!(parse_hex_quantity("0x").unwrap(), U256::ZERO);
        assert_eq!(parse_hex_quantity("").unwrap(), U256::ZERO);
        assert_eq!(
            parse_hex_quantity("0x38d7ea4c68000").unwrap(),
            U256::from(1_000_000_000_000_000u64)
        );
        assert!(parse_hex_quantity("0xzz").is_err());
    }

    #[test]
    fn test_format_units_wei_to_eth() {
        let one_eth = U256::from(1_000_000_000_000_000_000u128);
        assert_eq!(format_units(one_eth, 18), "1.000000");
        assert_eq!(format_units(one_eth / U256::from(2), 18), "0.500000");
        assert_eq!(format_units(U256::ZERO, 18), "0.000000");
    }

    #[test]
    fn test_format_units_small_decimals() {
        // USDC-style 6 decimals
        assert_eq!(format_units(U256::from(1_500_000u64), 6), "1.500000");
        // fewer than six fractional digits pads right
        assert_eq!(format_units(U256::from(15u64), 1), "1.500000");
        assert_eq!(format_units(U256::from(7u64), 0), "7.000000");
    }

    #[test]
    fn test_format_units_truncates_past_six_digits() {
        // 1.2345678... truncates, does not round
        let raw = U256::from(1_234_567_890_000_000_000u128);
        assert_eq!(format_units(raw, 18), "1.234567");
    }

    #[test]
    fn test_format_units_above_f64_precision() {
        // 2^90 base units at 18 decimals survives formatting exactly
        let raw = U256::from(1u8) << 90;
        assert_eq!(format_units(raw, 18), "1237940039.285380");
    }
}
