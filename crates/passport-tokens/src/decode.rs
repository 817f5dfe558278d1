use crate::format::parse_hex_quantity;

/// Decodes an ABI-encoded `string` return value (offset, length, bytes).
///
/// Returns `None` for empty replies, short data, or implausible lengths; the
/// length is capped below 100 since token names and symbols are short.
pub fn decode_string_return(response: Option<&str>) -> Option<String> {
    let response = response?;
    if response == "0x" || response.is_empty() {
        return None;
    }

    let hex_data = response.strip_prefix("0x").unwrap_or(response);
    if hex_data.len() < 128 {
        return None;
    }

    let length = usize::from_str_radix(&hex_data[64..128], 16).ok()?;
    if length == 0 || length >= 100 {
        return None;
    }

    let string_hex = hex_data.get(128..128 + length * 2)?;
    let bytes = hex::decode(string_hex).ok()?;
    let decoded = String::from_utf8_lossy(&bytes).replace('\0', "");
    Some(decoded)
}

/// Decodes a `decimals()` return value; anything absent, empty, malformed,
/// or outside 0..=18 becomes 18.
pub fn decode_decimals_return(response: Option<&str>) -> u8 {
    let Some(response) = response else {
        return 18;
    };
    if response == "0x" || response.is_empty() {
        return 18;
    }
    match parse_hex_quantity(response) {
        Ok(value) if value <= alloy::primitives::U256::from(18u8) => value.to::<u8>(),
        _ => 18,
    }
}
