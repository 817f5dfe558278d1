use alloy::dyn_abi::{DynSolValue, JsonAbiExt};
use alloy::json_abi::JsonAbi;
use alloy::primitives::Selector;
use serde::Serialize;

use crate::Error;

/// One decoded call argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedArg {
    /// Parameter name from the ABI, or `paramN` when unnamed.
    pub name: String,
    /// Solidity type.
    pub ty: String,
    /// Rendered value.
    pub value: String,
}

/// A call decoded against a matching ABI entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedCall {
    /// Function name.
    pub function_name: String,
    /// Canonical function signature.
    pub function_signature: String,
    /// 0x-prefixed selector.
    pub selector: String,
    /// Decoded arguments in declaration order.
    pub args: Vec<DecodedArg>,
}

/// Selector-only decomposition used when no ABI matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BasicDecoded {
    /// 0x-prefixed selector.
    pub selector: String,
    /// Remaining parameter bytes as 0x-prefixed hex.
    pub parameters_hex: String,
    /// Parameter byte length.
    pub parameters_length: usize,
    /// Hint that an ABI would produce a richer result.
    pub note: String,
}

/// Result of [`decode_calldata`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DecodedData {
    /// Full decode against a provided ABI.
    Abi(DecodedCall),
    /// Selector/parameter split without an ABI.
    Basic(BasicDecoded),
}

/// Decodes calldata, against `abi_json` when supplied.
///
/// When the ABI is absent, does not parse, or has no function matching the
/// selector, decoding falls back to the basic selector/parameters split. Data
/// shorter than 4 bytes is an error in either mode.
pub fn decode_calldata(data: &str, abi_json: Option<&str>) -> Result<DecodedData, Error> {
    if data.trim().is_empty() {
        return Err(Error::EmptyInput);
    }
    let clean = data.trim().strip_prefix("0x").unwrap_or(data.trim());
    let bytes = hex::decode(clean).map_err(|_| Error::InvalidHex)?;
    if bytes.len() < 4 {
        return Err(Error::DataTooShort);
    }

    if let Some(abi_json) = abi_json.filter(|abi| !abi.trim().is_empty()) {
        if let Ok(call) = decode_with_abi(&bytes, abi_json) {
            return Ok(DecodedData::Abi(call));
        }
    }

    Ok(DecodedData::Basic(basic_decode(&bytes)))
}

fn decode_with_abi(bytes: &[u8], abi_json: &str) -> Result<DecodedCall, Error> {
    let abi: JsonAbi = serde_json::from_str(abi_json)?;
    let selector = Selector::from_slice(&bytes[..4]);
    let function = abi
        .functions()
        .find(|f| f.selector() == selector)
        .ok_or_else(|| Error::Decode("no function matching selector".to_string()))?;

    let values = function
        .abi_decode_input(&bytes[4..])
        .map_err(|e| Error::Decode(e.to_string()))?;

    let args = function
        .inputs
        .iter()
        .zip(values.iter())
        .enumerate()
        .map(|(index, (input, value))| DecodedArg {
            name: if input.name.is_empty() {
                format!("param{index}")
            } else {
                input.name.clone()
            },
            ty: input.selector_type().to_string(),
            value: render_value(value),
        })
        .collect();

    Ok(DecodedCall {
        function_name: function.name.clone(),
        function_signature: function.signature(),
        selector: format!("0x{}", hex::encode(selector)),
        args,
    })
}

fn basic_decode(bytes: &[u8]) -> BasicDecoded {
    BasicDecoded {
        selector: format!("0x{}", hex::encode(&bytes[..4])),
        parameters_hex: format!("0x{}", hex::encode(&bytes[4..])),
        parameters_length: bytes.len() - 4,
        note: "Basic decoding - provide ABI for detailed parameter parsing".to_string(),
    }
}

fn render_value(value: &DynSolValue) -> String {
    match value {
        DynSolValue::Address(address) => address.to_string(),
        DynSolValue::Bool(b) => b.to_string(),
        DynSolValue::Uint(u, _) => u.to_string(),
        DynSolValue::Int(i, _) => i.to_string(),
        DynSolValue::String(s) => s.clone(),
        DynSolValue::Bytes(bytes) => format!("0x{}", hex::encode(bytes)),
        DynSolValue::FixedBytes(word, size) => format!("0x{}", hex::encode(&word[..*size])),
        DynSolValue::Array(values)
        | DynSolValue::FixedArray(values)
        | DynSolValue::Tuple(values) => {
            let rendered: Vec<String> = values.iter().map(render_value).collect();
            format!("[{}]", rendered.join(", "))
        }
        other => format!("{other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ERC20_ABI: &str = r#"[
        {
            "type": "function",
            "name": "transfer",
            "inputs": [
                {"name": "to", "type": "address"},
                {"name": "amount", "type": "uint256"}
            ],
            "outputs": [{"name": "", "type": "bool"}],
            "stateMutability": "nonpayable"
        }
    ]"#;

    const TRANSFER_DATA: &str = "0xa9059cbb\
        000000000000000000000000acbe301e5b46f4dd532b74e209adac0c06d42f8c\
        00000000000000000000000000000000000000000000000000000000000003e8";

    fn transfer_data() -> String {
        TRANSFER_DATA.replace(char::is_whitespace, "")
    }

    #[test]
    fn test_decode_with_abi() {
        let decoded = decode_calldata(&transfer_data(), Some(ERC20_ABI)).unwrap();
        let DecodedData::Abi(call) = decoded else {
            panic!("expected ABI decode");
        };
        assert_eq!(call.function_name, "transfer");
        assert_eq!(call.function_signature, "transfer(address,uint256)");
        assert_eq!(call.selector, "0xa9059cbb");
        assert_eq!(call.args.len(), 2);
        assert_eq!(call.args[0].name, "to");
        assert_eq!(call.args[0].ty, "address");
        assert_eq!(
            call.args[0].value.to_lowercase(),
            "0xacbe301e5b46f4dd532b74e209adac0c06d42f8c"
        );
        assert_eq!(call.args[1].value, "1000");
    }

    #[test]
    fn test_decode_without_abi_falls_back() {
        let decoded = decode_calldata(&transfer_data(), None).unwrap();
        let DecodedData::Basic(basic) = decoded else {
            panic!("expected basic decode");
        };
        assert_eq!(basic.selector, "0xa9059cbb");
        assert_eq!(basic.parameters_length, 64);
        assert!(basic.parameters_hex.starts_with("0x000000"));
    }

    #[test]
    fn test_decode_unmatched_selector_falls_back() {
        // decimals() selector is not in the transfer-only ABI
        let decoded = decode_calldata("0x313ce567", Some(ERC20_ABI)).unwrap();
        assert!(matches!(decoded, DecodedData::Basic(_)));
    }

    #[test]
    fn test_decode_malformed_abi_falls_back() {
        let decoded = decode_calldata(&transfer_data(), Some("not an abi")).unwrap();
        assert!(matches!(decoded, DecodedData::Basic(_)));
    }

    #[test]
    fn test_decode_too_short() {
        assert!(matches!(
            decode_calldata("0xa905", None),
            Err(Error::DataTooShort)
        ));
    }

    #[test]
    fn test_decode_empty_and_invalid() {
        assert!(matches!(decode_calldata("", None), Err(Error::EmptyInput)));
        assert!(matches!(
            decode_calldata("0xzzzz", None),
            Err(Error::InvalidHex)
        ));
    }
}
