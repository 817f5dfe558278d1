use alloy::dyn_abi::{DynSolType, DynSolValue, JsonAbiExt};
use alloy::json_abi::{Function, Param};
use serde_json::Value;

use crate::Error;

/// Encodes a contract call from a human-readable function signature.
///
/// The signature is an ABI fragment without the `function` keyword, e.g.
/// `transfer(address,uint256)`; parameter names are allowed. Parameters are
/// coerced from JSON values to their Solidity types, so `"0xabc..."`,
/// `"1000"`, `1000` and `true` all work where the types permit. The returned
/// calldata is 0x-prefixed hex including the selector.
pub fn encode_function_call(signature: &str, params: &[Value]) -> Result<String, Error> {
    if signature.trim().is_empty() {
        return Err(Error::EmptySignature);
    }

    let function =
        Function::parse(signature.trim()).map_err(|e| Error::Signature(e.to_string()))?;

    if params.len() != function.inputs.len() {
        return Err(Error::Encode(format!(
            "{} expects {} parameters, got {}",
            function.name,
            function.inputs.len(),
            params.len()
        )));
    }

    let values = coerce_values(&function.inputs, params)?;
    let data = function
        .abi_encode_input(&values)
        .map_err(|e| Error::Encode(e.to_string()))?;
    Ok(format!("0x{}", hex::encode(data)))
}

fn coerce_values(inputs: &[Param], params: &[Value]) -> Result<Vec<DynSolValue>, Error> {
    inputs
        .iter()
        .zip(params)
        .map(|(input, value)| {
            let canonical = input.selector_type();
            let ty: DynSolType = canonical
                .parse()
                .map_err(|e: alloy::dyn_abi::Error| Error::Signature(e.to_string()))?;
            // JSON strings coerce as-is; everything else via its JSON rendering
            let text = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            ty.coerce_str(&text).map_err(|e| Error::Parameter {
                ty: canonical.to_string(),
                reason: e.to_string(),
            })
        })
        .collect()
}

/// Parses a JSON parameter list for [`encode_function_call`].
///
/// An empty string is an empty list; anything that parses but is not an
/// array is rejected.
pub fn parse_parameters(parameters_json: &str) -> Result<Vec<Value>, Error> {
    if parameters_json.trim().is_empty() {
        return Ok(Vec::new());
    }
    let parameters: Value = serde_json::from_str(parameters_json)?;
    match parameters {
        Value::Array(values) => Ok(values),
        _ => Err(Error::ParametersNotArray),
    }
}
