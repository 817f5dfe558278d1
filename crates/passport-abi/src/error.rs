use thiserror::Error;

/// Errors produced by the encoding helpers.
#[derive(Error, Debug)]
pub enum Error {
    /// The input string was empty or whitespace.
    #[error("Input is required")]
    EmptyInput,

    /// The input was declared hex but contained non-hex characters.
    #[error("Invalid hex input")]
    InvalidHex,

    /// No function signature was supplied.
    #[error("Function signature is required")]
    EmptySignature,

    /// Calldata was shorter than a 4-byte selector.
    #[error("Transaction data too short")]
    DataTooShort,

    /// The signature or ABI fragment could not be parsed.
    #[error("Failed to parse signature: {0}")]
    Signature(String),

    /// A parameter value could not be coerced to its Solidity type.
    #[error("Invalid parameter for {ty}: {reason}")]
    Parameter {
        /// Expected Solidity type.
        ty: String,
        /// Coercion failure detail.
        reason: String,
    },

    /// ABI encoding failed.
    #[error("Encoding failed: {0}")]
    Encode(String),

    /// ABI decoding failed.
    #[error("Decoding failed: {0}")]
    Decode(String),

    /// Parameters JSON was not an array.
    #[error("Parameters must be an array")]
    ParametersNotArray,

    /// Parameters JSON was malformed.
    #[error("Invalid JSON format")]
    InvalidJson(#[from] serde_json::Error),
}
