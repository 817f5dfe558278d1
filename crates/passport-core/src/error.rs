use thiserror::Error;

/// Errors produced by the core helpers.
#[derive(Error, Debug)]
pub enum Error {
    /// A block number was requested but none was supplied.
    #[error("Block number is required")]
    MissingBlockNumber,

    /// The supplied block number was neither decimal nor 0x-prefixed hex.
    #[error("Invalid block number format. Use decimal or hex (0x) format")]
    InvalidBlockNumber,

    /// An unknown network name was supplied.
    #[error("Unknown network '{0}', expected 'testnet' or 'mainnet'")]
    UnknownNetwork(String),
}
