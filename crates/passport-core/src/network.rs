use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// The Immutable zkEVM network a session is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// imtbl-zkevm-testnet, chain id 13473
    #[default]
    Testnet,
    /// imtbl-zkevm-mainnet, chain id 13371
    Mainnet,
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Testnet => write!(f, "testnet"),
            Network::Mainnet => write!(f, "mainnet"),
        }
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "testnet" | "sandbox" => Ok(Network::Testnet),
            "mainnet" | "production" => Ok(Network::Mainnet),
            other => Err(Error::UnknownNetwork(other.to_string())),
        }
    }
}

/// Endpoint set for one network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Human-readable network name.
    pub name: &'static str,
    /// Chain name as used in indexer API paths.
    pub chain_name: &'static str,
    /// EIP-155 chain id.
    pub chain_id: u64,
    /// Base URL of the Immutable REST API.
    pub api_base_url: &'static str,
    /// Base URL of the block explorer.
    pub explorer_base_url: &'static str,
    /// JSON-RPC endpoint.
    pub rpc_url: &'static str,
}

/// Endpoint table, testnet first.
pub const NETWORK_CONFIGS: [NetworkConfig; 2] = [
    NetworkConfig {
        name: "Testnet",
        chain_name: "imtbl-zkevm-testnet",
        chain_id: 13473,
        api_base_url: "https://api.sandbox.immutable.com",
        explorer_base_url: "https://explorer.testnet.immutable.com",
        rpc_url: "https://rpc.testnet.immutable.com",
    },
    NetworkConfig {
        name: "Mainnet",
        chain_name: "imtbl-zkevm-mainnet",
        chain_id: 13371,
        api_base_url: "https://api.immutable.com",
        explorer_base_url: "https://explorer.immutable.com",
        rpc_url: "https://rpc.immutable.com",
    },
];

/// Returns the endpoint configuration for the given network.
pub fn network_config(network: Network) -> &'static NetworkConfig {
    match network {
        Network::Testnet => &NETWORK_CONFIGS[0],
        Network::Mainnet => &NETWORK_CONFIGS[1],
    }
}
