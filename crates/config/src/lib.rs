//! Stellar Data Configuration Module
//!
//! This module provides network constants, protocol limits and the client
//! settings shared by every crate in the workspace.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Passphrase of the public Stellar network.
pub const PUBLIC_NETWORK_PASSPHRASE: &str = "Public Global Stellar Network ; September 2015";
/// Passphrase of the Stellar test network.
pub const TESTNET_NETWORK_PASSPHRASE: &str = "Test SDF Network ; September 2015";
/// Passphrase of the Stellar future network.
pub const FUTURENET_NETWORK_PASSPHRASE: &str = "Test SDF Future Network ; October 2022";

/// Default Horizon endpoints
pub const PUBLIC_HORIZON_URL: &str = "https://horizon.stellar.org";
pub const TESTNET_HORIZON_URL: &str = "https://horizon-testnet.stellar.org";
pub const FUTURENET_HORIZON_URL: &str = "https://horizon-futurenet.stellar.org";

/// Fee per operation in stroops
pub const BASE_FEE: u32 = 100;

/// Protocol limits
pub const MAX_DATA_NAME_LENGTH: usize = 64;
pub const MAX_DATA_VALUE_LENGTH: usize = 64;
pub const MAX_MEMO_TEXT_LENGTH: usize = 28;
pub const MAX_OPERATIONS_PER_TRANSACTION: usize = 100;
pub const MAX_SIGNATURES_PER_ENVELOPE: usize = 20;

/// Size of an ed25519 signature in bytes
pub const SIGNATURE_SIZE: usize = 64;

/// Timeout applied to every Horizon request
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
/// Validity window for submitted transactions
pub const DEFAULT_TRANSACTION_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the signing seed when nothing else is configured.
pub const DEFAULT_SECRET_ENV: &str = "STELLAR_SECRET_KEY";

/// Well-known Stellar networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    Public,
    #[default]
    Testnet,
    Futurenet,
}

impl NetworkType {
    /// Gets the network passphrase
    pub fn passphrase(&self) -> &'static str {
        match self {
            NetworkType::Public => PUBLIC_NETWORK_PASSPHRASE,
            NetworkType::Testnet => TESTNET_NETWORK_PASSPHRASE,
            NetworkType::Futurenet => FUTURENET_NETWORK_PASSPHRASE,
        }
    }

    /// Gets the SDF-operated Horizon endpoint
    pub fn horizon_url(&self) -> &'static str {
        match self {
            NetworkType::Public => PUBLIC_HORIZON_URL,
            NetworkType::Testnet => TESTNET_HORIZON_URL,
            NetworkType::Futurenet => FUTURENET_HORIZON_URL,
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkType::Public => write!(f, "public"),
            NetworkType::Testnet => write!(f, "testnet"),
            NetworkType::Futurenet => write!(f, "futurenet"),
        }
    }
}

impl FromStr for NetworkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "public" | "pubnet" | "mainnet" => Ok(NetworkType::Public),
            "testnet" | "test" => Ok(NetworkType::Testnet),
            "futurenet" | "future" => Ok(NetworkType::Futurenet),
            _ => Err(format!("Unknown network type: {}", s)),
        }
    }
}

/// Settings for talking to a Horizon instance and building transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// Network the transactions are signed for
    pub network: NetworkType,
    /// Overrides the passphrase of `network` (private networks)
    pub network_passphrase: Option<String>,
    /// Overrides the Horizon endpoint of `network`
    pub horizon_url: Option<String>,
    /// Fee per operation in stroops
    pub base_fee: u32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Transaction validity window in seconds; 0 disables time bounds
    pub tx_timeout_secs: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            network: NetworkType::default(),
            network_passphrase: None,
            horizon_url: None,
            base_fee: BASE_FEE,
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            tx_timeout_secs: DEFAULT_TRANSACTION_TIMEOUT_SECS,
        }
    }
}

impl ClientSettings {
    /// Settings for the given network with default limits.
    pub fn for_network(network: NetworkType) -> Self {
        Self {
            network,
            ..Self::default()
        }
    }

    /// Effective network passphrase
    pub fn passphrase(&self) -> &str {
        self.network_passphrase
            .as_deref()
            .unwrap_or_else(|| self.network.passphrase())
    }

    /// Effective Horizon endpoint
    pub fn horizon_url(&self) -> &str {
        self.horizon_url
            .as_deref()
            .unwrap_or_else(|| self.network.horizon_url())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validity window for built transactions, `None` when disabled.
    pub fn transaction_timeout(&self) -> Option<Duration> {
        (self.tx_timeout_secs > 0).then(|| Duration::from_secs(self.tx_timeout_secs))
    }
}
