//! Network identity used in transaction signatures.

use stellar_data_config::NetworkType;
use stellar_data_cryptography::sha256;
use std::fmt;

/// A Stellar network, identified by its passphrase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Network {
    passphrase: String,
}

impl Network {
    pub fn new<S: Into<String>>(passphrase: S) -> Self {
        Self {
            passphrase: passphrase.into(),
        }
    }

    pub fn public() -> Self {
        NetworkType::Public.into()
    }

    pub fn testnet() -> Self {
        NetworkType::Testnet.into()
    }

    pub fn futurenet() -> Self {
        NetworkType::Futurenet.into()
    }

    pub fn passphrase(&self) -> &str {
        &self.passphrase
    }

    /// SHA-256 of the passphrase; prefixes every signature payload.
    pub fn network_id(&self) -> [u8; 32] {
        sha256(self.passphrase.as_bytes())
    }
}

impl From<NetworkType> for Network {
    fn from(network: NetworkType) -> Self {
        Self::new(network.passphrase())
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.passphrase)
    }
}
