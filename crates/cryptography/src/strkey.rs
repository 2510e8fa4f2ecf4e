//! Strkey encoding (SEP-23) for the identifiers this client handles.
//!
//! Encoding and checksum validation are done by `stellar-strkey`; this module
//! narrows it to the three kinds used here and maps its errors.

use crate::{Error, Result};
use stellar_strkey::{ed25519, Strkey};
use zeroize::{Zeroize, Zeroizing};

/// Encodes an ed25519 public key as a `G...` account id.
pub fn encode_account_id(public_key: &[u8; 32]) -> String {
    ed25519::PublicKey(*public_key).to_string()
}

/// Decodes a `G...` account id into its ed25519 public key.
pub fn decode_account_id(encoded: &str) -> Result<[u8; 32]> {
    ed25519::PublicKey::from_string(encoded)
        .map(|key| key.0)
        .map_err(|_| rejection("account id", encoded))
}

/// Encodes an ed25519 seed as a `S...` secret.
pub fn encode_secret_seed(seed: &[u8; 32]) -> Zeroizing<String> {
    let mut key = ed25519::PrivateKey(*seed);
    let encoded = Zeroizing::new(key.to_string());
    key.0.zeroize();
    encoded
}

/// Decodes a `S...` secret into its ed25519 seed.
pub fn decode_secret_seed(encoded: &str) -> Result<Zeroizing<[u8; 32]>> {
    let mut key =
        ed25519::PrivateKey::from_string(encoded).map_err(|_| rejection("secret seed", encoded))?;
    let seed = Zeroizing::new(key.0);
    key.0.zeroize();
    Ok(seed)
}

/// Encodes a muxed account (`M...`): the ed25519 key followed by the big-endian id.
pub fn encode_muxed_account(public_key: &[u8; 32], id: u64) -> String {
    ed25519::MuxedAccount {
        ed25519: *public_key,
        id,
    }
    .to_string()
}

/// Decodes a `M...` muxed account into its ed25519 key and id.
pub fn decode_muxed_account(encoded: &str) -> Result<([u8; 32], u64)> {
    ed25519::MuxedAccount::from_string(encoded)
        .map(|account| (account.ed25519, account.id))
        .map_err(|_| rejection("muxed account", encoded))
}

/// Tells a well-formed strkey of another kind apart from a malformed one.
/// Secret seeds are only ever named, never echoed.
fn rejection(expected: &'static str, encoded: &str) -> Error {
    match Strkey::from_string(encoded) {
        Ok(other) => Error::UnexpectedStrKey {
            expected,
            found: kind_name(&other),
        },
        Err(err) => Error::InvalidStrKey(format!("{expected}: {err}")),
    }
}

fn kind_name(strkey: &Strkey) -> &'static str {
    match strkey {
        Strkey::PublicKeyEd25519(_) => "account id",
        Strkey::PrivateKeyEd25519(_) => "secret seed",
        Strkey::MuxedAccountEd25519(_) => "muxed account",
        Strkey::PreAuthTx(_) => "pre-authorized transaction",
        Strkey::HashX(_) => "sha256 hash",
        Strkey::SignedPayloadEd25519(_) => "signed payload",
        Strkey::Contract(_) => "contract",
        Strkey::LiquidityPool(_) => "liquidity pool",
        Strkey::ClaimableBalance(_) => "claimable balance",
    }
}
