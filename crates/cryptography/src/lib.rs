//! Cryptographic primitives for stellar-data.
//!
//! This crate provides the ed25519 [`KeyPair`] used to sign transactions, the
//! strkey codec for `G...`/`S...`/`M...` identifiers, and SHA-256 hashing.

pub mod hash;
mod key_pair;
pub mod strkey;

pub use hash::sha256;
pub use key_pair::KeyPair;

use thiserror::Error;

/// Errors raised by key handling and strkey decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid strkey: {0}")]
    InvalidStrKey(String),

    #[error("expected a {expected}, found a well-formed {found}")]
    UnexpectedStrKey {
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("signature verification failed")]
    InvalidSignature,

    #[error("key pair {0} has no secret seed and cannot sign")]
    MissingSecret(String),
}

/// Result type for cryptographic operations.
pub type Result<T> = std::result::Result<T, Error>;
