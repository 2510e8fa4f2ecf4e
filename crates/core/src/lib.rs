//! # Stellar Data Core
//!
//! Ledger model for the stellar-data client.
//!
//! This crate provides the transaction types needed to write account data
//! entries, the signing envelope, and a decoder for the `TransactionResult`
//! blobs Horizon returns.
//!
//! ## Features
//!
//! - **Accounts**: `AccountId` and muxed `MuxedAccount` sources
//! - **Transactions**: `ManageData` operations, memos, time bounds and signed envelopes
//! - **Builders**: `TransactionBuilder` for fee and sequence handling
//! - **Results**: typed decoding of transaction and operation results
//!
//! ## Example
//!
//! ```rust,no_run
//! use stellar_data_core::{Network, Operation, TransactionBuilder, TransactionEnvelope};
//! use stellar_data_cryptography::KeyPair;
//!
//! let signer = KeyPair::random();
//! let tx = TransactionBuilder::new((&signer).into(), 1234)
//!     .add_operation(Operation::manage_data("example_key", Some(b"example_value")).unwrap())
//!     .build()
//!     .unwrap();
//! let mut envelope = TransactionEnvelope::new(tx);
//! envelope.sign(&signer, &Network::testnet()).unwrap();
//! ```

/// Account identifiers
pub mod account;
/// Assets referenced in results
pub mod asset;
/// Builder pattern implementations
pub mod builders;
/// Core error types
pub mod error;
/// Network passphrases and ids
pub mod network;
/// Transaction result decoding
pub mod result;
/// Transactions and envelopes
pub mod transaction;

pub use account::{AccountId, MuxedAccount};
pub use asset::Asset;
pub use builders::TransactionBuilder;
pub use error::{CoreError, CoreResult, DecodeError};
pub use network::Network;
pub use result::{
    InnerTransactionResultBody, ManageDataResultCode, OperationResult, OperationResultCode,
    TransactionResult, TransactionResultBody, TransactionResultCode, TransactionResultSummary,
};
pub use transaction::{
    DecoratedSignature, ManageDataOp, Memo, Operation, OperationBody, OperationType,
    Preconditions, TimeBounds, Transaction, TransactionEnvelope,
};

/// Generated protocol types used for result decoding.
pub use stellar_xdr::curr as xdr;

use base64::{engine::general_purpose, Engine as _};
use stellar_data_io::{XdrCodec, XdrCodecExt};

/// Decodes a standard base64 XDR blob into `T`, which must span all of it.
pub fn decode_base64<T: XdrCodec>(encoded: &str) -> Result<T, DecodeError> {
    Ok(T::from_xdr(&base64_bytes(encoded)?)?)
}

/// Strips surrounding whitespace and decodes standard base64.
pub(crate) fn base64_bytes(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    let encoded = encoded.trim();
    if encoded.is_empty() {
        return Err(DecodeError::Empty);
    }
    general_purpose::STANDARD
        .decode(encoded)
        .map_err(|e| DecodeError::Base64(e.to_string()))
}
