//! Error types for the ledger model.

use stellar_data_io::IoError;
use thiserror::Error;

/// Errors raised while building, signing or encoding transactions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// XDR encoding failed
    #[error(transparent)]
    Io(#[from] IoError),

    /// Key or strkey handling failed
    #[error(transparent)]
    Crypto(#[from] stellar_data_cryptography::Error),

    /// Data entry name is empty, too long or contains control characters
    #[error("Invalid data name: {message}")]
    InvalidDataName {
        /// What is wrong with the name
        message: String,
    },

    /// Data entry value is too long
    #[error("Invalid data value: {length} bytes exceeds maximum of {max}")]
    InvalidDataValue {
        /// Value length in bytes
        length: usize,
        /// Protocol limit
        max: usize,
    },

    /// Memo text is longer than 28 bytes
    #[error("Memo text of {0} bytes exceeds maximum of 28")]
    MemoTooLong(usize),

    /// A transaction needs at least one operation
    #[error("Transaction has no operations")]
    NoOperations,

    /// A transaction holds at most 100 operations
    #[error("Transaction has {0} operations, maximum is 100")]
    TooManyOperations(usize),

    /// Base fee times operation count does not fit in 32 bits
    #[error("Fee overflow: base fee {base_fee} x {operations} operations")]
    FeeOverflow {
        /// Fee per operation
        base_fee: u32,
        /// Number of operations
        operations: usize,
    },

    /// The account sequence number cannot be incremented
    #[error("Sequence number {0} cannot be incremented")]
    SequenceOverflow(i64),

    /// An envelope holds at most 20 signatures
    #[error("Envelope already carries the maximum of 20 signatures")]
    TooManySignatures,
}

/// Errors raised while decoding an encoded blob received from the network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Nothing to decode
    #[error("empty XDR input")]
    Empty,

    /// The blob is not valid base64
    #[error("invalid base64: {0}")]
    Base64(String),

    /// The bytes are not a valid value of the expected XDR type
    #[error("malformed XDR: {0}")]
    Xdr(String),
}

impl From<IoError> for DecodeError {
    fn from(err: IoError) -> Self {
        DecodeError::Xdr(err.to_string())
    }
}

impl From<stellar_xdr::curr::Error> for DecodeError {
    fn from(err: stellar_xdr::curr::Error) -> Self {
        DecodeError::Xdr(err.to_string())
    }
}

/// Result type for core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;
