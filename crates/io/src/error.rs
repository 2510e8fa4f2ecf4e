//! Error types for XDR encoding and decoding.

use thiserror::Error;

/// Errors raised while reading or writing XDR data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IoError {
    /// The input ended before the value was complete.
    #[error("unexpected end of data: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof {
        /// Bytes required by the read.
        needed: usize,
        /// Bytes left in the input.
        remaining: usize,
    },

    /// A variable-length item is longer than its declared bound.
    #[error("length {length} exceeds maximum of {max}")]
    LengthExceeded {
        /// Actual length.
        length: usize,
        /// Declared bound.
        max: usize,
    },

    /// A union discriminant or enum value is not defined for its type.
    #[error("unknown {type_name} discriminant {value}")]
    UnknownDiscriminant {
        /// XDR type being decoded.
        type_name: &'static str,
        /// Value found on the wire.
        value: i32,
    },

    /// Padding bytes after an opaque or string were not zero.
    #[error("non-zero padding bytes")]
    InvalidPadding,

    /// Bytes left over after the top-level value was decoded.
    #[error("{0} trailing bytes after value")]
    TrailingBytes(usize),

    /// Structurally invalid data.
    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl IoError {
    /// Create an invalid data error.
    pub fn invalid_data<S: Into<String>>(message: S) -> Self {
        Self::InvalidData(message.into())
    }

    /// Create an unknown discriminant error.
    pub fn unknown_discriminant(type_name: &'static str, value: i32) -> Self {
        Self::UnknownDiscriminant { type_name, value }
    }
}

/// Result type for XDR operations.
pub type IoResult<T> = std::result::Result<T, IoError>;
