//! Stellar Data IO - XDR encoding primitives
//!
//! This crate provides the External Data Representation (RFC 4506) reader and
//! writer used for transaction envelopes and transaction results, plus the
//! [`XdrCodec`] trait every ledger type implements.

mod error;
mod xdr_codec;
mod xdr_reader;
mod xdr_writer;

pub use error::{IoError, IoResult};
pub use xdr_codec::{XdrCodec, XdrCodecExt};
pub use xdr_reader::XdrReader;
pub use xdr_writer::XdrWriter;
