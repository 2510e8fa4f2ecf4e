//! Transaction memos.

use std::fmt;

use crate::{CoreError, CoreResult};
use stellar_data_config::MAX_MEMO_TEXT_LENGTH;
use stellar_data_io::{IoError, IoResult, XdrCodec, XdrReader, XdrWriter};

/// Optional note attached to a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Memo {
    #[default]
    None,
    /// Up to 28 bytes. Usually UTF-8, but the network does not require it.
    Text(Vec<u8>),
    Id(u64),
    Hash([u8; 32]),
    Return([u8; 32]),
}

impl Memo {
    /// A text memo of at most 28 bytes.
    pub fn text<T: Into<Vec<u8>>>(text: T) -> CoreResult<Self> {
        let text = text.into();
        if text.len() > MAX_MEMO_TEXT_LENGTH {
            return Err(CoreError::MemoTooLong(text.len()));
        }
        Ok(Memo::Text(text))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Memo::None)
    }
}

impl fmt::Display for Memo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Memo::None => write!(f, "none"),
            Memo::Text(text) => match std::str::from_utf8(text) {
                Ok(text) => write!(f, "text {text:?}"),
                Err(_) => write!(f, "text 0x{}", hex::encode(text)),
            },
            Memo::Id(id) => write!(f, "id {id}"),
            Memo::Hash(hash) => write!(f, "hash {}", hex::encode(hash)),
            Memo::Return(hash) => write!(f, "return {}", hex::encode(hash)),
        }
    }
}

impl XdrCodec for Memo {
    fn encode(&self, writer: &mut XdrWriter) -> IoResult<()> {
        match self {
            Memo::None => writer.write_i32(0),
            Memo::Text(text) => {
                writer.write_i32(1);
                writer.write_var_opaque(text, MAX_MEMO_TEXT_LENGTH)?;
            }
            Memo::Id(id) => {
                writer.write_i32(2);
                writer.write_u64(*id);
            }
            Memo::Hash(hash) => {
                writer.write_i32(3);
                writer.write_fixed_opaque(hash);
            }
            Memo::Return(hash) => {
                writer.write_i32(4);
                writer.write_fixed_opaque(hash);
            }
        }
        Ok(())
    }

    fn decode(reader: &mut XdrReader<'_>) -> IoResult<Self> {
        match reader.read_i32()? {
            0 => Ok(Memo::None),
            1 => Ok(Memo::Text(reader.read_var_opaque(MAX_MEMO_TEXT_LENGTH)?)),
            2 => Ok(Memo::Id(reader.read_u64()?)),
            3 => Ok(Memo::Hash(reader.read_fixed_opaque::<32>()?)),
            4 => Ok(Memo::Return(reader.read_fixed_opaque::<32>()?)),
            other => Err(IoError::unknown_discriminant("MemoType", other)),
        }
    }
}
