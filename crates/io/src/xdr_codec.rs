//! Codec traits for XDR types.

use crate::{IoResult, XdrReader, XdrWriter};
use base64::{engine::general_purpose, Engine as _};

/// Represents ledger objects with an XDR encoding.
pub trait XdrCodec: Sized {
    /// Writes the object to `writer`.
    fn encode(&self, writer: &mut XdrWriter) -> IoResult<()>;

    /// Reads the object from `reader`.
    fn decode(reader: &mut XdrReader<'_>) -> IoResult<Self>;
}

/// Extension methods for XDR objects.
pub trait XdrCodecExt: XdrCodec {
    /// Encodes the object to a byte vector.
    fn to_xdr(&self) -> IoResult<Vec<u8>> {
        let mut writer = XdrWriter::new();
        self.encode(&mut writer)?;
        Ok(writer.into_bytes())
    }

    /// Encodes the object and returns standard base64, the form Horizon uses.
    fn to_xdr_base64(&self) -> IoResult<String> {
        Ok(general_purpose::STANDARD.encode(self.to_xdr()?))
    }

    /// Decodes an object that must span the whole buffer.
    fn from_xdr(data: &[u8]) -> IoResult<Self> {
        let mut reader = XdrReader::new(data);
        let value = Self::decode(&mut reader)?;
        reader.finish()?;
        Ok(value)
    }
}

impl<T: XdrCodec> XdrCodecExt for T {}

macro_rules! impl_xdr_primitive {
    ($ty:ty, $write:ident, $read:ident) => {
        impl XdrCodec for $ty {
            fn encode(&self, writer: &mut XdrWriter) -> IoResult<()> {
                writer.$write(*self);
                Ok(())
            }

            fn decode(reader: &mut XdrReader<'_>) -> IoResult<Self> {
                reader.$read()
            }
        }
    };
}

impl_xdr_primitive!(u32, write_u32, read_u32);
impl_xdr_primitive!(i32, write_i32, read_i32);
impl_xdr_primitive!(u64, write_u64, read_u64);
impl_xdr_primitive!(i64, write_i64, read_i64);
impl_xdr_primitive!(bool, write_bool, read_bool);
