use crate::{IoError, IoResult, XdrCodec};

/// Cursor over an XDR-encoded buffer.
///
/// Every item occupies a multiple of four bytes; integers are big-endian and
/// opaque data is zero-padded to the next four-byte boundary.
pub struct XdrReader<'a> {
    memory: &'a [u8],
    pos: usize,
}

impl<'a> XdrReader<'a> {
    pub fn new(memory: &'a [u8]) -> Self {
        Self { memory, pos: 0 }
    }

    #[inline(always)]
    fn ensure_position(&self, move_by: usize) -> IoResult<()> {
        if move_by > self.remaining() {
            Err(IoError::UnexpectedEof {
                needed: move_by,
                remaining: self.remaining(),
            })
        } else {
            Ok(())
        }
    }

    #[inline(always)]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.memory.len() - self.pos
    }

    /// Fails unless the whole buffer has been consumed.
    pub fn finish(&self) -> IoResult<()> {
        match self.remaining() {
            0 => Ok(()),
            n => Err(IoError::TrailingBytes(n)),
        }
    }

    fn read_array<const N: usize>(&mut self) -> IoResult<[u8; N]> {
        self.ensure_position(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.memory[self.pos..self.pos + N]);
        self.pos += N;
        Ok(out)
    }

    #[inline(always)]
    pub fn read_u32(&mut self) -> IoResult<u32> {
        self.read_array::<4>().map(u32::from_be_bytes)
    }

    #[inline(always)]
    pub fn read_i32(&mut self) -> IoResult<i32> {
        self.read_array::<4>().map(i32::from_be_bytes)
    }

    #[inline(always)]
    pub fn read_u64(&mut self) -> IoResult<u64> {
        self.read_array::<8>().map(u64::from_be_bytes)
    }

    #[inline(always)]
    pub fn read_i64(&mut self) -> IoResult<i64> {
        self.read_array::<8>().map(i64::from_be_bytes)
    }

    pub fn read_bool(&mut self) -> IoResult<bool> {
        match self.read_u32()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(IoError::invalid_data(format!(
                "invalid boolean value {other}"
            ))),
        }
    }

    fn skip_padding(&mut self, length: usize) -> IoResult<()> {
        let padding = (4 - length % 4) % 4;
        self.ensure_position(padding)?;
        if self.memory[self.pos..self.pos + padding]
            .iter()
            .any(|b| *b != 0)
        {
            return Err(IoError::InvalidPadding);
        }
        self.pos += padding;
        Ok(())
    }

    /// Reads `opaque[N]`.
    pub fn read_fixed_opaque<const N: usize>(&mut self) -> IoResult<[u8; N]> {
        let value = self.read_array::<N>()?;
        self.skip_padding(N)?;
        Ok(value)
    }

    /// Reads `opaque<max>`.
    pub fn read_var_opaque(&mut self, max: usize) -> IoResult<Vec<u8>> {
        let length = self.read_length(max)?;
        self.ensure_position(length)?;
        let data = self.memory[self.pos..self.pos + length].to_vec();
        self.pos += length;
        self.skip_padding(length)?;
        Ok(data)
    }

    /// Reads `string<max>`; the bytes must be UTF-8.
    pub fn read_string(&mut self, max: usize) -> IoResult<String> {
        let bytes = self.read_var_opaque(max)?;
        String::from_utf8(bytes).map_err(|_| IoError::invalid_data("invalid UTF-8 sequence"))
    }

    /// Reads `T*`, a boolean presence flag followed by the value.
    pub fn read_optional<T: XdrCodec>(&mut self) -> IoResult<Option<T>> {
        if self.read_bool()? {
            T::decode(self).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Reads `T<max>`, a length prefix followed by the elements.
    pub fn read_vec<T: XdrCodec>(&mut self, max: usize) -> IoResult<Vec<T>> {
        let count = self.read_length(max)?;
        // Each element takes at least four bytes.
        if count > self.remaining() / 4 {
            return Err(IoError::UnexpectedEof {
                needed: count * 4,
                remaining: self.remaining(),
            });
        }
        let mut items = Vec::with_capacity(count);
        for _ in 0..count {
            items.push(T::decode(self)?);
        }
        Ok(items)
    }

    fn read_length(&mut self, max: usize) -> IoResult<usize> {
        let length = self.read_u32()? as usize;
        if length > max {
            return Err(IoError::LengthExceeded { length, max });
        }
        Ok(length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_integers_big_endian() {
        let data = [
            0x00, 0x00, 0x00, 0x2A, // u32
            0xFF, 0xFF, 0xFF, 0xFF, // i32 -1
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x64, // i64 100
        ];
        let mut reader = XdrReader::new(&data);
        assert_eq!(reader.read_u32().unwrap(), 42);
        assert_eq!(reader.read_i32().unwrap(), -1);
        assert_eq!(reader.read_i64().unwrap(), 100);
        assert!(reader.finish().is_ok());
    }

    #[test]
    fn test_read_past_end() {
        let data = [0x00, 0x00, 0x01];
        let mut reader = XdrReader::new(&data);
        assert_eq!(
            reader.read_u32(),
            Err(IoError::UnexpectedEof {
                needed: 4,
                remaining: 3
            })
        );
    }

    #[test]
    fn test_read_string_with_padding() {
        let data = [0, 0, 0, 3, b'a', b'b', b'c', 0];
        let mut reader = XdrReader::new(&data);
        assert_eq!(reader.read_string(64).unwrap(), "abc");
        assert_eq!(reader.position(), 8);
    }

    #[test]
    fn test_non_zero_padding_rejected() {
        let data = [0, 0, 0, 1, b'a', 1, 0, 0];
        let mut reader = XdrReader::new(&data);
        assert_eq!(reader.read_var_opaque(64), Err(IoError::InvalidPadding));
    }

    #[test]
    fn test_length_bound_enforced() {
        let data = [0, 0, 0, 65];
        let mut reader = XdrReader::new(&data);
        assert_eq!(
            reader.read_var_opaque(64),
            Err(IoError::LengthExceeded { length: 65, max: 64 })
        );
    }

    #[test]
    fn test_invalid_bool() {
        let data = [0, 0, 0, 2];
        let mut reader = XdrReader::new(&data);
        assert!(matches!(reader.read_bool(), Err(IoError::InvalidData(_))));
    }

    #[test]
    fn test_trailing_bytes_reported() {
        let data = [0, 0, 0, 1, 0, 0, 0, 0];
        let mut reader = XdrReader::new(&data);
        reader.read_u32().unwrap();
        assert_eq!(reader.finish(), Err(IoError::TrailingBytes(4)));
    }
}
