use crate::{IoError, IoResult, XdrCodec};

/// Growable buffer that writes values in XDR form.
#[derive(Debug, Default)]
pub struct XdrWriter {
    inner: Vec<u8>,
}

impl XdrWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.inner.clone()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.inner
    }

    pub fn write_u32(&mut self, value: u32) {
        self.inner.extend_from_slice(&value.to_be_bytes());
    }

    pub fn write_i32(&mut self, value: i32) {
        self.inner.extend_from_slice(&value.to_be_bytes());
    }

    pub fn write_u64(&mut self, value: u64) {
        self.inner.extend_from_slice(&value.to_be_bytes());
    }

    pub fn write_i64(&mut self, value: i64) {
        self.inner.extend_from_slice(&value.to_be_bytes());
    }

    pub fn write_bool(&mut self, value: bool) {
        self.write_u32(u32::from(value));
    }

    fn write_padding(&mut self, length: usize) {
        let padding = (4 - length % 4) % 4;
        self.inner.extend(std::iter::repeat(0u8).take(padding));
    }

    /// Writes `opaque[N]`.
    pub fn write_fixed_opaque(&mut self, data: &[u8]) {
        self.inner.extend_from_slice(data);
        self.write_padding(data.len());
    }

    /// Writes `opaque<max>`.
    pub fn write_var_opaque(&mut self, data: &[u8], max: usize) -> IoResult<()> {
        self.write_length(data.len(), max)?;
        self.write_fixed_opaque(data);
        Ok(())
    }

    /// Writes `string<max>`.
    pub fn write_string(&mut self, value: &str, max: usize) -> IoResult<()> {
        self.write_var_opaque(value.as_bytes(), max)
    }

    /// Writes `T*`.
    pub fn write_optional<T: XdrCodec>(&mut self, value: Option<&T>) -> IoResult<()> {
        match value {
            Some(value) => {
                self.write_bool(true);
                value.encode(self)
            }
            None => {
                self.write_bool(false);
                Ok(())
            }
        }
    }

    /// Writes `T<max>`.
    pub fn write_vec<T: XdrCodec>(&mut self, items: &[T], max: usize) -> IoResult<()> {
        self.write_length(items.len(), max)?;
        for item in items {
            item.encode(self)?;
        }
        Ok(())
    }

    fn write_length(&mut self, length: usize, max: usize) -> IoResult<()> {
        if length > max {
            return Err(IoError::LengthExceeded { length, max });
        }
        let length = u32::try_from(length)
            .map_err(|_| IoError::LengthExceeded { length, max: u32::MAX as usize })?;
        self.write_u32(length);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_integers_big_endian() {
        let mut writer = XdrWriter::new();
        writer.write_u32(42);
        writer.write_i32(-1);
        writer.write_i64(100);
        assert_eq!(
            writer.into_bytes(),
            vec![0, 0, 0, 42, 0xFF, 0xFF, 0xFF, 0xFF, 0, 0, 0, 0, 0, 0, 0, 100]
        );
    }

    #[test]
    fn test_write_string_pads_to_four_bytes() {
        let mut writer = XdrWriter::new();
        writer.write_string("example_key", 64).unwrap();
        let bytes = writer.into_bytes();
        assert_eq!(bytes.len(), 4 + 12);
        assert_eq!(&bytes[..4], &[0, 0, 0, 11]);
        assert_eq!(bytes[15], 0);
    }

    #[test]
    fn test_write_var_opaque_enforces_bound() {
        let mut writer = XdrWriter::new();
        let result = writer.write_var_opaque(&[0u8; 65], 64);
        assert_eq!(result, Err(IoError::LengthExceeded { length: 65, max: 64 }));
        assert!(writer.is_empty());
    }

    #[test]
    fn test_fixed_opaque_without_length_prefix() {
        let mut writer = XdrWriter::new();
        writer.write_fixed_opaque(&[1, 2, 3, 4]);
        assert_eq!(writer.len(), 4);
    }
}
