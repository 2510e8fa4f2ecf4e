//! XDR reader/writer integration tests

use proptest::prelude::*;
use stellar_data_io::{IoError, XdrCodecExt, XdrReader, XdrWriter};

#[test]
fn test_nested_vec_of_integers() {
    let mut writer = XdrWriter::new();
    writer.write_vec(&[1u32, 2, 3], 10).unwrap();
    let bytes = writer.into_bytes();
    assert_eq!(bytes.len(), 16);

    let mut reader = XdrReader::new(&bytes);
    let values: Vec<u32> = reader.read_vec(10).unwrap();
    assert_eq!(values, vec![1, 2, 3]);
    assert!(reader.finish().is_ok());
}

#[test]
fn test_vec_count_larger_than_input_is_eof() {
    // Claims 1000 elements but carries none.
    let bytes = [0, 0, 0x03, 0xE8];
    let mut reader = XdrReader::new(&bytes);
    let result: Result<Vec<u32>, _> = reader.read_vec(usize::MAX);
    assert!(matches!(result, Err(IoError::UnexpectedEof { .. })));
}

#[test]
fn test_vec_bound_checked_before_elements() {
    let mut writer = XdrWriter::new();
    assert_eq!(
        writer.write_vec(&[0u64; 3], 2),
        Err(IoError::LengthExceeded { length: 3, max: 2 })
    );
}

#[test]
fn test_i64_from_xdr_requires_exact_length() {
    assert_eq!(i64::from_xdr(&[0, 0, 0, 0, 0, 0, 0, 100]), Ok(100));
    assert!(matches!(
        i64::from_xdr(&[0, 0, 0, 0, 0, 0, 100]),
        Err(IoError::UnexpectedEof { .. })
    ));
}

proptest! {
    #[test]
    fn prop_var_opaque_survives_encoding(data in proptest::collection::vec(any::<u8>(), 0..64)) {
        let mut writer = XdrWriter::new();
        writer.write_var_opaque(&data, 64).unwrap();
        let bytes = writer.into_bytes();
        prop_assert_eq!(bytes.len() % 4, 0);

        let mut reader = XdrReader::new(&bytes);
        prop_assert_eq!(reader.read_var_opaque(64).unwrap(), data);
        prop_assert!(reader.finish().is_ok());
    }

    #[test]
    fn prop_reader_never_panics_on_garbage(data in proptest::collection::vec(any::<u8>(), 0..128)) {
        let mut reader = XdrReader::new(&data);
        let _ = reader.read_string(64);
        let _ = reader.read_vec::<u64>(16);
        let _ = reader.read_optional::<i32>();
    }
}
