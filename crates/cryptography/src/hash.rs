//! Hash functions.
//!
//! Stellar only uses SHA-256: network ids, transaction hashes and the
//! signature payload are all SHA-256 digests.

use sha2::{Digest, Sha256};

/// Computes SHA-256 hash of the input data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_network_id() {
        assert_eq!(
            hex::encode(sha256(b"Test SDF Network ; September 2015")),
            "cee0302d59844d32bdca915c8203dd44b33fbb7edc19051ea37abedf28ecd472"
        );
        assert_eq!(
            hex::encode(sha256(b"Public Global Stellar Network ; September 2015")),
            "7ac33997544e3175d266bd022439b22cdb16508c01163f26e5cb2a3e1045a979"
        );
    }
}
