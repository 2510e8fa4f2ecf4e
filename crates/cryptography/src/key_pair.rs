//! Ed25519 key pairs.

use crate::{strkey, Error, Result};
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use rand::rngs::OsRng;
use std::fmt;
use zeroize::Zeroizing;

/// An ed25519 public key with an optional secret half.
///
/// The secret seed is zeroized when the key pair is dropped and is never
/// part of the `Debug` output.
#[derive(Clone)]
pub struct KeyPair {
    public: VerifyingKey,
    secret: Option<SigningKey>,
}

impl KeyPair {
    /// Generates a new random key pair.
    pub fn random() -> Self {
        let secret = SigningKey::generate(&mut OsRng);
        Self {
            public: secret.verifying_key(),
            secret: Some(secret),
        }
    }

    /// Derives a key pair from a raw 32-byte seed.
    pub fn from_raw_seed(seed: &[u8; 32]) -> Self {
        let secret = SigningKey::from_bytes(seed);
        Self {
            public: secret.verifying_key(),
            secret: Some(secret),
        }
    }

    /// Derives a key pair from a `S...` secret seed.
    pub fn from_secret_seed(seed: &str) -> Result<Self> {
        let raw = strkey::decode_secret_seed(seed.trim())?;
        Ok(Self::from_raw_seed(&raw))
    }

    /// Creates a verify-only key pair from a `G...` account id.
    pub fn from_account_id(account_id: &str) -> Result<Self> {
        let raw = strkey::decode_account_id(account_id)?;
        Self::from_public_key(&raw)
    }

    /// Creates a verify-only key pair from raw public key bytes.
    pub fn from_public_key(public_key: &[u8; 32]) -> Result<Self> {
        let public = VerifyingKey::from_bytes(public_key)
            .map_err(|e| Error::InvalidKey(format!("invalid ed25519 public key: {e}")))?;
        Ok(Self {
            public,
            secret: None,
        })
    }

    pub fn public_key(&self) -> [u8; 32] {
        self.public.to_bytes()
    }

    /// The `G...` account id of this key.
    pub fn account_id(&self) -> String {
        strkey::encode_account_id(&self.public.to_bytes())
    }

    /// The `S...` secret seed, if this key pair can sign.
    pub fn secret_seed(&self) -> Option<Zeroizing<String>> {
        self.secret
            .as_ref()
            .map(|secret| strkey::encode_secret_seed(&secret.to_bytes()))
    }

    pub fn can_sign(&self) -> bool {
        self.secret.is_some()
    }

    /// Last four bytes of the public key, used as the signature hint.
    pub fn signature_hint(&self) -> [u8; 4] {
        let public = self.public.to_bytes();
        let mut hint = [0u8; 4];
        hint.copy_from_slice(&public[28..]);
        hint
    }

    /// Signs `message` with the secret seed.
    pub fn sign(&self, message: &[u8]) -> Result<[u8; 64]> {
        let secret = self
            .secret
            .as_ref()
            .ok_or_else(|| Error::MissingSecret(self.account_id()))?;
        Ok(secret.sign(message).to_bytes())
    }

    /// Verifies an ed25519 signature made by this key.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<()> {
        let signature: [u8; 64] = signature
            .try_into()
            .map_err(|_| Error::InvalidSignature)?;
        self.public
            .verify(message, &Signature::from_bytes(&signature))
            .map_err(|_| Error::InvalidSignature)
    }
}

impl PartialEq for KeyPair {
    fn eq(&self, other: &Self) -> bool {
        self.public == other.public
    }
}

impl Eq for KeyPair {}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("account_id", &self.account_id())
            .field("can_sign", &self.can_sign())
            .finish()
    }
}
