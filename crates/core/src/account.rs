//! Account identifiers.

use crate::{xdr, CoreError};
use stellar_data_cryptography::{strkey, KeyPair};
use stellar_data_io::{IoError, IoResult, XdrCodec, XdrReader, XdrWriter};
use std::fmt;
use std::str::FromStr;

const KEY_TYPE_ED25519: i32 = 0;
const KEY_TYPE_MUXED_ED25519: i32 = 0x100;

/// An ed25519 account, written `G...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId([u8; 32]);

impl AccountId {
    pub fn from_bytes(key: [u8; 32]) -> Self {
        Self(key)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_strkey(&self) -> String {
        strkey::encode_account_id(&self.0)
    }
}

impl FromStr for AccountId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(strkey::decode_account_id(s.trim())?))
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_strkey())
    }
}

impl From<&KeyPair> for AccountId {
    fn from(key_pair: &KeyPair) -> Self {
        Self(key_pair.public_key())
    }
}

impl From<&xdr::AccountId> for AccountId {
    fn from(account: &xdr::AccountId) -> Self {
        let xdr::PublicKey::PublicKeyTypeEd25519(xdr::Uint256(key)) = &account.0;
        Self(*key)
    }
}

/// A transaction or operation source: a plain account or a muxed `M...` account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MuxedAccount {
    Ed25519(AccountId),
    Muxed { id: u64, account: AccountId },
}

impl MuxedAccount {
    /// The underlying ed25519 account.
    pub fn account_id(&self) -> AccountId {
        match self {
            MuxedAccount::Ed25519(account) => *account,
            MuxedAccount::Muxed { account, .. } => *account,
        }
    }

    pub fn to_strkey(&self) -> String {
        match self {
            MuxedAccount::Ed25519(account) => account.to_strkey(),
            MuxedAccount::Muxed { id, account } => {
                strkey::encode_muxed_account(account.as_bytes(), *id)
            }
        }
    }
}

impl From<AccountId> for MuxedAccount {
    fn from(account: AccountId) -> Self {
        MuxedAccount::Ed25519(account)
    }
}

impl From<&KeyPair> for MuxedAccount {
    fn from(key_pair: &KeyPair) -> Self {
        MuxedAccount::Ed25519(key_pair.into())
    }
}

impl FromStr for MuxedAccount {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('M') {
            let (key, id) = strkey::decode_muxed_account(s)?;
            Ok(MuxedAccount::Muxed {
                id,
                account: AccountId::from_bytes(key),
            })
        } else {
            Ok(MuxedAccount::Ed25519(s.parse()?))
        }
    }
}

impl fmt::Display for MuxedAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_strkey())
    }
}

impl XdrCodec for MuxedAccount {
    fn encode(&self, writer: &mut XdrWriter) -> IoResult<()> {
        match self {
            MuxedAccount::Ed25519(account) => {
                writer.write_i32(KEY_TYPE_ED25519);
                writer.write_fixed_opaque(account.as_bytes());
            }
            MuxedAccount::Muxed { id, account } => {
                writer.write_i32(KEY_TYPE_MUXED_ED25519);
                writer.write_u64(*id);
                writer.write_fixed_opaque(account.as_bytes());
            }
        }
        Ok(())
    }

    fn decode(reader: &mut XdrReader<'_>) -> IoResult<Self> {
        match reader.read_i32()? {
            KEY_TYPE_ED25519 => Ok(MuxedAccount::Ed25519(AccountId::from_bytes(
                reader.read_fixed_opaque::<32>()?,
            ))),
            KEY_TYPE_MUXED_ED25519 => {
                let id = reader.read_u64()?;
                let account = AccountId::from_bytes(reader.read_fixed_opaque::<32>()?);
                Ok(MuxedAccount::Muxed { id, account })
            }
            other => Err(IoError::unknown_discriminant("CryptoKeyType", other)),
        }
    }
}
