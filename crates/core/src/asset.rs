//! Assets referenced by operation results.

use crate::{xdr, AccountId};
use std::fmt;

/// Native lumens or an issued credit asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Asset {
    Native,
    CreditAlphanum4 { code: [u8; 4], issuer: AccountId },
    CreditAlphanum12 { code: [u8; 12], issuer: AccountId },
}

impl Asset {
    /// Asset code with trailing NUL padding removed; `XLM` for the native asset.
    pub fn code(&self) -> String {
        let raw: &[u8] = match self {
            Asset::Native => return "XLM".to_string(),
            Asset::CreditAlphanum4 { code, .. } => code,
            Asset::CreditAlphanum12 { code, .. } => code,
        };
        let end = raw.iter().position(|b| *b == 0).unwrap_or(raw.len());
        String::from_utf8_lossy(&raw[..end]).into_owned()
    }

    pub fn issuer(&self) -> Option<&AccountId> {
        match self {
            Asset::Native => None,
            Asset::CreditAlphanum4 { issuer, .. } | Asset::CreditAlphanum12 { issuer, .. } => {
                Some(issuer)
            }
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.issuer() {
            None => write!(f, "native"),
            Some(issuer) => write!(f, "{}:{}", self.code(), issuer),
        }
    }
}

impl From<&xdr::Asset> for Asset {
    fn from(asset: &xdr::Asset) -> Self {
        match asset {
            xdr::Asset::Native => Asset::Native,
            xdr::Asset::CreditAlphanum4(credit) => Asset::CreditAlphanum4 {
                code: credit.asset_code.0,
                issuer: (&credit.issuer).into(),
            },
            xdr::Asset::CreditAlphanum12(credit) => Asset::CreditAlphanum12 {
                code: credit.asset_code.0,
                issuer: (&credit.issuer).into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_code_strips_padding() {
        let issuer = AccountId::from_bytes([0u8; 32]);
        let asset = Asset::CreditAlphanum4 {
            code: *b"NUC\0",
            issuer,
        };
        assert_eq!(asset.code(), "NUC");
        assert_eq!(asset.to_string(), format!("NUC:{issuer}"));
        assert_eq!(Asset::Native.to_string(), "native");
        assert_eq!(Asset::Native.code(), "XLM");
    }
}
