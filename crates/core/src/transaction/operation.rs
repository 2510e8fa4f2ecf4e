//! Operations carried by a transaction.

use crate::{CoreError, CoreResult, MuxedAccount};
use stellar_data_config::{MAX_DATA_NAME_LENGTH, MAX_DATA_VALUE_LENGTH};
use stellar_data_io::{IoError, IoResult, XdrCodec, XdrReader, XdrWriter};
use std::fmt;

/// Every operation type defined by the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum OperationType {
    CreateAccount = 0,
    Payment = 1,
    PathPaymentStrictReceive = 2,
    ManageSellOffer = 3,
    CreatePassiveSellOffer = 4,
    SetOptions = 5,
    ChangeTrust = 6,
    AllowTrust = 7,
    AccountMerge = 8,
    Inflation = 9,
    ManageData = 10,
    BumpSequence = 11,
    ManageBuyOffer = 12,
    PathPaymentStrictSend = 13,
    CreateClaimableBalance = 14,
    ClaimClaimableBalance = 15,
    BeginSponsoringFutureReserves = 16,
    EndSponsoringFutureReserves = 17,
    RevokeSponsorship = 18,
    Clawback = 19,
    ClawbackClaimableBalance = 20,
    SetTrustLineFlags = 21,
    LiquidityPoolDeposit = 22,
    LiquidityPoolWithdraw = 23,
    InvokeHostFunction = 24,
    ExtendFootprintTtl = 25,
    RestoreFootprint = 26,
}

impl OperationType {
    const ALL: [OperationType; 27] = [
        OperationType::CreateAccount,
        OperationType::Payment,
        OperationType::PathPaymentStrictReceive,
        OperationType::ManageSellOffer,
        OperationType::CreatePassiveSellOffer,
        OperationType::SetOptions,
        OperationType::ChangeTrust,
        OperationType::AllowTrust,
        OperationType::AccountMerge,
        OperationType::Inflation,
        OperationType::ManageData,
        OperationType::BumpSequence,
        OperationType::ManageBuyOffer,
        OperationType::PathPaymentStrictSend,
        OperationType::CreateClaimableBalance,
        OperationType::ClaimClaimableBalance,
        OperationType::BeginSponsoringFutureReserves,
        OperationType::EndSponsoringFutureReserves,
        OperationType::RevokeSponsorship,
        OperationType::Clawback,
        OperationType::ClawbackClaimableBalance,
        OperationType::SetTrustLineFlags,
        OperationType::LiquidityPoolDeposit,
        OperationType::LiquidityPoolWithdraw,
        OperationType::InvokeHostFunction,
        OperationType::ExtendFootprintTtl,
        OperationType::RestoreFootprint,
    ];

    pub fn from_i32(value: i32) -> Option<Self> {
        usize::try_from(value)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// Protocol name, e.g. `MANAGE_DATA`.
    pub fn name(&self) -> &'static str {
        match self {
            OperationType::CreateAccount => "CREATE_ACCOUNT",
            OperationType::Payment => "PAYMENT",
            OperationType::PathPaymentStrictReceive => "PATH_PAYMENT_STRICT_RECEIVE",
            OperationType::ManageSellOffer => "MANAGE_SELL_OFFER",
            OperationType::CreatePassiveSellOffer => "CREATE_PASSIVE_SELL_OFFER",
            OperationType::SetOptions => "SET_OPTIONS",
            OperationType::ChangeTrust => "CHANGE_TRUST",
            OperationType::AllowTrust => "ALLOW_TRUST",
            OperationType::AccountMerge => "ACCOUNT_MERGE",
            OperationType::Inflation => "INFLATION",
            OperationType::ManageData => "MANAGE_DATA",
            OperationType::BumpSequence => "BUMP_SEQUENCE",
            OperationType::ManageBuyOffer => "MANAGE_BUY_OFFER",
            OperationType::PathPaymentStrictSend => "PATH_PAYMENT_STRICT_SEND",
            OperationType::CreateClaimableBalance => "CREATE_CLAIMABLE_BALANCE",
            OperationType::ClaimClaimableBalance => "CLAIM_CLAIMABLE_BALANCE",
            OperationType::BeginSponsoringFutureReserves => "BEGIN_SPONSORING_FUTURE_RESERVES",
            OperationType::EndSponsoringFutureReserves => "END_SPONSORING_FUTURE_RESERVES",
            OperationType::RevokeSponsorship => "REVOKE_SPONSORSHIP",
            OperationType::Clawback => "CLAWBACK",
            OperationType::ClawbackClaimableBalance => "CLAWBACK_CLAIMABLE_BALANCE",
            OperationType::SetTrustLineFlags => "SET_TRUST_LINE_FLAGS",
            OperationType::LiquidityPoolDeposit => "LIQUIDITY_POOL_DEPOSIT",
            OperationType::LiquidityPoolWithdraw => "LIQUIDITY_POOL_WITHDRAW",
            OperationType::InvokeHostFunction => "INVOKE_HOST_FUNCTION",
            OperationType::ExtendFootprintTtl => "EXTEND_FOOTPRINT_TTL",
            OperationType::RestoreFootprint => "RESTORE_FOOTPRINT",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl XdrCodec for OperationType {
    fn encode(&self, writer: &mut XdrWriter) -> IoResult<()> {
        writer.write_i32(*self as i32);
        Ok(())
    }

    fn decode(reader: &mut XdrReader<'_>) -> IoResult<Self> {
        let value = reader.read_i32()?;
        Self::from_i32(value).ok_or_else(|| IoError::unknown_discriminant("OperationType", value))
    }
}

/// Sets, updates or deletes one named data entry on the source account.
///
/// A `None` value deletes the entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManageDataOp {
    data_name: String,
    data_value: Option<Vec<u8>>,
}

impl ManageDataOp {
    /// Validates the entry against protocol limits.
    ///
    /// Names are 1 to 64 bytes without control characters; values are at
    /// most 64 bytes.
    pub fn new<N: Into<String>>(data_name: N, data_value: Option<&[u8]>) -> CoreResult<Self> {
        let data_name = data_name.into();
        validate_data_name(&data_name)?;
        if let Some(value) = data_value {
            if value.len() > MAX_DATA_VALUE_LENGTH {
                return Err(CoreError::InvalidDataValue {
                    length: value.len(),
                    max: MAX_DATA_VALUE_LENGTH,
                });
            }
        }
        Ok(Self {
            data_name,
            data_value: data_value.map(<[u8]>::to_vec),
        })
    }

    /// An operation that removes the entry.
    pub fn delete<N: Into<String>>(data_name: N) -> CoreResult<Self> {
        Self::new(data_name, None)
    }

    pub fn data_name(&self) -> &str {
        &self.data_name
    }

    pub fn data_value(&self) -> Option<&[u8]> {
        self.data_value.as_deref()
    }
}

fn validate_data_name(name: &str) -> CoreResult<()> {
    if name.is_empty() {
        return Err(CoreError::InvalidDataName {
            message: "name is empty".to_string(),
        });
    }
    if name.len() > MAX_DATA_NAME_LENGTH {
        return Err(CoreError::InvalidDataName {
            message: format!(
                "{} bytes exceeds maximum of {}",
                name.len(),
                MAX_DATA_NAME_LENGTH
            ),
        });
    }
    if name.chars().any(char::is_control) {
        return Err(CoreError::InvalidDataName {
            message: "name contains control characters".to_string(),
        });
    }
    Ok(())
}

/// The payload of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationBody {
    ManageData(ManageDataOp),
}

impl OperationBody {
    pub fn operation_type(&self) -> OperationType {
        match self {
            OperationBody::ManageData(_) => OperationType::ManageData,
        }
    }
}

/// One operation, optionally with its own source account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub source_account: Option<MuxedAccount>,
    pub body: OperationBody,
}

impl Operation {
    pub fn new(body: OperationBody) -> Self {
        Self {
            source_account: None,
            body,
        }
    }

    /// A `ManageData` operation setting `name` to `value`.
    pub fn manage_data<N: Into<String>>(name: N, value: Option<&[u8]>) -> CoreResult<Self> {
        Ok(Self::new(OperationBody::ManageData(ManageDataOp::new(
            name, value,
        )?)))
    }

    pub fn with_source(mut self, source: MuxedAccount) -> Self {
        self.source_account = Some(source);
        self
    }
}

impl XdrCodec for Operation {
    fn encode(&self, writer: &mut XdrWriter) -> IoResult<()> {
        writer.write_optional(self.source_account.as_ref())?;
        self.body.operation_type().encode(writer)?;
        match &self.body {
            OperationBody::ManageData(op) => {
                writer.write_string(&op.data_name, MAX_DATA_NAME_LENGTH)?;
                match &op.data_value {
                    Some(value) => {
                        writer.write_bool(true);
                        writer.write_var_opaque(value, MAX_DATA_VALUE_LENGTH)?;
                    }
                    None => writer.write_bool(false),
                }
            }
        }
        Ok(())
    }

    fn decode(reader: &mut XdrReader<'_>) -> IoResult<Self> {
        let source_account = reader.read_optional::<MuxedAccount>()?;
        let body = match OperationType::decode(reader)? {
            OperationType::ManageData => {
                let data_name = reader.read_string(MAX_DATA_NAME_LENGTH)?;
                let data_value = if reader.read_bool()? {
                    Some(reader.read_var_opaque(MAX_DATA_VALUE_LENGTH)?)
                } else {
                    None
                };
                OperationBody::ManageData(ManageDataOp {
                    data_name,
                    data_value,
                })
            }
            other => {
                return Err(IoError::invalid_data(format!(
                    "decoding {other} operations is not supported"
                )))
            }
        };
        Ok(Self {
            source_account,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stellar_data_io::XdrCodecExt;

    #[test]
    fn test_operation_type_lookup() {
        assert_eq!(OperationType::from_i32(10), Some(OperationType::ManageData));
        assert_eq!(OperationType::from_i32(26), Some(OperationType::RestoreFootprint));
        assert_eq!(OperationType::from_i32(27), None);
        assert_eq!(OperationType::from_i32(-1), None);
        assert_eq!(OperationType::ManageData.to_string(), "MANAGE_DATA");
    }

    #[test]
    fn test_manage_data_limits() {
        assert!(ManageDataOp::new("k".repeat(64), Some(&[0u8; 64])).is_ok());
        assert!(matches!(
            ManageDataOp::new("", Some(b"v")),
            Err(CoreError::InvalidDataName { .. })
        ));
        assert!(matches!(
            ManageDataOp::new("k".repeat(65), None),
            Err(CoreError::InvalidDataName { .. })
        ));
        assert!(matches!(
            ManageDataOp::new("bad\nname", None),
            Err(CoreError::InvalidDataName { .. })
        ));
        assert_eq!(
            ManageDataOp::new("k", Some(&[0u8; 65])),
            Err(CoreError::InvalidDataValue {
                length: 65,
                max: 64
            })
        );
    }

    #[test]
    fn test_manage_data_encoding() {
        let op = Operation::manage_data("example_key", Some(b"example_value")).unwrap();
        let bytes = op.to_xdr().unwrap();
        // no source, MANAGE_DATA, "example_key" padded to 12, present, "example_value" padded to 16
        assert_eq!(bytes.len(), 4 + 4 + 4 + 12 + 4 + 4 + 16);
        assert_eq!(&bytes[4..8], &[0, 0, 0, 10]);
        assert_eq!(Operation::from_xdr(&bytes).unwrap(), op);
    }

    #[test]
    fn test_delete_encodes_absent_value() {
        let op = Operation::new(OperationBody::ManageData(
            ManageDataOp::delete("example_key").unwrap(),
        ));
        let bytes = op.to_xdr().unwrap();
        assert_eq!(&bytes[bytes.len() - 4..], &[0, 0, 0, 0]);
        let decoded = Operation::from_xdr(&bytes).unwrap();
        let OperationBody::ManageData(body) = decoded.body;
        assert_eq!(body.data_value(), None);
    }
}
