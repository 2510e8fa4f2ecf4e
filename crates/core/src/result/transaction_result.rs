//! Transaction results as returned in `result_xdr`.

use super::codes::TransactionResultCode;
use super::operation_result::OperationResult;
use crate::xdr::{self, Limits, ReadXdr};
use crate::DecodeError;

/// Maps the result arms that carry no payload, shared by the outer and the
/// inner result unions, onto [`TransactionResultCode`].
macro_rules! payload_free_arms {
    ($value:expr, $union:ident, { $($arms:tt)* }) => {
        match $value {
            $($arms)*
            $union::TxTooEarly => Self::Other(TransactionResultCode::TooEarly),
            $union::TxTooLate => Self::Other(TransactionResultCode::TooLate),
            $union::TxMissingOperation => Self::Other(TransactionResultCode::MissingOperation),
            $union::TxBadSeq => Self::Other(TransactionResultCode::BadSeq),
            $union::TxBadAuth => Self::Other(TransactionResultCode::BadAuth),
            $union::TxInsufficientBalance => {
                Self::Other(TransactionResultCode::InsufficientBalance)
            }
            $union::TxNoAccount => Self::Other(TransactionResultCode::NoAccount),
            $union::TxInsufficientFee => Self::Other(TransactionResultCode::InsufficientFee),
            $union::TxBadAuthExtra => Self::Other(TransactionResultCode::BadAuthExtra),
            $union::TxInternalError => Self::Other(TransactionResultCode::InternalError),
            $union::TxNotSupported => Self::Other(TransactionResultCode::NotSupported),
            $union::TxBadSponsorship => Self::Other(TransactionResultCode::BadSponsorship),
            $union::TxBadMinSeqAgeOrGap => Self::Other(TransactionResultCode::BadMinSeqAgeOrGap),
            $union::TxMalformed => Self::Other(TransactionResultCode::Malformed),
            $union::TxSorobanInvalid => Self::Other(TransactionResultCode::SorobanInvalid),
        }
    };
}

fn operation_results(results: &[xdr::OperationResult]) -> Vec<OperationResult> {
    results.iter().map(OperationResult::from).collect()
}

/// Outcome of a transaction, keyed by its result code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionResultBody {
    FeeBumpInnerSuccess(InnerTransactionResultPair),
    FeeBumpInnerFailed(InnerTransactionResultPair),
    Success(Vec<OperationResult>),
    Failed(Vec<OperationResult>),
    /// Every other code, which carries no payload.
    Other(TransactionResultCode),
}

impl TransactionResultBody {
    pub fn code(&self) -> TransactionResultCode {
        match self {
            TransactionResultBody::FeeBumpInnerSuccess(_) => {
                TransactionResultCode::FeeBumpInnerSuccess
            }
            TransactionResultBody::FeeBumpInnerFailed(_) => TransactionResultCode::FeeBumpInnerFailed,
            TransactionResultBody::Success(_) => TransactionResultCode::Success,
            TransactionResultBody::Failed(_) => TransactionResultCode::Failed,
            TransactionResultBody::Other(code) => *code,
        }
    }

    /// Operation results, looking through a fee-bump wrapper.
    pub fn operations(&self) -> &[OperationResult] {
        match self {
            TransactionResultBody::Success(results) | TransactionResultBody::Failed(results) => {
                results
            }
            TransactionResultBody::FeeBumpInnerSuccess(pair)
            | TransactionResultBody::FeeBumpInnerFailed(pair) => pair.result.result.operations(),
            TransactionResultBody::Other(_) => &[],
        }
    }
}

impl From<&xdr::TransactionResultResult> for TransactionResultBody {
    fn from(result: &xdr::TransactionResultResult) -> Self {
        use xdr::TransactionResultResult as Outer;

        payload_free_arms!(result, Outer, {
            Outer::TxFeeBumpInnerSuccess(pair) => Self::FeeBumpInnerSuccess(pair.into()),
            Outer::TxFeeBumpInnerFailed(pair) => Self::FeeBumpInnerFailed(pair.into()),
            Outer::TxSuccess(results) => Self::Success(operation_results(results)),
            Outer::TxFailed(results) => Self::Failed(operation_results(results)),
        })
    }
}

/// Outcome of the transaction wrapped by a fee bump. Fee bumps do not nest,
/// so there is no fee-bump arm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InnerTransactionResultBody {
    Success(Vec<OperationResult>),
    Failed(Vec<OperationResult>),
    Other(TransactionResultCode),
}

impl InnerTransactionResultBody {
    pub fn code(&self) -> TransactionResultCode {
        match self {
            InnerTransactionResultBody::Success(_) => TransactionResultCode::Success,
            InnerTransactionResultBody::Failed(_) => TransactionResultCode::Failed,
            InnerTransactionResultBody::Other(code) => *code,
        }
    }

    pub fn operations(&self) -> &[OperationResult] {
        match self {
            InnerTransactionResultBody::Success(results)
            | InnerTransactionResultBody::Failed(results) => results,
            InnerTransactionResultBody::Other(_) => &[],
        }
    }
}

impl From<&xdr::InnerTransactionResultResult> for InnerTransactionResultBody {
    fn from(result: &xdr::InnerTransactionResultResult) -> Self {
        use xdr::InnerTransactionResultResult as Inner;

        payload_free_arms!(result, Inner, {
            Inner::TxSuccess(results) => Self::Success(operation_results(results)),
            Inner::TxFailed(results) => Self::Failed(operation_results(results)),
        })
    }
}

/// Result of the transaction wrapped by a fee bump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InnerTransactionResult {
    pub fee_charged: i64,
    pub result: InnerTransactionResultBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InnerTransactionResultPair {
    /// Hash of the inner transaction.
    pub transaction_hash: [u8; 32],
    pub result: InnerTransactionResult,
}

impl From<&xdr::InnerTransactionResultPair> for InnerTransactionResultPair {
    fn from(pair: &xdr::InnerTransactionResultPair) -> Self {
        Self {
            transaction_hash: pair.transaction_hash.0,
            result: InnerTransactionResult {
                fee_charged: pair.result.fee_charged,
                result: (&pair.result.result).into(),
            },
        }
    }
}

/// A decoded `TransactionResult`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionResult {
    /// Fee actually charged, in stroops.
    pub fee_charged: i64,
    pub result: TransactionResultBody,
}

impl TransactionResult {
    /// Decodes the base64 `result_xdr` Horizon returns.
    ///
    /// # Errors
    ///
    /// [`DecodeError::Empty`] for blank input, [`DecodeError::Base64`] for
    /// invalid base64 and [`DecodeError::Xdr`] for truncated, over-long or
    /// otherwise malformed XDR.
    pub fn from_xdr_base64(encoded: &str) -> Result<Self, DecodeError> {
        Self::from_xdr(&crate::base64_bytes(encoded)?)
    }

    /// Decodes raw XDR bytes, which must hold exactly one result.
    pub fn from_xdr(bytes: &[u8]) -> Result<Self, DecodeError> {
        let raw = xdr::TransactionResult::from_xdr(bytes, Limits::none())?;
        Ok(Self::from(&raw))
    }

    pub fn code(&self) -> TransactionResultCode {
        self.result.code()
    }

    pub fn is_success(&self) -> bool {
        self.code().is_success()
    }

    pub fn operations(&self) -> &[OperationResult] {
        self.result.operations()
    }
}

impl From<&xdr::TransactionResult> for TransactionResult {
    fn from(result: &xdr::TransactionResult) -> Self {
        Self {
            fee_charged: result.fee_charged,
            result: (&result.result).into(),
        }
    }
}
