//! Human-readable view of a transaction result.

use super::codes::TransactionResultCode;
use super::operation_result::OperationResult;
use super::transaction_result::TransactionResult;
use crate::DecodeError;
use std::fmt;

/// The fields of a decoded result worth showing to a person, plus the ledger
/// and metadata a submission response may supply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionResultSummary {
    pub fee_charged: i64,
    pub code: TransactionResultCode,
    pub operations: Vec<OperationResult>,
    pub ledger: Option<u32>,
    pub extra_data: Option<String>,
}

impl TransactionResultSummary {
    /// Decodes `result_xdr` into a summary with no ledger and no extra data.
    pub fn decode(result_xdr: &str) -> Result<Self, DecodeError> {
        Ok(TransactionResult::from_xdr_base64(result_xdr)?.into())
    }

    pub fn with_ledger(mut self, ledger: Option<u32>) -> Self {
        self.ledger = ledger;
        self
    }

    /// Attaches `result_meta_xdr`; blank strings count as absent.
    pub fn with_extra_data(mut self, extra_data: Option<String>) -> Self {
        self.extra_data = extra_data.filter(|data| !data.trim().is_empty());
        self
    }

    pub fn is_success(&self) -> bool {
        self.code.is_success()
    }
}

impl From<TransactionResult> for TransactionResultSummary {
    fn from(result: TransactionResult) -> Self {
        Self {
            fee_charged: result.fee_charged,
            code: result.code(),
            operations: result.operations().to_vec(),
            ledger: None,
            extra_data: None,
        }
    }
}

impl fmt::Display for TransactionResultSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fee charged: {}", self.fee_charged)?;
        writeln!(f, "Result code: {}", self.code)?;
        for (index, operation) in self.operations.iter().enumerate() {
            writeln!(f, "Operation {index}: {operation}")?;
        }
        match self.ledger {
            Some(ledger) => writeln!(f, "Ledger sequence: {ledger}")?,
            None => writeln!(f, "Ledger sequence not available")?,
        }
        match &self.extra_data {
            Some(data) => write!(f, "Extra data available: {data}"),
            None => write!(f, "No extra data available"),
        }
    }
}
