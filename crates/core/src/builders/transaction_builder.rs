//! Builder for unsigned transactions.

use crate::transaction::{Memo, Operation, Preconditions, TimeBounds, Transaction};
use crate::{CoreError, CoreResult, MuxedAccount};
use stellar_data_config::{BASE_FEE, MAX_OPERATIONS_PER_TRANSACTION};
use std::time::Duration;

/// Assembles a [`Transaction`] from an account's current state.
#[derive(Debug, Clone)]
pub struct TransactionBuilder {
    source_account: MuxedAccount,
    current_sequence: i64,
    base_fee: u32,
    memo: Memo,
    preconditions: Preconditions,
    operations: Vec<Operation>,
}

impl TransactionBuilder {
    /// Creates a builder for `source_account`.
    ///
    /// # Arguments
    ///
    /// * `source_account` - The account paying the fee and consuming the sequence number
    /// * `current_sequence` - The account's sequence number as last reported by Horizon
    ///
    /// # Returns
    ///
    /// A builder with the default base fee, no memo and no time bounds.
    pub fn new(source_account: MuxedAccount, current_sequence: i64) -> Self {
        Self {
            source_account,
            current_sequence,
            base_fee: BASE_FEE,
            memo: Memo::None,
            preconditions: Preconditions::None,
            operations: Vec::new(),
        }
    }

    /// Sets the fee paid per operation, in stroops.
    pub fn with_base_fee(mut self, base_fee: u32) -> Self {
        self.base_fee = base_fee;
        self
    }

    pub fn with_memo(mut self, memo: Memo) -> Self {
        self.memo = memo;
        self
    }

    pub fn with_time_bounds(mut self, bounds: TimeBounds) -> Self {
        self.preconditions = Preconditions::Time(bounds);
        self
    }

    /// Makes the transaction expire `timeout` from now. A zero timeout
    /// leaves it valid indefinitely.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.preconditions = if timeout.is_zero() {
            Preconditions::None
        } else {
            Preconditions::Time(TimeBounds::expiring_in(timeout))
        };
        self
    }

    pub fn add_operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    /// Builds the transaction.
    ///
    /// # Errors
    ///
    /// Fails when there are no operations or more than 100, when the total
    /// fee overflows 32 bits, or when the sequence number cannot advance.
    pub fn build(self) -> CoreResult<Transaction> {
        let count = self.operations.len();
        if count == 0 {
            return Err(CoreError::NoOperations);
        }
        if count > MAX_OPERATIONS_PER_TRANSACTION {
            return Err(CoreError::TooManyOperations(count));
        }
        let fee = u32::try_from(count)
            .ok()
            .and_then(|count| self.base_fee.checked_mul(count))
            .ok_or(CoreError::FeeOverflow {
                base_fee: self.base_fee,
                operations: count,
            })?;
        let seq_num = self
            .current_sequence
            .checked_add(1)
            .ok_or(CoreError::SequenceOverflow(self.current_sequence))?;

        Ok(Transaction {
            source_account: self.source_account,
            fee,
            seq_num,
            preconditions: self.preconditions,
            memo: self.memo,
            operations: self.operations,
        })
    }
}
