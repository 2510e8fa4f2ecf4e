//! Transaction model: operations, memo, preconditions, envelope.

mod body;
mod envelope;
mod memo;
mod operation;
mod preconditions;

pub use body::Transaction;
pub use envelope::{DecoratedSignature, TransactionEnvelope};
pub use memo::Memo;
pub use operation::{ManageDataOp, Operation, OperationBody, OperationType};
pub use preconditions::{Preconditions, TimeBounds};
