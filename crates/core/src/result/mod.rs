//! Decoding of transaction results.

mod codes;
mod operation_result;
mod summary;
mod transaction_result;

pub use codes::{ManageDataResultCode, OperationResultCode, TransactionResultCode};
pub use operation_result::{
    ClaimAtom, ClaimSource, InflationPayout, ManageOfferSuccess, OfferEffect, OfferEntry,
    OperationInnerResult, OperationResult, OperationResultDetail, PathPaymentSuccess, Price,
    SimplePaymentResult,
};
pub use summary::TransactionResultSummary;
pub use transaction_result::{
    InnerTransactionResult, InnerTransactionResultBody, InnerTransactionResultPair,
    TransactionResult, TransactionResultBody,
};
