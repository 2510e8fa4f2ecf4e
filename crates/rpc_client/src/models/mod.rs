//! Horizon response bodies.

mod account;
mod data;
mod problem;
mod transaction;

pub use account::AccountResponse;
pub use data::{DataLookup, DataValueResponse};
pub use problem::{ProblemExtras, ProblemResponse, ResultCodes};
pub use transaction::SubmitTransactionResponse;
