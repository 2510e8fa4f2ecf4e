//! Stellar Data RPC Client
//!
//! This crate provides the Horizon HTTP client used to look up accounts,
//! submit signed transactions and read account data entries.

mod error;
mod horizon_client;
pub mod models;

pub use error::{HorizonError, HorizonResult};
pub use horizon_client::{HorizonClient, HorizonClientBuilder, DEFAULT_HTTP_TIMEOUT};
pub use models::{
    AccountResponse, DataLookup, DataValueResponse, ProblemResponse, ResultCodes,
    SubmitTransactionResponse,
};
