//! Builder patterns for transactions.

pub mod transaction_builder;

pub use transaction_builder::TransactionBuilder;
