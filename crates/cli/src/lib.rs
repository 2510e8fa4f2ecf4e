//! Stellar Data CLI Library
//!
//! This crate provides the `manage-data` command-line tool: configuration
//! loading, the signing credential source, and [`flow::ManageDataFlow`], which
//! writes an account data entry, reads it back and decodes the result.

pub mod args;
pub mod commands;
pub mod config;
pub mod credential;
pub mod flow;

pub use args::{Cli, Command, GlobalArgs};
pub use config::AppConfig;
pub use credential::{CredentialError, CredentialSource};
pub use flow::{
    decode_submission, DataEntry, FlowConfig, FlowError, FlowReport, LedgerApi, ManageDataFlow,
};

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
