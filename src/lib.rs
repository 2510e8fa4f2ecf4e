//! # stellar-data: Stellar account data entries over Horizon
//!
//! Writes named data entries to a Stellar account with `ManageData`
//! transactions, reads them back through Horizon and decodes the
//! `TransactionResult` XDR that comes back from a submission.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stellar_data::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = ClientSettings::for_network(NetworkType::Testnet);
//!     let client = HorizonClient::from_settings(&settings)?;
//!     let flow = ManageDataFlow::new(client, FlowConfig::from_settings(&settings, None)?);
//!
//!     let report = flow
//!         .run(&CredentialSource::default(), &DataEntry::new("example_key", "example_value"))
//!         .await?;
//!     println!("{}", report.summary);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`config`] - Networks, protocol limits and client settings
//! - [`io`] - XDR reader, writer and codec trait
//! - [`crypto`] - SHA-256, strkeys and ed25519 key pairs
//! - [`core`] - Transactions, envelopes and result decoding
//! - [`rpc_client`] - Horizon HTTP client
//! - [`cli`] - The add, query and decode flow behind `manage-data`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub use stellar_data_cli as cli;
pub use stellar_data_config as config;
pub use stellar_data_core as core;
pub use stellar_data_cryptography as crypto;
pub use stellar_data_io as io;
pub use stellar_data_rpc_client as rpc_client;

/// Common imports for writing and reading data entries
pub mod prelude {
    pub use crate::cli::{
        CredentialSource, DataEntry, FlowConfig, FlowError, FlowReport, LedgerApi,
        ManageDataFlow,
    };
    pub use crate::config::{ClientSettings, NetworkType};
    pub use crate::core::{
        MuxedAccount, Network, Operation, TransactionBuilder, TransactionEnvelope,
        TransactionResult, TransactionResultSummary,
    };
    pub use crate::crypto::KeyPair;
    pub use crate::rpc_client::{DataLookup, HorizonClient, HorizonError};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
