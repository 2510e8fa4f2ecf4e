//! The add → query → decode flow.
//!
//! [`ManageDataFlow`] drives a [`LedgerApi`]: Horizon in production, an
//! in-memory ledger in tests.

use crate::credential::{CredentialError, CredentialSource};
use async_trait::async_trait;
use std::time::Duration;
use stellar_data_config::ClientSettings;
use stellar_data_core::{
    CoreError, DecodeError, MuxedAccount, Network, Operation, TransactionBuilder,
    TransactionEnvelope, TransactionResultSummary,
};
use stellar_data_cryptography::KeyPair;
use stellar_data_rpc_client::{
    AccountResponse, DataLookup, HorizonClient, HorizonError, SubmitTransactionResponse,
};
use thiserror::Error;
use tracing::info;

/// Errors raised by the flow.
#[derive(Error, Debug)]
pub enum FlowError {
    /// The signing credential is missing or invalid
    #[error(transparent)]
    Credential(#[from] CredentialError),

    /// Building or signing the transaction failed
    #[error(transparent)]
    Signing(#[from] CoreError),

    /// Horizon failed or rejected the request
    #[error(transparent)]
    Horizon(#[from] HorizonError),

    /// A result blob could not be decoded
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Required configuration is missing or malformed
    #[error("Configuration error: {0}")]
    Config(String),
}

/// The ledger operations the flow needs.
#[async_trait]
pub trait LedgerApi: Send + Sync {
    async fn load_account(&self, account_id: &str) -> Result<AccountResponse, HorizonError>;

    async fn submit_transaction(
        &self,
        envelope: &TransactionEnvelope,
    ) -> Result<SubmitTransactionResponse, HorizonError>;

    async fn get_account_data_raw(
        &self,
        account_id: &str,
        name: &str,
    ) -> Result<DataLookup<Vec<u8>>, HorizonError>;
}

#[async_trait]
impl LedgerApi for HorizonClient {
    async fn load_account(&self, account_id: &str) -> Result<AccountResponse, HorizonError> {
        HorizonClient::load_account(self, account_id).await
    }

    async fn submit_transaction(
        &self,
        envelope: &TransactionEnvelope,
    ) -> Result<SubmitTransactionResponse, HorizonError> {
        HorizonClient::submit_transaction(self, envelope).await
    }

    async fn get_account_data_raw(
        &self,
        account_id: &str,
        name: &str,
    ) -> Result<DataLookup<Vec<u8>>, HorizonError> {
        HorizonClient::get_account_data_raw(self, account_id, name).await
    }
}

/// A named data entry; a `None` value deletes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataEntry {
    pub name: String,
    pub value: Option<Vec<u8>>,
}

impl DataEntry {
    pub fn new<N: Into<String>, V: AsRef<[u8]>>(name: N, value: V) -> Self {
        Self {
            name: name.into(),
            value: Some(value.as_ref().to_vec()),
        }
    }

    pub fn delete<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// The `ManageData` operation writing this entry, validated against protocol limits.
    pub fn to_operation(&self) -> Result<Operation, CoreError> {
        Operation::manage_data(self.name.clone(), self.value.as_deref())
    }
}

/// Settings the flow needs beyond the ledger itself.
#[derive(Debug, Clone)]
pub struct FlowConfig {
    /// Account owning the entries; the signer's account when `None`.
    pub account: Option<MuxedAccount>,
    pub network: Network,
    pub base_fee: u32,
    /// Validity window of submitted transactions; `None` for no time bounds.
    pub tx_timeout: Option<Duration>,
}

impl FlowConfig {
    pub fn new(network: Network) -> Self {
        let settings = ClientSettings::default();
        Self {
            account: None,
            network,
            base_fee: settings.base_fee,
            tx_timeout: settings.transaction_timeout(),
        }
    }

    /// Builds the flow settings from client settings and an optional account strkey.
    pub fn from_settings(settings: &ClientSettings, account: Option<&str>) -> Result<Self, FlowError> {
        let account = account
            .map(|account| {
                account.parse::<MuxedAccount>().map_err(|e| {
                    FlowError::Config(format!("invalid account {account}: {e}"))
                })
            })
            .transpose()?;
        Ok(Self {
            account,
            network: Network::new(settings.passphrase()),
            base_fee: settings.base_fee,
            tx_timeout: settings.transaction_timeout(),
        })
    }

    pub fn with_account(mut self, account: MuxedAccount) -> Self {
        self.account = Some(account);
        self
    }
}

/// Everything `run` produced.
#[derive(Debug, Clone)]
pub struct FlowReport {
    pub submission: SubmitTransactionResponse,
    pub lookup: DataLookup<String>,
    pub summary: TransactionResultSummary,
}

/// Writes, reads and decodes account data entries.
pub struct ManageDataFlow<L> {
    ledger: L,
    config: FlowConfig,
}

impl<L: LedgerApi> ManageDataFlow<L> {
    pub fn new(ledger: L, config: FlowConfig) -> Self {
        Self { ledger, config }
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// Transaction source: the configured account, or the signer's account
    /// when none is configured.
    pub fn account_for(&self, signer: &KeyPair) -> MuxedAccount {
        self.config
            .account
            .unwrap_or_else(|| MuxedAccount::from(signer))
    }

    /// Signs and submits one `ManageData` transaction.
    ///
    /// The credential and the entry are checked before anything is sent, so
    /// a bad seed or an oversized entry never costs a request.
    pub async fn add_data(
        &self,
        credential: &CredentialSource,
        entry: &DataEntry,
    ) -> Result<SubmitTransactionResponse, FlowError> {
        let signer = credential.load()?;
        self.submit_entry(&signer, entry).await
    }

    async fn submit_entry(
        &self,
        signer: &KeyPair,
        entry: &DataEntry,
    ) -> Result<SubmitTransactionResponse, FlowError> {
        let operation = entry
            .to_operation()?
            .with_source(MuxedAccount::from(signer));
        let source = self.account_for(signer);
        let account_id = source.account_id().to_string();

        let account = self.ledger.load_account(&account_id).await?;
        let mut builder = TransactionBuilder::new(source, account.sequence)
            .with_base_fee(self.config.base_fee)
            .add_operation(operation);
        if let Some(timeout) = self.config.tx_timeout {
            builder = builder.with_timeout(timeout);
        }
        let mut envelope = TransactionEnvelope::new(builder.build()?);
        envelope.sign(signer, &self.config.network)?;

        info!(
            target: "stellar_data",
            account = %account_id,
            name = %entry.name,
            hash = %hex::encode(envelope.hash(&self.config.network)?),
            "submitting data entry"
        );
        let response = self.ledger.submit_transaction(&envelope).await?;
        info!(
            target: "stellar_data",
            hash = %response.hash,
            ledger = ?response.ledger,
            successful = response.successful,
            "data entry submitted"
        );
        Ok(response)
    }

    /// Reads an entry as text from `account`.
    pub async fn query_data(
        &self,
        account: &MuxedAccount,
        name: &str,
    ) -> Result<DataLookup<String>, FlowError> {
        match self.query_data_raw(account, name).await? {
            DataLookup::Found(bytes) => String::from_utf8(bytes)
                .map(DataLookup::Found)
                .map_err(|e| HorizonError::decode(format!("data value is not UTF-8: {e}")).into()),
            DataLookup::NotFound => Ok(DataLookup::NotFound),
        }
    }

    pub async fn query_data_raw(
        &self,
        account: &MuxedAccount,
        name: &str,
    ) -> Result<DataLookup<Vec<u8>>, FlowError> {
        let account_id = account.account_id().to_string();
        let lookup = self.ledger.get_account_data_raw(&account_id, name).await?;
        info!(
            target: "stellar_data",
            account = %account_id,
            name = %name,
            found = lookup.is_found(),
            "data entry queried"
        );
        Ok(lookup)
    }

    /// Adds the entry, reads it back and decodes the submission result.
    ///
    /// The entry is read from the signer's account, which is where the
    /// operation's source places it.
    pub async fn run(
        &self,
        credential: &CredentialSource,
        entry: &DataEntry,
    ) -> Result<FlowReport, FlowError> {
        let signer = credential.load()?;
        let submission = self.submit_entry(&signer, entry).await?;
        let lookup = self
            .query_data(&MuxedAccount::from(&signer), &entry.name)
            .await?;
        let summary = decode_submission(&submission)?;
        Ok(FlowReport {
            submission,
            lookup,
            summary,
        })
    }
}

/// Decodes a submission's `result_xdr` together with its ledger and metadata.
pub fn decode_submission(
    response: &SubmitTransactionResponse,
) -> Result<TransactionResultSummary, FlowError> {
    Ok(TransactionResultSummary::decode(&response.result_xdr)?
        .with_ledger(response.ledger)
        .with_extra_data(response.result_meta_xdr.clone()))
}
