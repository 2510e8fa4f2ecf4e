//! In-memory ledger and fixtures shared by the integration suites.

#![allow(dead_code)]

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use std::collections::{BTreeMap, HashMap};
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use stellar_data_cli::{CredentialSource, LedgerApi};
use stellar_data_core::xdr::{self, Limits, WriteXdr};
use stellar_data_core::{Network, OperationBody, TransactionEnvelope, TransactionResult};
use stellar_data_cryptography::KeyPair;
use stellar_data_rpc_client::{
    AccountResponse, DataLookup, HorizonError, ResultCodes, SubmitTransactionResponse,
};
use tempfile::NamedTempFile;

pub const SEED: &str = "SDMT7RM5DI6K5LKMD4OU6VZDFOU66RJ4W3L7KRNIHK3KZEV4OQUH3UFB";
pub const ACCOUNT: &str = "GAQ3DMYZ37GE5YIYTN75N7KONOCUTOJTCSUZMIZ7SQ4L466GO77I65DM";

/// Writes `seed` to a temporary file and returns a credential pointing at it.
pub fn credential_file(seed: &str) -> (NamedTempFile, CredentialSource) {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{seed}").unwrap();
    let source = CredentialSource::file(file.path());
    (file, source)
}

fn encode_result(result: &xdr::TransactionResult) -> String {
    general_purpose::STANDARD.encode(result.to_xdr(Limits::none()).unwrap())
}

#[derive(Debug, Default)]
struct AccountState {
    sequence: i64,
    data: BTreeMap<String, Vec<u8>>,
}

/// A single-node ledger applying `ManageData` transactions in memory.
pub struct InMemoryLedger {
    network: Network,
    accounts: Mutex<HashMap<String, AccountState>>,
    ledger: AtomicUsize,
    calls: AtomicUsize,
}

impl InMemoryLedger {
    pub fn new(network: Network) -> Self {
        Self {
            network,
            accounts: Mutex::new(HashMap::new()),
            ledger: AtomicUsize::new(1),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_account(self, account_id: &str, sequence: i64) -> Self {
        self.accounts.lock().unwrap().insert(
            account_id.to_string(),
            AccountState {
                sequence,
                data: BTreeMap::new(),
            },
        );
        self
    }

    /// Number of requests served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn sequence(&self, account_id: &str) -> Option<i64> {
        self.accounts
            .lock()
            .unwrap()
            .get(account_id)
            .map(|state| state.sequence)
    }

    fn rejection(result: xdr::TransactionResultResult) -> HorizonError {
        let raw = xdr::TransactionResult {
            fee_charged: 100,
            result,
            ext: xdr::TransactionResultExt::V0,
        };
        let code = TransactionResult::from(&raw).code();
        HorizonError::TransactionFailed {
            status: 400,
            title: "Transaction Failed".to_string(),
            result_codes: Some(ResultCodes {
                transaction: code.name().to_string(),
                operations: Vec::new(),
            }),
            result_xdr: Some(encode_result(&raw)),
            body: String::new(),
        }
    }
}

#[async_trait]
impl LedgerApi for InMemoryLedger {
    async fn load_account(&self, account_id: &str) -> Result<AccountResponse, HorizonError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let accounts = self.accounts.lock().unwrap();
        let state = accounts
            .get(account_id)
            .ok_or_else(|| HorizonError::AccountNotFound {
                account: account_id.to_string(),
            })?;
        Ok(AccountResponse {
            account_id: account_id.to_string(),
            sequence: state.sequence,
            subentry_count: state.data.len() as u32,
        })
    }

    async fn submit_transaction(
        &self,
        envelope: &TransactionEnvelope,
    ) -> Result<SubmitTransactionResponse, HorizonError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let tx = &envelope.transaction;
        let source = tx.source_account.account_id();

        let mut accounts = self.accounts.lock().unwrap();
        let Some(state) = accounts.get_mut(&source.to_string()) else {
            return Err(Self::rejection(xdr::TransactionResultResult::TxNoAccount));
        };
        if tx.seq_num != state.sequence + 1 {
            return Err(Self::rejection(xdr::TransactionResultResult::TxBadSeq));
        }
        let source_key = KeyPair::from_public_key(source.as_bytes()).unwrap();
        if !envelope.is_signed_by(&source_key, &self.network) {
            return Err(Self::rejection(xdr::TransactionResultResult::TxBadAuth));
        }
        state.sequence = tx.seq_num;

        // Operations apply to a copy so a failing one leaves no trace.
        let mut staged: HashMap<String, BTreeMap<String, Vec<u8>>> = HashMap::new();
        let mut results = Vec::new();
        let mut failed = false;
        for operation in &tx.operations {
            let owner = operation
                .source_account
                .unwrap_or(tx.source_account)
                .account_id()
                .to_string();
            let data = staged.entry(owner.clone()).or_insert_with(|| {
                accounts
                    .get(&owner)
                    .map(|state| state.data.clone())
                    .unwrap_or_default()
            });
            let OperationBody::ManageData(op) = &operation.body;
            let code = match op.data_value() {
                Some(value) => {
                    data.insert(op.data_name().to_string(), value.to_vec());
                    xdr::ManageDataResult::Success
                }
                None if data.remove(op.data_name()).is_some() => xdr::ManageDataResult::Success,
                None => xdr::ManageDataResult::NameNotFound,
            };
            failed |= code != xdr::ManageDataResult::Success;
            results.push(xdr::OperationResult::OpInner(
                xdr::OperationResultTr::ManageData(code),
            ));
        }
        let results = results.try_into().unwrap();
        if failed {
            return Err(Self::rejection(xdr::TransactionResultResult::TxFailed(results)));
        }
        for (owner, data) in staged {
            accounts.entry(owner).or_default().data = data;
        }

        let ledger = self.ledger.fetch_add(1, Ordering::SeqCst) as u32;
        let fee = i64::from(tx.fee);
        Ok(SubmitTransactionResponse {
            hash: hex::encode(envelope.hash(&self.network).unwrap()),
            ledger: Some(ledger),
            successful: true,
            envelope_xdr: envelope.to_xdr_base64().unwrap(),
            result_xdr: encode_result(&xdr::TransactionResult {
                fee_charged: fee,
                result: xdr::TransactionResultResult::TxSuccess(results),
                ext: xdr::TransactionResultExt::V0,
            }),
            result_meta_xdr: None,
        })
    }

    async fn get_account_data_raw(
        &self,
        account_id: &str,
        name: &str,
    ) -> Result<DataLookup<Vec<u8>>, HorizonError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts
            .get(account_id)
            .and_then(|state| state.data.get(name))
            .map(|value| DataLookup::Found(value.clone()))
            .unwrap_or(DataLookup::NotFound))
    }
}
