//! Subcommand implementations.
//!
//! Each command renders its report into an [`Outcome`]; the binary prints it
//! and exits with its status.

use crate::args::Command;
use crate::config::AppConfig;
use crate::flow::{decode_submission, DataEntry, FlowConfig, FlowError, ManageDataFlow};
use anyhow::{anyhow, Context, Result};
use base64::{engine::general_purpose, Engine as _};
use std::fmt::Write as _;
use stellar_data_core::{
    MuxedAccount, Network, OperationBody, Preconditions, TransactionEnvelope,
    TransactionResultSummary,
};
use stellar_data_rpc_client::{DataLookup, HorizonClient, HorizonError};

/// Exit status of `get` when the entry does not exist.
pub const EXIT_NOT_FOUND: u8 = 2;

/// Rendered output of a command and its exit status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub status: u8,
}

impl Outcome {
    fn success(output: String) -> Self {
        Self { output, status: 0 }
    }
}

/// Runs `command` against the Horizon instance named by `config`.
pub async fn execute(command: &Command, config: &AppConfig) -> Result<Outcome> {
    match command {
        Command::DecodeResult { xdr, ledger } => decode_result(xdr, *ledger).map(Outcome::success),
        Command::DecodeEnvelope { xdr } => {
            decode_envelope(xdr, &Network::new(config.client.passphrase())).map(Outcome::success)
        }
        Command::Run { name, value } => {
            let flow = horizon_flow(config)?;
            let entry = DataEntry::new(
                name.as_deref().unwrap_or_else(|| config.data_name()),
                value.as_deref().unwrap_or_else(|| config.data_value()),
            );
            let report = flow
                .run(&config.credential_source(), &entry)
                .await
                .map_err(|err| submission_error(err, "manage data flow failed"))?;

            let mut output = String::new();
            writeln!(output, "Transaction submitted: {}", report.submission.hash)?;
            match &report.lookup {
                DataLookup::Found(value) => writeln!(output, "Decoded value: {value}")?,
                DataLookup::NotFound => writeln!(output, "Data entry {} not found", entry.name)?,
            }
            writeln!(output, "Transaction XDR: {}", report.submission.result_xdr)?;
            writeln!(output, "{}", report.summary)?;
            Ok(Outcome::success(output))
        }
        Command::Set {
            name,
            value,
            delete,
        } => {
            let flow = horizon_flow(config)?;
            let entry = match value {
                Some(value) if !*delete => DataEntry::new(name.as_str(), value),
                _ => DataEntry::delete(name.as_str()),
            };
            let submission = flow
                .add_data(&config.credential_source(), &entry)
                .await
                .map_err(|err| submission_error(err, "failed to submit data entry"))?;
            let summary = decode_submission(&submission)?;

            let mut output = String::new();
            writeln!(output, "Transaction submitted: {}", submission.hash)?;
            writeln!(output, "{summary}")?;
            Ok(Outcome::success(output))
        }
        Command::Get { name, raw } => {
            let flow = horizon_flow(config)?;
            let account = match flow.config().account {
                Some(account) => account,
                None => MuxedAccount::from(
                    &config
                        .credential_source()
                        .load()
                        .context("no --account given and no credential to derive it from")?,
                ),
            };
            let lookup = flow
                .query_data_raw(&account, name)
                .await
                .context("failed to read data entry")?;
            match lookup {
                DataLookup::Found(bytes) if *raw => Ok(Outcome::success(format!(
                    "{}\n",
                    general_purpose::STANDARD.encode(bytes)
                ))),
                DataLookup::Found(bytes) => {
                    let text = String::from_utf8(bytes)
                        .context("data value is not UTF-8; use --raw")?;
                    Ok(Outcome::success(format!("{text}\n")))
                }
                DataLookup::NotFound => Ok(Outcome {
                    output: format!("Data entry {name} not found\n"),
                    status: EXIT_NOT_FOUND,
                }),
            }
        }
    }
}

/// Appends the decoded `result_xdr` of a rejected transaction to the error.
fn submission_error(err: FlowError, context: &'static str) -> anyhow::Error {
    let summary = match &err {
        FlowError::Horizon(HorizonError::TransactionFailed {
            result_xdr: Some(result_xdr),
            ..
        }) => TransactionResultSummary::decode(result_xdr).ok(),
        _ => None,
    };
    match summary {
        Some(summary) => anyhow!("{err}\n{summary}").context(context),
        None => anyhow::Error::new(err).context(context),
    }
}

fn horizon_flow(config: &AppConfig) -> Result<ManageDataFlow<HorizonClient>> {
    let client = HorizonClient::from_settings(&config.client)
        .with_context(|| format!("cannot use Horizon URL {}", config.client.horizon_url()))?;
    let flow_config = FlowConfig::from_settings(&config.client, config.account.as_deref())?;
    Ok(ManageDataFlow::new(client, flow_config))
}

/// Renders a decoded `TransactionResult`.
pub fn decode_result(xdr: &str, ledger: Option<u32>) -> Result<String> {
    let summary = TransactionResultSummary::decode(xdr)
        .context("failed to decode transaction result")?
        .with_ledger(ledger);
    Ok(format!("{summary}\n"))
}

/// Renders a decoded `TransactionEnvelope`, with its hash on `network`.
pub fn decode_envelope(xdr: &str, network: &Network) -> Result<String> {
    let envelope =
        TransactionEnvelope::from_xdr_base64(xdr).context("failed to decode transaction envelope")?;
    let tx = &envelope.transaction;

    let mut output = String::new();
    writeln!(output, "Hash: {}", hex::encode(envelope.hash(network)?))?;
    writeln!(output, "Source account: {}", tx.source_account)?;
    writeln!(output, "Fee: {}", tx.fee)?;
    writeln!(output, "Sequence: {}", tx.seq_num)?;
    match &tx.preconditions {
        Preconditions::None => writeln!(output, "Time bounds: none")?,
        Preconditions::Time(bounds) => {
            writeln!(output, "Time bounds: {}..{}", bounds.min_time, bounds.max_time)?
        }
    }
    writeln!(output, "Memo: {}", tx.memo)?;
    for (index, operation) in tx.operations.iter().enumerate() {
        let source = operation
            .source_account
            .map(|account| account.to_string())
            .unwrap_or_else(|| "transaction source".to_string());
        match &operation.body {
            OperationBody::ManageData(op) => {
                let value = match op.data_value() {
                    Some(bytes) => match std::str::from_utf8(bytes) {
                        Ok(text) => format!("{text:?}"),
                        Err(_) => general_purpose::STANDARD.encode(bytes),
                    },
                    None => "(delete)".to_string(),
                };
                writeln!(
                    output,
                    "Operation {index}: MANAGE_DATA {} = {value} (source {source})",
                    op.data_name()
                )?;
            }
        }
    }
    writeln!(output, "Signatures: {}", envelope.signatures.len())?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_result_renders_summary() {
        let output = decode_result("AAAAAAAAAGQAAAAAAAAAAQAAAAAAAAAKAAAAAAAAAAA=", None).unwrap();
        assert!(output.starts_with("Fee charged: 100\nResult code: txSUCCESS\n"));
        assert!(output.contains("Ledger sequence not available"));
        assert!(output.contains("No extra data available"));
    }

    #[test]
    fn decode_result_rejects_garbage() {
        let err = decode_result("AAAA", None).unwrap_err();
        assert!(format!("{err:#}").contains("failed to decode transaction result"));
    }

    #[tokio::test]
    async fn decode_commands_need_no_network() {
        let outcome = execute(
            &Command::DecodeResult {
                xdr: "AAAAAAAAAGQAAAAAAAAAAQAAAAAAAAAKAAAAAAAAAAA=".to_string(),
                ledger: Some(7),
            },
            &AppConfig::default(),
        )
        .await
        .unwrap();
        assert_eq!(outcome.status, 0);
        assert!(outcome.output.contains("Ledger sequence: 7"));
    }
}
