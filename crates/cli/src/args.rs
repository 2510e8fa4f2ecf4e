use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use stellar_data_config::NetworkType;

/// Command-line arguments for `manage-data`
#[derive(Parser, Debug, Clone)]
#[command(
    name = "manage-data",
    version = env!("CARGO_PKG_VERSION"),
    about = "Attach, read back and decode Stellar account data entries",
    long_about = "Writes a named data entry to a Stellar account with a ManageData transaction, reads entries back through Horizon and decodes transaction result XDR."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Path to a TOML configuration file
    #[arg(long, global = true, env = "STELLAR_DATA_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Horizon base URL
    #[arg(long, global = true, env = "STELLAR_HORIZON_URL", value_name = "URL")]
    pub horizon_url: Option<String>,

    /// Network to sign for (public, testnet, futurenet)
    #[arg(long, global = true, env = "STELLAR_NETWORK", value_name = "NETWORK")]
    pub network: Option<NetworkType>,

    /// Custom network passphrase, for private networks
    #[arg(long, global = true, env = "STELLAR_NETWORK_PASSPHRASE", value_name = "PASSPHRASE")]
    pub network_passphrase: Option<String>,

    /// Account owning the data entries (defaults to the signer's account)
    #[arg(long, global = true, env = "STELLAR_ACCOUNT", value_name = "ACCOUNT")]
    pub account: Option<String>,

    /// Environment variable holding the secret seed
    #[arg(long, global = true, env = "STELLAR_SECRET_ENV", value_name = "VAR")]
    pub secret_env: Option<String>,

    /// File whose first line is the secret seed
    #[arg(long, global = true, env = "STELLAR_SECRET_FILE", value_name = "PATH")]
    pub secret_file: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "STELLAR_TIMEOUT_SECS", value_name = "SECONDS")]
    pub timeout_secs: Option<u64>,

    /// Fee per operation in stroops
    #[arg(long, global = true, env = "STELLAR_BASE_FEE", value_name = "STROOPS")]
    pub base_fee: Option<u32>,

    /// Enables debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Write an entry, read it back and decode the submission result
    Run {
        /// Entry name
        #[arg(long)]
        name: Option<String>,
        /// Entry value
        #[arg(long)]
        value: Option<String>,
    },

    /// Write or delete an entry
    Set {
        /// Entry name
        #[arg(long)]
        name: String,
        /// Entry value
        #[arg(long, required_unless_present = "delete", conflicts_with = "delete")]
        value: Option<String>,
        /// Remove the entry instead of writing it
        #[arg(long)]
        delete: bool,
    },

    /// Read an entry; exits with status 2 when it does not exist
    Get {
        /// Entry name
        #[arg(long)]
        name: String,
        /// Print the stored bytes as base64 instead of text
        #[arg(long)]
        raw: bool,
    },

    /// Decode a base64 TransactionResult
    DecodeResult {
        /// Base64 XDR
        xdr: String,
        /// Ledger the transaction was included in
        #[arg(long)]
        ledger: Option<u32>,
    },

    /// Decode a base64 TransactionEnvelope
    DecodeEnvelope {
        /// Base64 XDR
        xdr: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "manage-data",
            "get",
            "--name",
            "example_key",
            "--network",
            "public",
            "--account",
            "GAQ3DMYZ37GE5YIYTN75N7KONOCUTOJTCSUZMIZ7SQ4L466GO77I65DM",
        ])
        .unwrap();
        assert_eq!(cli.global.network, Some(NetworkType::Public));
        assert_eq!(
            cli.command,
            Command::Get {
                name: "example_key".to_string(),
                raw: false
            }
        );
    }

    #[test]
    fn set_requires_value_or_delete() {
        assert!(Cli::try_parse_from(["manage-data", "set", "--name", "k"]).is_err());
        assert!(Cli::try_parse_from(["manage-data", "set", "--name", "k", "--delete"]).is_ok());
        assert!(Cli::try_parse_from([
            "manage-data", "set", "--name", "k", "--value", "v", "--delete"
        ])
        .is_err());
    }

    #[test]
    fn rejects_unknown_network() {
        assert!(Cli::try_parse_from(["manage-data", "--network", "localnet", "run"]).is_err());
    }
}
