//! Configuration for the `manage-data` tool.
//!
//! Values come from an optional TOML file and are then overridden by
//! command-line flags and their environment variables.

use crate::args::GlobalArgs;
use crate::credential::CredentialSource;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use stellar_data_config::ClientSettings;

/// Data entry written by `run` when none is given on the command line.
pub const DEFAULT_DATA_NAME: &str = "example_key";
pub const DEFAULT_DATA_VALUE: &str = "example_value";

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Horizon, network and fee settings
    #[serde(flatten)]
    pub client: ClientSettings,
    /// Account whose data entries are written and read (`G...` or `M...`)
    pub account: Option<String>,
    /// Entry name used by `run`
    pub data_name: Option<String>,
    /// Entry value used by `run`
    pub data_value: Option<String>,
    /// Where the signing seed is read from
    pub credential: Option<CredentialSource>,
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads the file named by `--config`, if any, and applies flag overrides.
    pub fn resolve(args: &GlobalArgs) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_overrides(args);
        Ok(config)
    }

    /// Applies command-line overrides; flags win over file values.
    pub fn apply_overrides(&mut self, args: &GlobalArgs) {
        if let Some(network) = args.network {
            self.client.network = network;
        }
        if let Some(passphrase) = &args.network_passphrase {
            self.client.network_passphrase = Some(passphrase.clone());
        }
        if let Some(url) = &args.horizon_url {
            self.client.horizon_url = Some(url.clone());
        }
        if let Some(timeout) = args.timeout_secs {
            self.client.timeout_secs = timeout;
        }
        if let Some(base_fee) = args.base_fee {
            self.client.base_fee = base_fee;
        }
        if let Some(account) = &args.account {
            self.account = Some(account.clone());
        }
        if let Some(path) = &args.secret_file {
            self.credential = Some(CredentialSource::File(path.clone()));
        } else if let Some(name) = &args.secret_env {
            self.credential = Some(CredentialSource::Env(name.clone()));
        }
    }

    /// Effective credential source; the standard environment variable when unset.
    pub fn credential_source(&self) -> CredentialSource {
        self.credential.clone().unwrap_or_default()
    }

    pub fn data_name(&self) -> &str {
        self.data_name.as_deref().unwrap_or(DEFAULT_DATA_NAME)
    }

    pub fn data_value(&self) -> &str {
        self.data_value.as_deref().unwrap_or(DEFAULT_DATA_VALUE)
    }
}
