//! Where the signing seed comes from.
//!
//! The seed is read when a transaction is about to be signed, parsed into a
//! [`KeyPair`] and dropped with it. The raw text lives in a [`Zeroizing`]
//! buffer and is never logged.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use stellar_data_config::DEFAULT_SECRET_ENV;
use stellar_data_cryptography::KeyPair;
use thiserror::Error;
use zeroize::Zeroizing;

/// Errors raised while loading the signing credential.
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("environment variable {0} is not set")]
    MissingEnv(String),

    #[error("cannot read credential file {path}: {message}")]
    Unreadable { path: PathBuf, message: String },

    #[error("credential from {source_name} is not a valid secret seed")]
    Invalid {
        source_name: String,
        #[source]
        cause: stellar_data_cryptography::Error,
    },
}

/// A location holding an `S...` secret seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialSource {
    /// Name of an environment variable.
    Env(String),
    /// Path of a file whose first line is the seed.
    File(PathBuf),
}

impl Default for CredentialSource {
    fn default() -> Self {
        CredentialSource::Env(DEFAULT_SECRET_ENV.to_string())
    }
}

impl CredentialSource {
    pub fn env<S: Into<String>>(name: S) -> Self {
        CredentialSource::Env(name.into())
    }

    pub fn file<P: AsRef<Path>>(path: P) -> Self {
        CredentialSource::File(path.as_ref().to_path_buf())
    }

    /// Reads the seed and parses it into a signing key pair.
    pub fn load(&self) -> Result<KeyPair, CredentialError> {
        let seed = self.read_seed()?;
        KeyPair::from_secret_seed(seed.trim()).map_err(|cause| CredentialError::Invalid {
            source_name: self.to_string(),
            cause,
        })
    }

    fn read_seed(&self) -> Result<Zeroizing<String>, CredentialError> {
        match self {
            CredentialSource::Env(name) => std::env::var(name)
                .map(Zeroizing::new)
                .map_err(|_| CredentialError::MissingEnv(name.clone())),
            CredentialSource::File(path) => {
                let contents = Zeroizing::new(std::fs::read_to_string(path).map_err(|e| {
                    CredentialError::Unreadable {
                        path: path.clone(),
                        message: e.to_string(),
                    }
                })?);
                let first_line = contents.lines().next().unwrap_or_default();
                Ok(Zeroizing::new(first_line.to_string()))
            }
        }
    }
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::Env(name) => write!(f, "environment variable {name}"),
            CredentialSource::File(path) => write!(f, "file {}", path.display()),
        }
    }
}
