//! Error types for Horizon operations.

use crate::models::ResultCodes;
use thiserror::Error;

/// Errors that can occur while talking to Horizon.
#[derive(Error, Debug)]
pub enum HorizonError {
    /// Connection, TLS or timeout failure.
    #[error("Transport error")]
    Transport(#[from] reqwest::Error),

    /// `GET /accounts/{id}` answered 404.
    #[error("Account not found: {account}")]
    AccountNotFound {
        /// Account id that was looked up.
        account: String,
    },

    /// Horizon rejected a submitted transaction.
    #[error("Transaction failed ({status}): {title}{}", result_codes_suffix(.result_codes))]
    TransactionFailed {
        /// HTTP status code.
        status: u16,
        /// Problem title, e.g. `Transaction Failed`.
        title: String,
        /// Transaction and operation result codes, when Horizon reported them.
        result_codes: Option<ResultCodes>,
        /// Base64 `TransactionResult`, when Horizon reported one.
        result_xdr: Option<String>,
        /// Raw response body.
        body: String,
    },

    /// A status the endpoint does not define.
    #[error("Unexpected HTTP status {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The body did not have the expected shape.
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// Error message.
        message: String,
    },

    /// A value in the response could not be decoded.
    #[error("Decode error: {message}")]
    Decode {
        /// Error message.
        message: String,
    },

    /// The Horizon URL cannot be used as a base for endpoint paths.
    #[error("Invalid Horizon URL: {message}")]
    InvalidUrl {
        /// Error message.
        message: String,
    },
}

fn result_codes_suffix(codes: &Option<ResultCodes>) -> String {
    codes
        .as_ref()
        .map(|codes| format!("; result codes: {codes}"))
        .unwrap_or_default()
}

impl HorizonError {
    /// Create an invalid response error.
    pub fn invalid_response<S: Into<String>>(message: S) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// Create a decode error.
    pub fn decode<S: Into<String>>(message: S) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create an invalid URL error.
    pub fn invalid_url<S: Into<String>>(message: S) -> Self {
        Self::InvalidUrl {
            message: message.into(),
        }
    }

    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::TransactionFailed { status, .. } | Self::UnexpectedStatus { status, .. } => {
                Some(*status)
            }
            Self::Transport(err) => err.status().map(|status| status.as_u16()),
            Self::AccountNotFound { .. } => Some(404),
            _ => None,
        }
    }
}

/// Result type for Horizon operations.
pub type HorizonResult<T> = std::result::Result<T, HorizonError>;
