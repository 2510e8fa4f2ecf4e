use serde::{Deserialize, Serialize};

/// Body of a successful `POST /transactions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitTransactionResponse {
    /// Transaction hash, hex.
    pub hash: String,

    /// Ledger the transaction was included in.
    #[serde(default)]
    pub ledger: Option<u32>,

    #[serde(default = "default_successful")]
    pub successful: bool,

    pub envelope_xdr: String,

    pub result_xdr: String,

    #[serde(default)]
    pub result_meta_xdr: Option<String>,
}

fn default_successful() -> bool {
    true
}
