use serde::{Deserialize, Serialize};
use std::fmt;

/// RFC 7807 problem document Horizon returns for failed requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemResponse {
    #[serde(rename = "type", default)]
    pub problem_type: String,
    pub title: String,
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub extras: Option<ProblemExtras>,
}

/// Transaction-specific problem details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemExtras {
    #[serde(default)]
    pub envelope_xdr: Option<String>,
    #[serde(default)]
    pub result_xdr: Option<String>,
    #[serde(default)]
    pub result_codes: Option<ResultCodes>,
}

/// Symbolic result codes, e.g. `tx_failed` with `["op_low_reserve"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultCodes {
    pub transaction: String,
    #[serde(default)]
    pub operations: Vec<String>,
}

impl fmt::Display for ResultCodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.transaction)?;
        if !self.operations.is_empty() {
            write!(f, " [{}]", self.operations.join(", "))?;
        }
        Ok(())
    }
}
