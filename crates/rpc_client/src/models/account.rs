use serde::{Deserialize, Deserializer, Serialize};

/// The subset of `GET /accounts/{id}` needed to build a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountResponse {
    /// Account id (`G...`).
    pub account_id: String,

    /// Current sequence number; Horizon sends it as a decimal string.
    #[serde(deserialize_with = "i64_from_string")]
    pub sequence: i64,

    /// Number of subentries (trustlines, offers, data entries) the account owns.
    #[serde(default)]
    pub subentry_count: u32,
}

fn i64_from_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Sequence {
        Text(String),
        Number(i64),
    }

    match Sequence::deserialize(deserializer)? {
        Sequence::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
        Sequence::Number(number) => Ok(number),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_accepts_string_form() {
        let account: AccountResponse = serde_json::from_str(
            r#"{"id":"GA","account_id":"GA","sequence":"120192344791990273","subentry_count":2}"#,
        )
        .unwrap();
        assert_eq!(account.sequence, 120192344791990273);
        assert_eq!(account.subentry_count, 2);
    }

    #[test]
    fn sequence_rejects_garbage() {
        let result = serde_json::from_str::<AccountResponse>(r#"{"account_id":"GA","sequence":"abc"}"#);
        assert!(result.is_err());
    }
}
