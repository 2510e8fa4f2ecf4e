use super::builder::HorizonClientBuilder;
use super::HorizonClient;
use crate::models::{
    AccountResponse, DataLookup, DataValueResponse, ProblemResponse, SubmitTransactionResponse,
};
use crate::{HorizonError, HorizonResult};
use base64::{engine::general_purpose, Engine as _};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use stellar_data_config::ClientSettings;
use stellar_data_core::TransactionEnvelope;
use tracing::{debug, info, warn};
use url::Url;

impl HorizonClient {
    /// Creates a configurable builder for the client.
    #[must_use]
    pub fn builder(base_url: Url) -> HorizonClientBuilder {
        HorizonClientBuilder::new(base_url)
    }

    /// Creates a client for `base_url` with default settings.
    pub fn new(base_url: &str) -> HorizonResult<Self> {
        let url = Url::parse(base_url).map_err(|e| HorizonError::invalid_url(e.to_string()))?;
        Self::builder(url).build()
    }

    /// Creates a client for the Horizon URL and request timeout in `settings`.
    pub fn from_settings(settings: &ClientSettings) -> HorizonResult<Self> {
        let url = Url::parse(settings.horizon_url())
            .map_err(|e| HorizonError::invalid_url(e.to_string()))?;
        Self::builder(url)
            .timeout(settings.request_timeout())
            .build()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> HorizonResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| HorizonError::invalid_url(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get(&self, url: Url) -> HorizonResult<Response> {
        let start = Instant::now();
        let response = self
            .http_client
            .get(url.clone())
            .timeout(self.request_timeout)
            .send()
            .await?;
        debug!(
            target: "stellar_data",
            url = %url,
            status = response.status().as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "horizon request"
        );
        Ok(response)
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> HorizonResult<T> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| HorizonError::invalid_response(e.to_string()))
    }

    async fn unexpected(response: Response) -> HorizonError {
        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                debug!(target: "stellar_data", status, error = %err, "unreadable error body");
                format!("<response body unreadable: {err}>")
            }
        };
        HorizonError::UnexpectedStatus { status, body }
    }

    /// Loads an account to learn its current sequence number.
    ///
    /// # Errors
    ///
    /// [`HorizonError::AccountNotFound`] when Horizon answers 404.
    pub async fn load_account(&self, account_id: &str) -> HorizonResult<AccountResponse> {
        let url = self.endpoint(&["accounts", account_id])?;
        let response = self.get(url).await?;
        match response.status() {
            status if status.is_success() => Self::read_json(response).await,
            StatusCode::NOT_FOUND => Err(HorizonError::AccountNotFound {
                account: account_id.to_string(),
            }),
            _ => Err(Self::unexpected(response).await),
        }
    }

    /// Submits a signed envelope.
    pub async fn submit_transaction(
        &self,
        envelope: &TransactionEnvelope,
    ) -> HorizonResult<SubmitTransactionResponse> {
        let envelope_xdr = envelope
            .to_xdr_base64()
            .map_err(|e| HorizonError::decode(e.to_string()))?;
        self.submit_transaction_xdr(&envelope_xdr).await
    }

    /// Submits a base64 envelope as the `tx` form field of `POST /transactions`.
    ///
    /// # Errors
    ///
    /// A problem document turns into [`HorizonError::TransactionFailed`]
    /// carrying its result codes and `result_xdr`.
    pub async fn submit_transaction_xdr(
        &self,
        envelope_xdr: &str,
    ) -> HorizonResult<SubmitTransactionResponse> {
        let url = self.endpoint(&["transactions"])?;
        let start = Instant::now();
        let response = self
            .http_client
            .post(url)
            .timeout(self.request_timeout)
            .form(&[("tx", envelope_xdr)])
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            let submitted: SubmitTransactionResponse = serde_json::from_str(&body)
                .map_err(|e| HorizonError::invalid_response(e.to_string()))?;
            info!(
                target: "stellar_data",
                hash = %submitted.hash,
                ledger = ?submitted.ledger,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "transaction submitted"
            );
            return Ok(submitted);
        }

        match serde_json::from_str::<ProblemResponse>(&body) {
            Ok(problem) => {
                let extras = problem.extras.unwrap_or_default();
                warn!(
                    target: "stellar_data",
                    status = status.as_u16(),
                    title = %problem.title,
                    result_codes = ?extras.result_codes,
                    "transaction rejected"
                );
                Err(HorizonError::TransactionFailed {
                    status: status.as_u16(),
                    title: problem.title,
                    result_codes: extras.result_codes,
                    result_xdr: extras.result_xdr,
                    body,
                })
            }
            Err(_) => Err(HorizonError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            }),
        }
    }

    /// Reads the raw bytes of a data entry.
    pub async fn get_account_data_raw(
        &self,
        account_id: &str,
        name: &str,
    ) -> HorizonResult<DataLookup<Vec<u8>>> {
        let url = self.endpoint(&["accounts", account_id, "data", name])?;
        let response = self.get(url).await?;
        match response.status() {
            status if status.is_success() => {
                let data: DataValueResponse = Self::read_json(response).await?;
                let bytes = general_purpose::STANDARD
                    .decode(data.value.trim())
                    .map_err(|e| HorizonError::decode(format!("data value is not base64: {e}")))?;
                debug!(
                    target: "stellar_data",
                    account = %account_id,
                    name = %name,
                    bytes = bytes.len(),
                    "data entry found"
                );
                Ok(DataLookup::Found(bytes))
            }
            StatusCode::NOT_FOUND => {
                debug!(target: "stellar_data", account = %account_id, name = %name, "data entry not found");
                Ok(DataLookup::NotFound)
            }
            _ => Err(Self::unexpected(response).await),
        }
    }

    /// Reads a data entry as UTF-8 text.
    ///
    /// # Errors
    ///
    /// [`HorizonError::Decode`] when the stored bytes are not UTF-8.
    pub async fn get_account_data(
        &self,
        account_id: &str,
        name: &str,
    ) -> HorizonResult<DataLookup<String>> {
        match self.get_account_data_raw(account_id, name).await? {
            DataLookup::Found(bytes) => String::from_utf8(bytes)
                .map(DataLookup::Found)
                .map_err(|e| HorizonError::decode(format!("data value is not UTF-8: {e}"))),
            DataLookup::NotFound => Ok(DataLookup::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_encodes_segments() {
        let client = HorizonClient::new("https://horizon-testnet.stellar.org").unwrap();
        let url = client
            .endpoint(&["accounts", "GABC", "data", "my key/1"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://horizon-testnet.stellar.org/accounts/GABC/data/my%20key%2F1"
        );
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let client = HorizonClient::new("http://localhost:8000/horizon/").unwrap();
        let url = client.endpoint(&["transactions"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/horizon/transactions");
    }

    #[test]
    fn rejects_non_http_urls() {
        assert!(matches!(
            HorizonClient::new("mailto:someone@example.com"),
            Err(HorizonError::InvalidUrl { .. })
        ));
        assert!(matches!(
            HorizonClient::new("ftp://example.com"),
            Err(HorizonError::InvalidUrl { .. })
        ));
        assert!(matches!(
            HorizonClient::new("not a url"),
            Err(HorizonError::InvalidUrl { .. })
        ));
    }
}
