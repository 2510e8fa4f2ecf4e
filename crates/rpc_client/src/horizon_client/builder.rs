use super::{HorizonClient, DEFAULT_HTTP_TIMEOUT};
use crate::{HorizonError, HorizonResult};
use reqwest::Client;
use url::Url;
use std::time::Duration;

/// Configures a [`HorizonClient`].
#[derive(Debug, Clone)]
pub struct HorizonClientBuilder {
    base_url: Url,
    timeout: Duration,
    user_agent: Option<String>,
    http_client: Option<Client>,
}

impl HorizonClientBuilder {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: DEFAULT_HTTP_TIMEOUT,
            user_agent: None,
            http_client: None,
        }
    }

    /// Per-request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Reuses an existing `reqwest` client instead of building one.
    #[must_use]
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn build(self) -> HorizonResult<HorizonClient> {
        if self.base_url.cannot_be_a_base() {
            return Err(HorizonError::invalid_url(format!(
                "{} cannot be a base URL",
                self.base_url
            )));
        }
        if !matches!(self.base_url.scheme(), "http" | "https") {
            return Err(HorizonError::invalid_url(format!(
                "unsupported scheme {}",
                self.base_url.scheme()
            )));
        }

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let user_agent = self.user_agent.unwrap_or_else(|| {
                    format!("stellar-data/{}", env!("CARGO_PKG_VERSION"))
                });
                Client::builder()
                    .timeout(self.timeout)
                    .user_agent(user_agent)
                    .build()?
            }
        };

        Ok(HorizonClient {
            base_url: self.base_url,
            http_client,
            request_timeout: self.timeout,
        })
    }
}
