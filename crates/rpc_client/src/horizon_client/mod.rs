//! HTTP client for the Horizon REST API.

mod builder;
mod client;

use reqwest::Client;
use url::Url;
use std::time::Duration;
use stellar_data_config::DEFAULT_HTTP_TIMEOUT_SECS;

pub use builder::HorizonClientBuilder;

/// Timeout applied to every request unless the builder overrides it.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS);

/// Talks to one Horizon instance.
///
/// Every call is a single request with no retries.
#[derive(Debug, Clone)]
pub struct HorizonClient {
    base_url: Url,
    http_client: Client,
    request_timeout: Duration,
}
