//! Alpha Vantage API client

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use stock_core::{Error, Result};
use stock_utils::Config;
use tracing::debug;

/// `function` value for the real-time quote endpoint
pub const GLOBAL_QUOTE: &str = "GLOBAL_QUOTE";
/// `function` value for the company fundamentals endpoint
pub const OVERVIEW: &str = "OVERVIEW";

/// Raw access to the provider's two endpoints
///
/// Implementations handle transport concerns only: they return the decoded
/// JSON body, or `UpstreamUnavailable` when the provider cannot be reached,
/// answers with a non-2xx status, or reports an `Error Message`. Deciding
/// whether a body holds data is the translators' job.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch the `GLOBAL_QUOTE` payload for a symbol
    async fn global_quote(&self, symbol: &str) -> Result<Value>;

    /// Fetch the `OVERVIEW` payload for a symbol
    async fn company_overview(&self, symbol: &str) -> Result<Value>;
}

/// Alpha Vantage API client
#[derive(Clone)]
pub struct AlphaVantageClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl fmt::Debug for AlphaVantageClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlphaVantageClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl AlphaVantageClient {
    /// Create a new Alpha Vantage client
    ///
    /// # Arguments
    /// * `api_key` - Alpha Vantage API key
    /// * `base_url` - Query endpoint, normally `https://www.alphavantage.co/query`
    /// * `timeout` - Timeout applied to each request
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }

    /// Create from the validated process configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.api_key.clone(),
            config.base_url.clone(),
            config.request_timeout,
        )
    }

    /// Endpoint this client queries
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one query and decode the body
    async fn query(&self, function: &str, symbol: &str) -> Result<Value> {
        let params = [
            ("function", function),
            ("symbol", symbol),
            ("apikey", self.api_key.as_str()),
        ];

        debug!(function, symbol, "Querying Alpha Vantage");

        // Strip the URL from transport errors: it carries the API key.
        let response = self
            .client
            .get(&self.base_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| Error::upstream_with("Request to provider failed", e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::upstream(format!("Provider returned HTTP {status}")));
        }

        let data: Value = response.json().await.map_err(|e| {
            Error::upstream_with("Provider returned an unreadable body", e.without_url())
        })?;

        if let Some(message) = data.get("Error Message") {
            let message = message.as_str().map_or_else(|| message.to_string(), str::to_string);
            return Err(Error::upstream(format!(
                "Provider rejected the request: {message}"
            )));
        }

        Ok(data)
    }
}

#[async_trait]
impl QuoteSource for AlphaVantageClient {
    async fn global_quote(&self, symbol: &str) -> Result<Value> {
        self.query(GLOBAL_QUOTE, symbol).await
    }

    async fn company_overview(&self, symbol: &str) -> Result<Value> {
        self.query(OVERVIEW, symbol).await
    }
}
