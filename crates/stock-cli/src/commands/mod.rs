//! Subcommand implementations

pub mod serve;
pub mod tools;

use anyhow::{Context, Result, bail};
use std::sync::Arc;
use std::time::Duration;
use stock_data::{AlphaVantageClient, default_registry};
use stock_mcp::HttpClient;
use stock_tools::ToolRegistry;
use stock_utils::Config;
use stock_utils::config::DEFAULT_REQUEST_TIMEOUT;

/// Load configuration from the environment, applying CLI overrides
///
/// A missing API key stops every subcommand before anything is served.
pub fn load_config(timeout: Option<u64>) -> Result<Config> {
    let mut config = Config::from_env().context("Failed to load configuration")?;

    if let Some(secs) = timeout {
        config.request_timeout = Duration::from_secs(secs);
        config.validate().context("Invalid --timeout")?;
    }

    Ok(config)
}

/// Registry of the stock tools backed by Alpha Vantage
pub fn build_registry(config: &Config) -> Result<ToolRegistry> {
    let client = AlphaVantageClient::from_config(config)?;
    Ok(default_registry(Arc::new(client)))
}

/// Connect to a running HTTP server
///
/// The server holds the API key, so no local configuration is loaded.
pub async fn connect(server: &str, timeout: Option<u64>) -> Result<HttpClient> {
    let timeout = timeout.map_or(DEFAULT_REQUEST_TIMEOUT, Duration::from_secs);
    if timeout.is_zero() {
        bail!("--timeout must be greater than 0");
    }

    HttpClient::connect(server, timeout)
        .await
        .with_context(|| format!("Failed to connect to {server}"))
}
