//! Process configuration loaded from the environment

use std::fmt;
use std::time::Duration;
use stock_core::{Error, Result};
use url::Url;

/// Primary variable holding the upstream credential
pub const API_KEY_VAR: &str = "ALPHAVANTAGE_API_KEY";
/// Accepted spelling used by older deployments
pub const API_KEY_FALLBACK_VAR: &str = "ALPHA_VANTAGE_API_KEY";
pub const BASE_URL_VAR: &str = "ALPHAVANTAGE_BASE_URL";
pub const HOST_VAR: &str = "HOST";
pub const PORT_VAR: &str = "PORT";
pub const TIMEOUT_VAR: &str = "REQUEST_TIMEOUT_SECS";

pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration shared by both transports
#[derive(Clone)]
pub struct Config {
    /// Alpha Vantage API key
    pub api_key: String,

    /// Upstream query endpoint
    pub base_url: String,

    /// HTTP bind host
    pub host: String,

    /// HTTP bind port
    pub port: u16,

    /// Timeout applied to every upstream request
    pub request_timeout: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl Config {
    /// Create a new configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Load configuration from process environment variables
    ///
    /// A missing or blank API key is an error for every transport.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(key) = lookup(API_KEY_VAR).or_else(|| lookup(API_KEY_FALLBACK_VAR)) {
            builder = builder.api_key(key);
        }
        if let Some(url) = lookup(BASE_URL_VAR) {
            builder = builder.base_url(url);
        }
        if let Some(host) = lookup(HOST_VAR) {
            builder = builder.host(host);
        }
        if let Some(port) = lookup(PORT_VAR) {
            let port = port
                .trim()
                .parse::<u16>()
                .map_err(|e| Error::Config(format!("{PORT_VAR} must be a port number: {e}")))?;
            builder = builder.port(port);
        }
        if let Some(secs) = lookup(TIMEOUT_VAR) {
            let secs = secs
                .trim()
                .parse::<u64>()
                .map_err(|e| Error::Config(format!("{TIMEOUT_VAR} must be whole seconds: {e}")))?;
            builder = builder.request_timeout(Duration::from_secs(secs));
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::Config(format!(
                "{API_KEY_VAR} is not set; the upstream provider rejects unauthenticated calls"
            )));
        }

        let url = Url::parse(&self.base_url)
            .map_err(|e| Error::Config(format!("Invalid base URL '{}': {e}", self.base_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "Base URL must be http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.request_timeout.is_zero() {
            return Err(Error::Config(
                "request_timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Socket address string for the HTTP listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Builder for Config
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    request_timeout: Option<Duration>,
}

impl ConfigBuilder {
    /// Set the API key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the upstream endpoint
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the HTTP bind host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the HTTP bind port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the upstream request timeout
    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(duration);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<Config> {
        let config = Config {
            api_key: self.api_key.unwrap_or_default(),
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            host: self.host.unwrap_or_else(|| "0.0.0.0".to_string()),
            port: self.port.unwrap_or(3000),
            request_timeout: self.request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT),
        };

        config.validate()?;
        Ok(config)
    }
}
