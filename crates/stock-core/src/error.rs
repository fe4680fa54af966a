//! Error types for stock-core

use std::fmt;
use thiserror::Error;

/// Boxed error used as the nested cause of upstream failures
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias for stock-core
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for stock lookups
#[derive(Error, Debug)]
pub enum Error {
    /// The provider returned no data for the symbol
    #[error("No data found for symbol {symbol}")]
    NotFound {
        symbol: String,
    },

    /// The provider could not be reached or answered with something unusable
    #[error("Upstream provider unavailable: {message}")]
    UpstreamUnavailable {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// The request was missing fields or named an unknown operation
    #[error("{0}")]
    Validation(String),

    /// Startup configuration is missing or invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Discriminant of [`Error`], used by transports to choose a response shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    UpstreamUnavailable,
    Validation,
    Config,
}

impl Error {
    /// Symbol not found upstream
    pub fn not_found(symbol: impl Into<String>) -> Self {
        Self::NotFound {
            symbol: symbol.into(),
        }
    }

    /// Upstream failure without an underlying error value
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::UpstreamUnavailable {
            message: message.into(),
            source: None,
        }
    }

    /// Upstream failure wrapping the transport error that caused it
    ///
    /// The cause's text is embedded in the message so callers that only see
    /// `Display` still get the original failure.
    pub fn upstream_with<E>(context: &str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::UpstreamUnavailable {
            message: format!("{context}: {source}"),
            source: Some(Box::new(source)),
        }
    }

    /// Invalid request
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::UpstreamUnavailable { .. } => ErrorKind::UpstreamUnavailable,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Config(_) => ErrorKind::Config,
        }
    }

    /// Whether the caller, rather than the provider, is at fault
    pub fn is_client_error(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotFound => "not_found",
            Self::UpstreamUnavailable => "upstream_unavailable",
            Self::Validation => "validation",
            Self::Config => "config",
        };
        f.write_str(name)
    }
}
