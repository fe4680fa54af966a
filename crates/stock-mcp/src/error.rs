//! Error types for the transports

use thiserror::Error;

/// Transport failures on either side of the wire
///
/// Tool failures never surface here on the serving side: they are answered
/// as error envelopes.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Reading or writing the stdio stream failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A response could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The HTTP listener could not bind
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// A request to a running HTTP server failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// `GET /health` answered with something other than 200
    #[error("Server health check failed: HTTP {status}")]
    Unhealthy { status: u16 },

    /// The server rejected the request; `message` is its `error` field
    #[error("Error: {message}")]
    Remote { status: u16, message: String },
}

/// Result type for transport operations
pub type Result<T> = std::result::Result<T, ServerError>;
