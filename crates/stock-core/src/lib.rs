//! Core types for stock-mcp
//!
//! This crate defines the error taxonomy every layer of the workspace shares:
//! translators raise it, the comparison aggregator demotes it into inline
//! entries, and the transports match on [`ErrorKind`] to pick an envelope or
//! status code.

pub mod error;

pub use error::{BoxError, Error, ErrorKind, Result};
