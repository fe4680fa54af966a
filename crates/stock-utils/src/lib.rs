//! Shared utilities for stock-mcp
//!
//! This crate provides common functionality used across the stock-mcp workspace:
//! tracing setup and the environment-driven process configuration.

pub mod config;
pub mod logging;

pub use config::{Config, ConfigBuilder};
pub use logging::{LogTarget, init_tracing};
