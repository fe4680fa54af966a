//! Tool management and execution framework for stock-mcp
//!
//! This crate provides the seam between the stock translators and the two
//! transports: every operation is a [`Tool`], and a [`ToolRegistry`] holds
//! them in manifest order.

pub mod registry;
pub mod schema;
pub mod tool;

pub use registry::ToolRegistry;
pub use tool::{Tool, ToolDefinition};
