//! Model Context Protocol (MCP) server for the stock tools
//!
//! Two interchangeable transports expose the same [`ToolRegistry`]:
//! - [`StdioServer`]: line-delimited JSON-RPC 2.0 on stdin/stdout
//! - [`HttpServer`]: an axum mirror with `/health`, `/tools` and `/tools/call`
//!
//! Both wrap every tool outcome in a [`ToolResult`] envelope; tool failures
//! are answered, never propagated out of the serving loop.
//!
//! [`HttpClient`] talks to a running HTTP mirror from another process.
//!
//! # Example
//!
//! ```no_run
//! use stock_mcp::StdioServer;
//! use stock_tools::ToolRegistry;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut server = StdioServer::new(ToolRegistry::new());
//! server.serve().await?;
//! # Ok(())
//! # }
//! ```
//!
//! [`ToolRegistry`]: stock_tools::ToolRegistry

pub mod client;
pub mod error;
pub mod protocol;
pub mod server;

pub use client::HttpClient;
pub use error::{Result, ServerError};
pub use protocol::{Content, ServerInfo, ToolResult};
pub use server::{HttpServer, ServerState, StdioServer, create_router};
