//! `stdio` and `http` subcommands

use anyhow::Result;
use stock_mcp::{HttpServer, StdioServer};
use stock_utils::Config;
use tracing::info;

use super::build_registry;

pub async fn stdio(config: &Config) -> Result<()> {
    let registry = build_registry(config)?;
    info!("Starting stock market MCP server on stdio");

    StdioServer::new(registry).serve().await?;
    Ok(())
}

pub async fn http(mut config: Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    let registry = build_registry(&config)?;
    info!(address = %config.bind_address(), "Starting stock market HTTP server");

    HttpServer::new(registry, config.bind_address()).start().await?;
    Ok(())
}
