//! stock-mcp - stock market lookups over MCP and HTTP
//!
//! # Usage
//!
//! ```bash
//! export ALPHAVANTAGE_API_KEY=...
//!
//! # MCP over stdio (for desktop assistants)
//! stock-mcp stdio
//!
//! # HTTP mirror
//! stock-mcp http --port 3000
//!
//! # One-off lookups
//! stock-mcp tools
//! stock-mcp call get_stock_price --args '{"symbol":"AAPL"}'
//!
//! # Against a running HTTP server (no API key needed here)
//! stock-mcp call get_stock_info --args '{"symbol":"MSFT"}' --server http://localhost:3000
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};
use stock_utils::{LogTarget, init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Stdout belongs to the protocol on stdio and to command output for
    // tools/call; only the HTTP server logs there.
    let target = match cli.command {
        Commands::Http { .. } => LogTarget::Stdout,
        _ => LogTarget::Stderr,
    };
    init_tracing(target, if cli.verbose { "debug" } else { "info" });

    let timeout = cli.timeout;
    match cli.command {
        Commands::Stdio => commands::serve::stdio(&commands::load_config(timeout)?).await,
        Commands::Http { host, port } => {
            commands::serve::http(commands::load_config(timeout)?, host, port).await
        }
        Commands::Tools { server: None } => {
            commands::tools::list(&commands::load_config(timeout)?)
        }
        Commands::Tools {
            server: Some(server),
        } => commands::tools::list_remote(&commands::connect(&server, timeout).await?).await,
        Commands::Call {
            name,
            args,
            server: None,
        } => commands::tools::call(&commands::load_config(timeout)?, &name, &args).await,
        Commands::Call {
            name,
            args,
            server: Some(server),
        } => {
            let client = commands::connect(&server, timeout).await?;
            commands::tools::call_remote(&client, &name, &args).await
        }
    }
}
