//! CLI argument definitions

use clap::{Parser, Subcommand};

/// Stock market lookups over MCP (stdio) or HTTP
#[derive(Parser, Debug)]
#[command(name = "stock-mcp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Upstream request timeout in seconds (overrides REQUEST_TIMEOUT_SECS)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve MCP over stdin/stdout
    Stdio,

    /// Serve the HTTP mirror
    Http {
        /// Host to bind (overrides HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List the available tools
    Tools {
        /// Ask a running HTTP server instead of building the tools locally
        #[arg(long, env = "STOCK_MCP_SERVER")]
        server: Option<String>,
    },

    /// Invoke one tool and print its result
    Call {
        /// Tool name, e.g. get_stock_price
        name: String,

        /// Tool arguments as a JSON object
        #[arg(short, long, default_value = "{}")]
        args: String,

        /// Call a running HTTP server, e.g. http://localhost:3000
        #[arg(long, env = "STOCK_MCP_SERVER")]
        server: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_http_overrides() {
        let cli = Cli::parse_from(["stock-mcp", "http", "--port", "8080", "--timeout", "5"]);

        assert_eq!(cli.timeout, Some(5));
        match cli.command {
            Commands::Http { host, port } => {
                assert_eq!(host, None);
                assert_eq!(port, Some(8080));
            }
            other => panic!("expected http, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_call() {
        let cli = Cli::parse_from([
            "stock-mcp",
            "call",
            "compare_stocks",
            "--args",
            r#"{"symbols":["AAPL","MSFT"]}"#,
        ]);

        match cli.command {
            Commands::Call { name, args, .. } => {
                assert_eq!(name, "compare_stocks");
                assert!(args.contains("MSFT"));
            }
            other => panic!("expected call, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_remote_server() {
        let cli = Cli::parse_from([
            "stock-mcp",
            "call",
            "get_stock_price",
            "--args",
            r#"{"symbol":"AAPL"}"#,
            "--server",
            "http://localhost:3000",
        ]);
        match cli.command {
            Commands::Call { server, .. } => {
                assert_eq!(server.as_deref(), Some("http://localhost:3000"));
            }
            other => panic!("expected call, got {other:?}"),
        }

        let cli = Cli::parse_from(["stock-mcp", "tools", "--server", "http://10.0.0.5:3000"]);
        match cli.command {
            Commands::Tools { server } => {
                assert_eq!(server.as_deref(), Some("http://10.0.0.5:3000"));
            }
            other => panic!("expected tools, got {other:?}"),
        }
    }
}
