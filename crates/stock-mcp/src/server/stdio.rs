//! Stdio transport MCP server
//!
//! Reads one JSON-RPC 2.0 message per line from stdin and writes one
//! response per line to stdout. Stdout carries protocol frames only; logs go
//! to stderr.

use serde_json::Value;
use stock_tools::ToolRegistry;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::protocol::{
    CallToolParams, INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, JsonRpcRequest,
    JsonRpcResponse, METHOD_NOT_FOUND, PARSE_ERROR, ServerInfo, ToolResult, initialize_result, manifest,
};

/// Lifecycle of the stdio loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    /// Created, no stream attached yet
    Uninitialized,
    /// Waiting for the next line
    Listening,
    /// Handling one request
    Dispatching,
    /// Input reached EOF
    Closed,
}

/// MCP server speaking JSON-RPC over a line-delimited stream
pub struct StdioServer {
    registry: ToolRegistry,
    info: ServerInfo,
    state: ServerState,
}

impl StdioServer {
    /// Create a server exposing every tool in `registry`
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry,
            info: ServerInfo::default(),
            state: ServerState::Uninitialized,
        }
    }

    /// Override the identity reported by `initialize`
    pub fn with_info(mut self, info: ServerInfo) -> Self {
        self.info = info;
        self
    }

    pub fn state(&self) -> ServerState {
        self.state
    }

    /// Serve on the process stdin/stdout until stdin closes
    pub async fn serve(&mut self) -> Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.run(stdin, stdout).await
    }

    /// Serve on an arbitrary reader/writer pair until the reader reaches EOF
    ///
    /// Only stream failures end the loop early. Malformed input and tool
    /// failures are answered and the loop keeps listening.
    pub async fn run<R, W>(&mut self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        self.state = ServerState::Listening;
        info!(tools = self.registry.len(), "MCP stdio server listening");

        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            self.state = ServerState::Dispatching;
            let response = self.handle_line(&line).await;
            self.state = ServerState::Listening;

            if let Some(response) = response {
                let mut frame = serde_json::to_string(&response)?;
                frame.push('\n');
                writer.write_all(frame.as_bytes()).await?;
                writer.flush().await?;
            }
        }

        self.state = ServerState::Closed;
        info!("Stdin closed, MCP stdio server stopped");
        Ok(())
    }

    /// Handle one raw line; `None` means nothing is written back
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let message: Value = match serde_json::from_str(line) {
            Ok(message) => message,
            Err(e) => {
                warn!(error = %e, "Discarding malformed JSON-RPC frame");
                return Some(JsonRpcResponse::error(
                    Value::Null,
                    PARSE_ERROR,
                    format!("Parse error: {e}"),
                ));
            }
        };

        let id = message.get("id").cloned().unwrap_or(Value::Null);
        let request: JsonRpcRequest = match serde_json::from_value(message) {
            Ok(request) => request,
            Err(e) => {
                return Some(JsonRpcResponse::error(
                    id,
                    INVALID_REQUEST,
                    format!("Invalid request: {e}"),
                ));
            }
        };

        self.handle_request(request).await
    }

    async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        debug!(method = %request.method, "Received request");

        if request.is_notification() {
            debug!(method = %request.method, "Notification acknowledged");
            return None;
        }

        let id = request.id.unwrap_or(Value::Null);
        if id.is_null() {
            return Some(JsonRpcResponse::error(
                Value::Null,
                INVALID_REQUEST,
                "Invalid request: id must not be null",
            ));
        }

        let response = match request.method.as_str() {
            "initialize" => {
                info!(name = %self.info.name, version = %self.info.version, "Client initialized");
                JsonRpcResponse::result(id, initialize_result(&self.info))
            }
            "ping" => JsonRpcResponse::result(id, Value::Object(serde_json::Map::new())),
            "tools/list" => JsonRpcResponse::result(id, manifest(&self.registry.definitions())),
            "tools/call" => self.call_tool(id, request.params).await,
            method => JsonRpcResponse::error(
                id,
                METHOD_NOT_FOUND,
                format!("Method not found: {method}"),
            ),
        };

        Some(response)
    }

    async fn call_tool(&self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let params: CallToolParams = match params.map(serde_json::from_value) {
            Some(Ok(params)) => params,
            Some(Err(e)) => {
                return JsonRpcResponse::error(id, INVALID_PARAMS, format!("Invalid params: {e}"));
            }
            None => return JsonRpcResponse::error(id, INVALID_PARAMS, "Missing params"),
        };

        let result = match params.arguments {
            Some(arguments) if arguments.is_object() => {
                let outcome = self.registry.call(&params.name, arguments).await;
                if let Err(e) = &outcome {
                    warn!(tool = %params.name, kind = %e.kind(), error = %e, "Tool call failed");
                }
                ToolResult::from_outcome(&outcome)
            }
            _ => ToolResult::error("Missing required field(s): arguments"),
        };

        match serde_json::to_value(&result) {
            Ok(result) => JsonRpcResponse::result(id, result),
            Err(e) => JsonRpcResponse::error(id, INTERNAL_ERROR, format!("Unserializable result: {e}")),
        }
    }
}
