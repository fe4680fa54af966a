//! HTTP client for a running `stock-mcp http` server

use std::time::Duration;

use reqwest::{Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use stock_tools::ToolDefinition;
use tracing::{debug, info, warn};

use crate::error::{Result, ServerError};
use crate::protocol::{CallToolParams, ToolResult};

/// Client for the HTTP mirror
///
/// [`HttpClient::connect`] runs the health check before returning, so a
/// client only exists once the server has answered `GET /health` with 200.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    http_client: reqwest::Client,
}

#[derive(Deserialize)]
struct Manifest {
    tools: Vec<ToolDefinition>,
}

impl HttpClient {
    /// Connect to the server at `base_url` (e.g. `http://localhost:3000`)
    pub async fn connect(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;

        let client = Self {
            base_url,
            http_client,
        };
        client.health().await?;

        info!(url = %client.base_url, "Connected to stock-mcp HTTP server");
        Ok(client)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /health`
    pub async fn health(&self) -> Result<Value> {
        let response = self.http_client.get(self.url("/health")).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(url = %self.base_url, status = status.as_u16(), "Health check failed");
            return Err(ServerError::Unhealthy {
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }

    /// `GET /tools`, in manifest order
    pub async fn list_tools(&self) -> Result<Vec<ToolDefinition>> {
        let response = self.http_client.get(self.url("/tools")).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = read_body(response).await?;
            return Err(remote_error(status, &body));
        }

        Ok(response.json::<Manifest>().await?.tools)
    }

    /// `POST /tools/call`
    ///
    /// Successes and tool failures (HTTP 500 with an error envelope) both come
    /// back as a [`ToolResult`]; check [`ToolResult::is_error`]. Requests the
    /// server refuses to run, such as an unknown tool or missing arguments,
    /// are [`ServerError::Remote`].
    pub async fn call_tool(&self, name: &str, arguments: Value) -> Result<ToolResult> {
        let params = CallToolParams {
            name: name.to_string(),
            arguments: Some(arguments),
        };

        debug!(tool = name, url = %self.base_url, "Calling remote tool");
        let response = self
            .http_client
            .post(self.url("/tools/call"))
            .json(&params)
            .send()
            .await?;

        let status = response.status();
        let body = read_body(response).await?;

        if status.is_success() {
            return Ok(serde_json::from_value(body)?);
        }

        if body.get("error").is_none() {
            if let Ok(result) = serde_json::from_value::<ToolResult>(body.clone()) {
                if result.is_error() {
                    return Ok(result);
                }
            }
        }

        let err = remote_error(status, &body);
        warn!(tool = name, error = %err, "Remote tool call rejected");
        Err(err)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Body as JSON; an empty or non-JSON body reads as `null`
async fn read_body(response: Response) -> Result<Value> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn remote_error(status: StatusCode, body: &Value) -> ServerError {
    let message = body
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or("Unknown error")
        .to_string();

    ServerError::Remote {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_remote_error_message() {
        let err = remote_error(
            StatusCode::BAD_REQUEST,
            &json!({"error": "Unknown tool: nope"}),
        );
        assert_eq!(err.to_string(), "Error: Unknown tool: nope");

        let err = remote_error(StatusCode::BAD_GATEWAY, &Value::Null);
        assert!(matches!(err, ServerError::Remote { status: 502, .. }));
        assert_eq!(err.to_string(), "Error: Unknown error");
    }
}
