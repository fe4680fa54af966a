//! HttpClient against a live HTTP mirror on an ephemeral port

use async_trait::async_trait;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use stock_core::Error;
use stock_mcp::{HttpClient, ServerError, create_router};
use stock_tools::{Tool, ToolRegistry, schema};

/// `FAIL` is a lookup failure; everything else echoes back
struct Lookup;

#[async_trait]
impl Tool for Lookup {
    async fn execute(&self, params: Value) -> stock_core::Result<Value> {
        schema::validate_arguments(&params, &self.input_schema())?;
        match params["symbol"].as_str() {
            Some("FAIL") => Err(Error::not_found("FAIL")),
            symbol => Ok(json!({"symbol": symbol, "price": 189.84})),
        }
    }

    fn name(&self) -> &'static str {
        "lookup"
    }

    fn description(&self) -> &'static str {
        "Look up a symbol"
    }

    fn input_schema(&self) -> Value {
        schema::object(json!({"symbol": schema::string(None)}), vec!["symbol"])
    }
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

async fn connect() -> HttpClient {
    let registry = ToolRegistry::new().with_tool(Arc::new(Lookup));
    let url = serve(create_router(registry)).await;
    HttpClient::connect(url, Duration::from_secs(5)).await.unwrap()
}

#[tokio::test]
async fn test_connect_checks_health() {
    let client = connect().await;

    let health = client.health().await.unwrap();
    assert_eq!(health, json!({"status": "healthy", "tools": 1}));
    assert!(client.base_url().starts_with("http://127.0.0.1:"));
}

#[tokio::test]
async fn test_trailing_slash_is_ignored() {
    let registry = ToolRegistry::new().with_tool(Arc::new(Lookup));
    let url = serve(create_router(registry)).await;

    let client = HttpClient::connect(format!("{url}/"), Duration::from_secs(5))
        .await
        .unwrap();
    assert_eq!(client.base_url(), url);
    assert_eq!(client.list_tools().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_unhealthy_server_fails_to_connect() {
    let app = Router::new().route("/health", get(|| async { StatusCode::SERVICE_UNAVAILABLE }));
    let url = serve(app).await;

    let err = HttpClient::connect(url, Duration::from_secs(5))
        .await
        .unwrap_err();
    assert!(matches!(err, ServerError::Unhealthy { status: 503 }));
}

#[tokio::test]
async fn test_unreachable_server_fails_to_connect() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = HttpClient::connect(format!("http://{addr}"), Duration::from_secs(5))
        .await
        .unwrap_err();
    assert!(matches!(err, ServerError::Request(_)));
}

#[tokio::test]
async fn test_list_tools() {
    let client = connect().await;

    let tools = client.list_tools().await.unwrap();
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0].name, "lookup");
    assert_eq!(tools[0].input_schema["required"], json!(["symbol"]));
}

#[tokio::test]
async fn test_call_tool_returns_envelope_text() {
    let client = connect().await;

    let result = client
        .call_tool("lookup", json!({"symbol": "AAPL"}))
        .await
        .unwrap();

    assert!(!result.is_error());
    let payload: Value = serde_json::from_str(result.text().unwrap()).unwrap();
    assert_eq!(payload, json!({"symbol": "AAPL", "price": 189.84}));
}

#[tokio::test]
async fn test_tool_failure_is_error_envelope() {
    let client = connect().await;

    let result = client
        .call_tool("lookup", json!({"symbol": "FAIL"}))
        .await
        .unwrap();

    assert!(result.is_error());
    let payload: Value = serde_json::from_str(result.text().unwrap()).unwrap();
    assert_eq!(payload, json!({"error": "No data found for symbol FAIL"}));
}

#[tokio::test]
async fn test_rejected_call_carries_server_message() {
    let client = connect().await;

    let err = client.call_tool("nope", json!({})).await.unwrap_err();
    assert!(matches!(err, ServerError::Remote { status: 400, .. }));
    assert_eq!(err.to_string(), "Error: Unknown tool: nope");

    let err = client.call_tool("lookup", json!({})).await.unwrap_err();
    assert_eq!(err.to_string(), "Error: Missing required field(s): symbol");
}
