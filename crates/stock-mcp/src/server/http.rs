//! HTTP mirror of the stdio server
//!
//! - `GET /health`: liveness plus the number of tools
//! - `GET /tools`: the tool manifest
//! - `POST /tools/call`: `{name, arguments}` invocation returning the same
//!   envelope as `tools/call`

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use stock_tools::ToolRegistry;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::error::{Result, ServerError};
use crate::protocol::{ToolResult, manifest};

/// Shared handler state
pub struct AppState {
    pub registry: ToolRegistry,
}

/// Build the router with CORS and request tracing applied
pub fn create_router(registry: ToolRegistry) -> Router {
    let state = Arc::new(AppState { registry });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/tools", get(list_tools))
        .route("/tools/call", post(call_tool))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "tools": state.registry.len(),
    }))
}

async fn list_tools(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(manifest(&state.registry.definitions()))
}

fn error_body(status: StatusCode, message: impl Into<String>) -> Response {
    let message: String = message.into();
    (status, Json(json!({ "error": message }))).into_response()
}

async fn call_tool(State(state): State<Arc<AppState>>, Json(body): Json<Value>) -> Response {
    let name = body.get("name").filter(|v| !v.is_null());
    let arguments = body.get("arguments").filter(|v| !v.is_null());

    let (name, arguments) = match (name, arguments) {
        (Some(name), Some(arguments)) => (name, arguments.clone()),
        (name, arguments) => {
            let missing: Vec<&str> = [("name", name.is_none()), ("arguments", arguments.is_none())]
                .into_iter()
                .filter_map(|(field, absent)| absent.then_some(field))
                .collect();
            return error_body(
                StatusCode::BAD_REQUEST,
                format!("Missing required field(s): {}", missing.join(", ")),
            );
        }
    };

    let Some(name) = name.as_str() else {
        return error_body(StatusCode::BAD_REQUEST, "Field 'name' must be of type string");
    };

    match state.registry.call(name, arguments).await {
        Ok(payload) => (StatusCode::OK, Json(ToolResult::success(&payload))).into_response(),
        Err(e) if e.is_client_error() => {
            warn!(tool = name, error = %e, "Rejected tool call");
            error_body(StatusCode::BAD_REQUEST, e.to_string())
        }
        Err(e) => {
            warn!(tool = name, kind = %e.kind(), error = %e, "Tool call failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ToolResult::error(e.to_string())),
            )
                .into_response()
        }
    }
}

/// HTTP listener for the tool registry
pub struct HttpServer {
    registry: ToolRegistry,
    address: String,
}

impl HttpServer {
    /// Create a server that will bind `address` (`host:port`)
    pub fn new(registry: ToolRegistry, address: impl Into<String>) -> Self {
        Self {
            registry,
            address: address.into(),
        }
    }

    pub fn router(&self) -> Router {
        create_router(self.registry.clone())
    }

    /// Bind and serve until Ctrl-C
    pub async fn start(&self) -> Result<()> {
        let listener = TcpListener::bind(&self.address)
            .await
            .map_err(|source| ServerError::Bind {
                address: self.address.clone(),
                source,
            })?;

        info!(address = %self.address, tools = self.registry.len(), "HTTP server listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("HTTP server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C; serving until killed");
        std::future::pending::<()>().await;
    }
}
