//! Transports serving the tool registry

pub mod http;
pub mod stdio;

pub use http::{HttpServer, create_router};
pub use stdio::{ServerState, StdioServer};
