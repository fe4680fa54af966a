//! Stock market lookups backed by Alpha Vantage
//!
//! This crate holds everything between a transport and the upstream provider:
//!
//! - [`api`]: the [`QuoteSource`] seam and its reqwest implementation
//! - [`translate`]: quote and company-overview translators that turn raw
//!   provider payloads into [`Quote`] and [`CompanyOverview`]
//! - [`compare`]: the comparison aggregator, one task per symbol, joined
//!   after every task settles
//! - [`format`]: presentation of the records as tool payloads
//! - [`tools`]: the three tools both transports expose
//!
//! # Example
//!
//! ```rust,ignore
//! use stock_data::{AlphaVantageClient, default_registry};
//! use stock_utils::Config;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let source = Arc::new(AlphaVantageClient::from_config(&config)?);
//!     let registry = default_registry(source);
//!
//!     let quote = registry
//!         .call("get_stock_price", serde_json::json!({"symbol": "AAPL"}))
//!         .await?;
//!     println!("{quote}");
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod compare;
pub mod format;
pub mod models;
pub mod tools;
pub mod translate;

pub use api::{AlphaVantageClient, QuoteSource};
pub use compare::compare_quotes;
pub use models::{CompanyOverview, ComparisonEntry, Metric, Quote, QuoteSummary};
pub use stock_core::{Error, ErrorKind, Result};
pub use tools::{CompareStocksTool, StockInfoTool, StockPriceTool, default_registry};
pub use translate::{fetch_overview, fetch_quote};
