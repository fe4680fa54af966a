//! Tool for fetching the current quote of one symbol

use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use stock_core::Result;
use stock_tools::{Tool, schema};

use super::parse_params;
use crate::api::QuoteSource;
use crate::format::price_payload;
use crate::translate::fetch_quote;

/// `get_stock_price`: current price, change and volume
pub struct StockPriceTool {
    source: Arc<dyn QuoteSource>,
}

#[derive(Debug, Deserialize)]
struct StockPriceParams {
    symbol: String,
}

impl StockPriceTool {
    pub fn new(source: Arc<dyn QuoteSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl Tool for StockPriceTool {
    async fn execute(&self, params: Value) -> Result<Value> {
        let params: StockPriceParams = parse_params(params, &self.input_schema())?;
        let quote = fetch_quote(self.source.as_ref(), &params.symbol).await?;
        Ok(price_payload(&quote, Utc::now()))
    }

    fn name(&self) -> &'static str {
        "get_stock_price"
    }

    fn description(&self) -> &'static str {
        "Get the current price of a stock, including change, percent change and volume"
    }

    fn input_schema(&self) -> Value {
        schema::object(
            json!({
                "symbol": schema::string(Some("Stock ticker symbol (e.g., 'AAPL', 'MSFT')")),
            }),
            vec!["symbol"],
        )
    }
}
