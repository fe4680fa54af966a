//! Tool for fetching company fundamentals

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use stock_core::Result;
use stock_tools::{Tool, schema};

use super::parse_params;
use crate::api::QuoteSource;
use crate::format::overview_payload;
use crate::translate::fetch_overview;

/// `get_stock_info`: company profile and headline ratios
pub struct StockInfoTool {
    source: Arc<dyn QuoteSource>,
}

#[derive(Debug, Deserialize)]
struct StockInfoParams {
    symbol: String,
}

impl StockInfoTool {
    pub fn new(source: Arc<dyn QuoteSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl Tool for StockInfoTool {
    async fn execute(&self, params: Value) -> Result<Value> {
        let params: StockInfoParams = parse_params(params, &self.input_schema())?;
        let overview = fetch_overview(self.source.as_ref(), &params.symbol).await?;
        Ok(overview_payload(&overview))
    }

    fn name(&self) -> &'static str {
        "get_stock_info"
    }

    fn description(&self) -> &'static str {
        "Get company information: name, sector, industry, description, market cap, \
         P/E ratio, dividend yield and EPS"
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
