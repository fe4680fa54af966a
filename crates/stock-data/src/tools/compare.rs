//! Tool for quoting several symbols side by side

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use stock_core::{Error, Result};
use stock_tools::{Tool, schema};

use super::parse_params;
use crate::api::QuoteSource;
use crate::compare::compare_quotes;
use crate::format::comparison_payload;

/// `compare_stocks`: one entry per requested symbol, in request order
pub struct CompareStocksTool {
    source: Arc<dyn QuoteSource>,
}

#[derive(Debug, Deserialize)]
struct CompareParams {
    symbols: Vec<String>,
}

impl CompareStocksTool {
    pub fn new(source: Arc<dyn QuoteSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl Tool for CompareStocksTool {
    async fn execute(&self, params: Value) -> Result<Value> {
        let params: CompareParams = parse_params(params, &self.input_schema())?;
        if params.symbols.is_empty() {
            return Err(Error::validation("At least one symbol is required"));
        }

        let entries = compare_quotes(Arc::clone(&self.source), &params.symbols).await;
        Ok(comparison_payload(&entries))
    }

    fn name(&self) -> &'static str {
        "compare_stocks"
    }

    fn description(&self) -> &'static str {
        "Compare the current price and change of several stocks"
    }

    fn input_schema(&self) -> Value {
        schema::object(
            json!({
                "symbols": schema::array(
                    schema::string(None),
                    Some("Ticker symbols to compare (e.g., ['AAPL', 'MSFT', 'GOOGL'])"),
                ),
            }),
            vec!["symbols"],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockQuoteSource;
    use stock_core::ErrorKind;

    #[tokio::test]
    async fn test_execute_keeps_partial_failures() {
        let mut source = MockQuoteSource::new();
        source.expect_global_quote().times(3).returning(|symbol| {
            if symbol == "ZZZZINVALID" {
                return Ok(json!({"Global Quote": {}}));
            }
            Ok(json!({
                "Global Quote": {
                    "01. symbol": symbol,
                    "05. price": "100.5000",
                    "06. volume": "10",
                    "09. change": "-0.2500",
                    "10. change percent": "-0.2481%"
                }
            }))
        });

        let tool = CompareStocksTool::new(Arc::new(source));
        let payload = tool
            .execute(json!({"symbols": ["AAPL", "ZZZZINVALID", "MSFT"]}))
            .await
            .unwrap();

        let stocks = payload["stocks"].as_array().unwrap();
        assert_eq!(stocks.len(), 3);
        assert_eq!(stocks[0]["symbol"], "AAPL");
        assert_eq!(stocks[0]["price"], json!(100.5));
        assert_eq!(stocks[0]["change"], json!(-0.25));
        assert_eq!(stocks[0]["changePercent"], "-0.2481%");
        assert_eq!(
            stocks[1],
            json!({"symbol": "ZZZZINVALID", "error": "Failed to fetch quote data"})
        );
        assert_eq!(stocks[2]["symbol"], "MSFT");
    }

    #[tokio::test]
    async fn test_empty_symbols_rejected() {
        let mut source = MockQuoteSource::new();
        source.expect_global_quote().never();

        let tool = CompareStocksTool::new(Arc::new(source));
        let err = tool.execute(json!({"symbols": []})).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_missing_symbols_rejected() {
        let tool = CompareStocksTool::new(Arc::new(MockQuoteSource::new()));

        let err = tool.execute(json!({"symbol": "AAPL"})).await.unwrap_err();
        assert_eq!(err.to_string(), "Missing required field(s): symbols");
    }
}
