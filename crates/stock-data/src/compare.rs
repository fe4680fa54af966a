//! Comparison aggregator
//!
//! Fans the quote translator out over a list of symbols. Every symbol gets
//! its own task; the aggregator waits for all of them to settle, then
//! reassembles the outcomes in input order. A failed symbol becomes an inline
//! error entry and never cancels or hides its siblings.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::api::QuoteSource;
use crate::models::ComparisonEntry;
use crate::translate::{fetch_quote, normalize_symbol};

/// Message carried by every failed comparison entry
pub const COMPARISON_FAILURE_MESSAGE: &str = "Failed to fetch quote data";

/// Quote every symbol concurrently and collect one entry per symbol
///
/// This never fails: per-symbol errors, including a panicked task, are
/// reported as [`ComparisonEntry::Failed`].
pub async fn compare_quotes(source: Arc<dyn QuoteSource>, symbols: &[String]) -> Vec<ComparisonEntry> {
    debug!(count = symbols.len(), "Comparing symbols");

    let handles: Vec<_> = symbols
        .iter()
        .map(|symbol| {
            let source = Arc::clone(&source);
            let symbol = symbol.clone();
            tokio::spawn(async move { fetch_quote(source.as_ref(), &symbol).await })
        })
        .collect();

    let outcomes = futures::future::join_all(handles).await;

    symbols
        .iter()
        .zip(outcomes)
        .map(|(requested, outcome)| match outcome {
            Ok(Ok(quote)) => ComparisonEntry::from(&quote),
            Ok(Err(e)) => {
                warn!(symbol = %requested, error = %e, "Comparison entry failed");
                failed_entry(requested)
            }
            Err(e) => {
                warn!(symbol = %requested, error = %e, "Comparison task did not complete");
                failed_entry(requested)
            }
        })
        .collect()
}

fn failed_entry(requested: &str) -> ComparisonEntry {
    ComparisonEntry::Failed {
        symbol: normalize_symbol(requested).unwrap_or_else(|_| requested.to_string()),
        error: COMPARISON_FAILURE_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockQuoteSource;
    use rust_decimal_macros::dec;
    use serde_json::{Value, json};
    use std::time::Duration;
    use stock_core::{Error, Result};

    fn quote_payload(symbol: &str, price: &str) -> Value {
        json!({
            "Global Quote": {
                "01. symbol": symbol,
                "05. price": price,
                "06. volume": "1000",
                "09. change": "1.5000",
                "10. change percent": "0.5000%"
            }
        })
    }

    fn symbols(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[tokio::test]
    async fn test_partial_failure_keeps_order_and_count() {
        let mut source = MockQuoteSource::new();
        source.expect_global_quote().returning(|symbol| match symbol {
            "AAPL" => Ok(quote_payload(symbol, "189.8400")),
            "MSFT" => Ok(quote_payload(symbol, "415.1000")),
            _ => Ok(json!({"Global Quote": {}})),
        });

        let entries = compare_quotes(
            Arc::new(source),
            &symbols(&["AAPL", "ZZZZINVALID", "MSFT"]),
        )
        .await;

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].symbol(), "AAPL");
        assert_eq!(entries[1].symbol(), "ZZZZINVALID");
        assert_eq!(entries[2].symbol(), "MSFT");

        match &entries[0] {
            ComparisonEntry::Quote(summary) => assert_eq!(summary.price, dec!(189.84)),
            other => panic!("expected quote, got {other:?}"),
        }
        assert_eq!(
            entries[1],
            ComparisonEntry::Failed {
                symbol: "ZZZZINVALID".to_string(),
                error: COMPARISON_FAILURE_MESSAGE.to_string(),
            }
        );
        assert!(!entries[2].is_error());
    }

    #[tokio::test]
    async fn test_all_failures_still_return_entries() {
        let mut source = MockQuoteSource::new();
        source
            .expect_global_quote()
            .returning(|_| Err(Error::upstream("connection refused")));

        let entries = compare_quotes(Arc::new(source), &symbols(&["aapl", " msft "])).await;

        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(ComparisonEntry::is_error));
        assert_eq!(entries[0].symbol(), "AAPL");
        assert_eq!(entries[1].symbol(), "MSFT");
    }

    #[tokio::test]
    async fn test_blank_symbol_becomes_failed_entry() {
        let mut source = MockQuoteSource::new();
        source
            .expect_global_quote()
            .returning(|symbol| Ok(quote_payload(symbol, "10.0000")));

        let entries = compare_quotes(Arc::new(source), &symbols(&["IBM", ""])).await;

        assert!(!entries[0].is_error());
        assert!(entries[1].is_error());
        assert_eq!(entries[1].symbol(), "");
    }

    /// Source whose first symbol answers last, to show completion order does
    /// not leak into result order and that calls overlap.
    struct SlowFirst;

    #[async_trait::async_trait]
    impl QuoteSource for SlowFirst {
        async fn global_quote(&self, symbol: &str) -> Result<Value> {
            if symbol == "SLOW" {
                tokio::time::sleep(Duration::from_millis(200)).await;
            }
            Ok(quote_payload(symbol, "1.0000"))
        }

        async fn company_overview(&self, symbol: &str) -> Result<Value> {
            Err(Error::not_found(symbol))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_results_follow_input_order_not_completion_order() {
        let started = tokio::time::Instant::now();
        let entries = compare_quotes(
            Arc::new(SlowFirst),
            &symbols(&["SLOW", "FAST1", "SLOW", "FAST2"]),
        )
        .await;

        let order: Vec<_> = entries.iter().map(ComparisonEntry::symbol).collect();
        assert_eq!(order, vec!["SLOW", "FAST1", "SLOW", "FAST2"]);
        // Two 200ms calls ran concurrently rather than back to back.
        assert!(started.elapsed() < Duration::from_millis(400));
    }

    #[tokio::test]
    async fn test_empty_input_yields_empty_result() {
        let source = MockQuoteSource::new();
        let entries = compare_quotes(Arc::new(source), &[]).await;
        assert!(entries.is_empty());
    }
}
