//! Overview translator (`OVERVIEW`)

use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;
use stock_core::{Error, Result};
use tracing::{debug, warn};

use super::{normalize_symbol, provider_notice};
use crate::api::QuoteSource;
use crate::models::{CompanyOverview, Metric};

/// Maximum description length, in characters
pub const DESCRIPTION_LIMIT: usize = 300;
/// Appended to a description that was cut
pub const TRUNCATION_MARKER: &str = "...";

/// Fetch and translate the company overview for `symbol`
pub async fn fetch_overview(source: &dyn QuoteSource, symbol: &str) -> Result<CompanyOverview> {
    let symbol = normalize_symbol(symbol)?;
    let payload = source.company_overview(&symbol).await?;
    let overview = parse_overview(&symbol, &payload)?;

    debug!(symbol = %overview.symbol, name = %overview.name, "Overview translated");
    Ok(overview)
}

/// Translate an `OVERVIEW` payload
///
/// The provider answers unknown tickers with an object lacking `Symbol`,
/// which yields `NotFound`. Every other field is optional: absent text
/// becomes an empty string and absent numbers become `None`.
pub fn parse_overview(symbol: &str, payload: &Value) -> Result<CompanyOverview> {
    let has_symbol = payload
        .get("Symbol")
        .and_then(Value::as_str)
        .is_some_and(|s| !s.trim().is_empty());
    if !has_symbol {
        if let Some(notice) = provider_notice(payload) {
            warn!(symbol, notice, "Provider returned a notice instead of an overview");
        }
        return Err(Error::not_found(symbol));
    }

    let text = |key: &str| {
        payload
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .trim()
            .to_string()
    };
    let metric = |key: &str| payload.get(key).and_then(Value::as_str).and_then(Metric::parse);

    Ok(CompanyOverview {
        symbol: symbol.to_string(),
        name: text("Name"),
        sector: text("Sector"),
        industry: text("Industry"),
        description: truncate_description(&text("Description")),
        market_cap: payload
            .get("MarketCapitalization")
            .and_then(Value::as_str)
            .and_then(|raw| Decimal::from_str(raw.trim()).ok()),
        pe_ratio: metric("PERatio"),
        dividend_yield: metric("DividendYield"),
        eps: metric("EPS"),
    })
}

/// Cut `text` to [`DESCRIPTION_LIMIT`] characters
///
/// The marker is appended only when something was removed; shorter text is
/// returned unchanged.
pub fn truncate_description(text: &str) -> String {
    match text.char_indices().nth(DESCRIPTION_LIMIT) {
        Some((cut, _)) => format!("{}{TRUNCATION_MARKER}", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockQuoteSource;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use stock_core::ErrorKind;

    fn payload() -> Value {
        json!({
            "Symbol": "IBM",
            "AssetType": "Common Stock",
            "Name": "International Business Machines",
            "Description": "International Business Machines Corporation (IBM) is an American multinational technology company.",
            "Exchange": "NYSE",
            "Sector": "TECHNOLOGY",
            "Industry": "COMPUTER & OFFICE EQUIPMENT",
            "MarketCapitalization": "175934923000",
            "PERatio": "21.43",
            "DividendYield": "0.0371",
            "EPS": "8.91"
        })
    }

    #[test]
    fn test_parse_overview() {
        let overview = parse_overview("IBM", &payload()).unwrap();

        assert_eq!(overview.symbol, "IBM");
        assert_eq!(overview.name, "International Business Machines");
        assert_eq!(overview.sector, "TECHNOLOGY");
        assert_eq!(overview.industry, "COMPUTER & OFFICE EQUIPMENT");
        assert_eq!(overview.market_cap, Some(dec!(175934923000)));
        assert_eq!(overview.pe_ratio, Some(Metric::Value(dec!(21.43))));
        assert_eq!(overview.dividend_yield, Some(Metric::Value(dec!(0.0371))));
        assert_eq!(overview.eps, Some(Metric::Value(dec!(8.91))));
        assert!(!overview.description.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn test_missing_symbol_is_not_found() {
        let err = parse_overview("ZZZZ", &json!({})).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = parse_overview("ZZZZ", &json!({"Note": "slow down"})).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_optional_fields_do_not_fail() {
        let overview = parse_overview("IBM", &json!({"Symbol": "IBM", "PERatio": "None"})).unwrap();

        assert_eq!(overview.description, "");
        assert_eq!(overview.name, "");
        assert_eq!(overview.market_cap, None);
        assert_eq!(overview.pe_ratio, Some(Metric::Text("None".to_string())));
        assert_eq!(overview.dividend_yield, None);
    }

    #[test]
    fn test_long_description_is_truncated() {
        let long = "a".repeat(450);
        let out = truncate_description(&long);

        assert_eq!(out.chars().count(), DESCRIPTION_LIMIT + TRUNCATION_MARKER.len());
        assert!(out.ends_with(TRUNCATION_MARKER));
        assert_eq!(&out[..DESCRIPTION_LIMIT], &long[..DESCRIPTION_LIMIT]);
    }

    #[test]
    fn test_short_description_is_unchanged() {
        let short = "b".repeat(50);
        assert_eq!(truncate_description(&short), short);

        let exact = "c".repeat(DESCRIPTION_LIMIT);
        assert_eq!(truncate_description(&exact), exact);
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let text = "é".repeat(301);
        let out = truncate_description(&text);

        assert_eq!(out.chars().filter(|c| *c == 'é').count(), DESCRIPTION_LIMIT);
        assert!(out.ends_with(TRUNCATION_MARKER));
    }

    #[tokio::test]
    async fn test_fetch_overview_uses_requested_symbol() {
        let mut source = MockQuoteSource::new();
        source
            .expect_company_overview()
            .with(mockall::predicate::eq("IBM"))
            .times(1)
            .returning(|_| Ok(payload()));

        let overview = fetch_overview(&source, "ibm").await.unwrap();
        assert_eq!(overview.symbol, "IBM");
    }
}
