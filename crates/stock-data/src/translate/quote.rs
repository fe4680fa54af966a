//! Quote translator (`GLOBAL_QUOTE`)

use rust_decimal::Decimal;
use serde_json::{Map, Value};
use std::str::FromStr;
use stock_core::{Error, Result};
use tracing::{debug, warn};

use super::{normalize_symbol, provider_notice};
use crate::api::QuoteSource;
use crate::models::Quote;

const QUOTE_KEY: &str = "Global Quote";
const PRICE: &str = "05. price";
const VOLUME: &str = "06. volume";
const CHANGE: &str = "09. change";
const CHANGE_PERCENT: &str = "10. change percent";

/// Fetch and translate the current quote for `symbol`
pub async fn fetch_quote(source: &dyn QuoteSource, symbol: &str) -> Result<Quote> {
    let symbol = normalize_symbol(symbol)?;
    let payload = source.global_quote(&symbol).await?;
    let quote = parse_quote(&symbol, &payload)?;

    debug!(symbol = %quote.symbol, price = %quote.price, "Quote translated");
    Ok(quote)
}

/// Translate a `GLOBAL_QUOTE` payload
///
/// A missing or empty `"Global Quote"` object means the provider had
/// nothing for this symbol (unknown ticker, no session data, or a rate-limit
/// notice) and yields `NotFound`.
pub fn parse_quote(symbol: &str, payload: &Value) -> Result<Quote> {
    let Some(fields) = payload
        .get(QUOTE_KEY)
        .and_then(Value::as_object)
        .filter(|fields| !fields.is_empty())
    else {
        if let Some(notice) = provider_notice(payload) {
            warn!(symbol, notice, "Provider returned a notice instead of a quote");
        }
        return Err(Error::not_found(symbol));
    };

    Ok(Quote {
        symbol: symbol.to_string(),
        price: decimal_field(fields, PRICE)?,
        change: decimal_field(fields, CHANGE)?,
        change_percent: fields
            .get(CHANGE_PERCENT)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        volume: integer_field(fields, VOLUME)?,
    })
}

fn text_field<'a>(fields: &'a Map<String, Value>, key: &str) -> Result<&'a str> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .ok_or_else(|| Error::upstream(format!("Provider quote is missing '{key}'")))
}

fn decimal_field(fields: &Map<String, Value>, key: &str) -> Result<Decimal> {
    let raw = text_field(fields, key)?;
    Decimal::from_str(raw)
        .map_err(|e| Error::upstream(format!("Provider quote has invalid '{key}' value '{raw}': {e}")))
}

fn integer_field(fields: &Map<String, Value>, key: &str) -> Result<u64> {
    let raw = text_field(fields, key)?;
    raw.parse::<u64>()
        .map_err(|e| Error::upstream(format!("Provider quote has invalid '{key}' value '{raw}': {e}")))
}
