//! Translators from raw provider payloads to normalized records
//!
//! Parsing is driven by the provider's literal field keys (`"05. price"`,
//! `MarketCapitalization`, ...). Each translator has a pure `parse_*`
//! function and an async `fetch_*` wrapper that performs the single upstream
//! call.

pub mod overview;
pub mod quote;

pub use overview::{
    DESCRIPTION_LIMIT, TRUNCATION_MARKER, fetch_overview, parse_overview, truncate_description,
};
pub use quote::{fetch_quote, parse_quote};

use stock_core::{Error, Result};

/// Trim and uppercase a requested ticker
///
/// Every record echoes this form of the symbol so callers can correlate
/// responses even when the provider omits or alters it.
pub fn normalize_symbol(raw: &str) -> Result<String> {
    let symbol = raw.trim();
    if symbol.is_empty() {
        return Err(Error::validation("Symbol must not be empty"));
    }
    Ok(symbol.to_uppercase())
}

/// Rate-limit or informational notice the provider sends instead of data
fn provider_notice(payload: &serde_json::Value) -> Option<&str> {
    ["Note", "Information"]
        .iter()
        .find_map(|key| payload.get(*key).and_then(serde_json::Value::as_str))
}
