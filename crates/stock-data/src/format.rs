//! Presentation of normalized records as tool payloads
//!
//! Records keep raw decimals; this module owns the human-facing strings
//! (dollar signs, thousands separators, billions, percentages).

use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::{Value, json};

use crate::models::{CompanyOverview, ComparisonEntry, Metric, Quote};

/// Placeholder for a figure the provider did not report
pub const NOT_AVAILABLE: &str = "N/A";

fn cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a dollar amount, e.g. `$189.84`
pub fn format_usd(amount: Decimal) -> String {
    format!("${:.2}", cents(amount))
}

/// Format a dollar change with an explicit sign, e.g. `+$1.23` or `-$1.23`
pub fn format_signed_usd(change: Decimal) -> String {
    if change < Decimal::ZERO {
        format!("-{}", format_usd(change.abs()))
    } else {
        format!("+{}", format_usd(change))
    }
}

/// Format a share count with thousands separators
pub fn format_volume(volume: u64) -> String {
    add_thousands_separator(&volume.to_string())
}

fn add_thousands_separator(digits: &str) -> String {
    let reversed: Vec<char> = digits.chars().rev().collect();
    reversed
        .chunks(3)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(",")
        .chars()
        .rev()
        .collect()
}

/// Format a raw market capitalization in billions, e.g. `$2950.12B`
pub fn format_billions(market_cap: Option<Decimal>) -> String {
    market_cap.map_or_else(
        || NOT_AVAILABLE.to_string(),
        |cap| format!("${:.2}B", cents(cap / Decimal::from(1_000_000_000_u64))),
    )
}

/// Format a ratio as a percentage, e.g. `0.0044` as `0.44%`
///
/// Textual provider values such as `"None"` have no percentage form.
pub fn format_percent(ratio: Option<&Metric>) -> String {
    match ratio.and_then(Metric::as_decimal) {
        Some(ratio) => format!("{:.2}%", cents(ratio * Decimal::ONE_HUNDRED)),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn metric_value(metric: Option<&Metric>) -> Value {
    match metric {
        Some(Metric::Value(value)) => json!(value),
        Some(Metric::Text(text)) => Value::String(text.clone()),
        None => Value::String(NOT_AVAILABLE.to_string()),
    }
}

/// Payload returned by `get_stock_price`
pub fn price_payload(quote: &Quote, at: DateTime<Utc>) -> Value {
    json!({
        "symbol": quote.symbol,
        "price": format_usd(quote.price),
        "change": format_signed_usd(quote.change),
        "changePercent": quote.change_percent,
        "volume": format_volume(quote.volume),
        "timestamp": at.to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// Payload returned by `get_stock_info`
pub fn overview_payload(overview: &CompanyOverview) -> Value {
    json!({
        "symbol": overview.symbol,
        "name": overview.name,
        "sector": overview.sector,
        "industry": overview.industry,
        "description": overview.description,
        "marketCap": format_billions(overview.market_cap),
        "peRatio": metric_value(overview.pe_ratio.as_ref()),
        "dividendYield": format_percent(overview.dividend_yield.as_ref()),
        "eps": metric_value(overview.eps.as_ref()),
    })
}

/// Payload returned by `compare_stocks`
pub fn comparison_payload(entries: &[ComparisonEntry]) -> Value {
    json!({ "stocks": entries })
}
