//! Normalized records produced by the translators

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Real-time quote for one symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Requested ticker, uppercased
    pub symbol: String,
    /// Last traded price
    pub price: Decimal,
    /// Absolute change since previous close
    pub change: Decimal,
    /// Percent change as the provider formats it, e.g. `"1.23%"`
    pub change_percent: String,
    /// Shares traded in the session
    pub volume: u64,
}

/// Company fundamentals for one symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyOverview {
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub industry: String,
    /// First 300 characters of the provider text, `...` appended if cut
    pub description: String,
    /// Raw market capitalization in dollars
    pub market_cap: Option<Decimal>,
    pub pe_ratio: Option<Metric>,
    /// Dividend yield as a ratio (0.0044 for 0.44%)
    pub dividend_yield: Option<Metric>,
    pub eps: Option<Metric>,
}

/// Provider ratio field: a number, or the provider's literal text such as `"None"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Metric {
    Value(Decimal),
    Text(String),
}

impl Metric {
    /// Parse a provider field; blank input yields `None`
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        Some(
            Decimal::from_str(raw)
                .map_or_else(|_| Self::Text(raw.to_string()), Self::Value),
        )
    }

    /// Numeric value, if the provider sent one
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Value(value) => Some(*value),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Quote projection used in comparisons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummary {
    pub symbol: String,
    pub price: Decimal,
    pub change: Decimal,
    pub change_percent: String,
}

impl From<&Quote> for QuoteSummary {
    fn from(quote: &Quote) -> Self {
        Self {
            symbol: quote.symbol.clone(),
            price: quote.price,
            change: quote.change,
            change_percent: quote.change_percent.clone(),
        }
    }
}

/// One slot of a comparison result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComparisonEntry {
    Quote(QuoteSummary),
    Failed { symbol: String, error: String },
}

impl ComparisonEntry {
    /// Symbol this entry answers for
    pub fn symbol(&self) -> &str {
        match self {
            Self::Quote(summary) => &summary.symbol,
            Self::Failed { symbol, .. } => symbol,
        }
    }

    /// Whether the lookup for this symbol failed
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl From<&Quote> for ComparisonEntry {
    fn from(quote: &Quote) -> Self {
        Self::Quote(QuoteSummary::from(quote))
    }
}
