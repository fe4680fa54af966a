//! Upstream market-data provider

pub mod alpha_vantage;

pub use alpha_vantage::{AlphaVantageClient, QuoteSource};

#[cfg(test)]
pub use alpha_vantage::MockQuoteSource;
