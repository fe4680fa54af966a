//! The stock tools exposed by both transports

pub mod compare;
pub mod stock_info;
pub mod stock_price;

pub use compare::CompareStocksTool;
pub use stock_info::StockInfoTool;
pub use stock_price::StockPriceTool;

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use stock_core::{Error, Result};
use stock_tools::{ToolRegistry, schema};

use crate::api::QuoteSource;

/// Registry holding the three tools in manifest order
pub fn default_registry(source: Arc<dyn QuoteSource>) -> ToolRegistry {
    ToolRegistry::new()
        .with_tool(Arc::new(StockPriceTool::new(Arc::clone(&source))))
        .with_tool(Arc::new(StockInfoTool::new(Arc::clone(&source))))
        .with_tool(Arc::new(CompareStocksTool::new(source)))
}

/// Check `params` against `schema` and decode them
fn parse_params<T: DeserializeOwned>(params: Value, schema: &Value) -> Result<T> {
    schema::validate_arguments(&params, schema)?;
    serde_json::from_value(params).map_err(|e| Error::validation(format!("Invalid parameters: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockQuoteSource;

    #[test]
    fn test_default_registry_order() {
        let registry = default_registry(Arc::new(MockQuoteSource::new()));

        let names: Vec<_> = registry
            .definitions()
            .into_iter()
            .map(|definition| definition.name)
            .collect();
        assert_eq!(names, vec!["get_stock_price", "get_stock_info", "compare_stocks"]);
    }

    #[test]
    fn test_manifest_schemas() {
        let registry = default_registry(Arc::new(MockQuoteSource::new()));
        let definitions = registry.definitions();

        for definition in &definitions {
            assert_eq!(definition.input_schema["type"], "object");
            assert!(!definition.description.is_empty());
        }
        assert_eq!(definitions[0].input_schema["required"][0], "symbol");
        assert_eq!(definitions[1].input_schema["required"][0], "symbol");
        assert_eq!(definitions[2].input_schema["required"][0], "symbols");
        assert_eq!(
            definitions[2].input_schema["properties"]["symbols"]["items"]["type"],
            "string"
        );
    }
}
