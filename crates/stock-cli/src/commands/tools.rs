//! `tools` and `call` subcommands

use anyhow::{Context, Result, bail};
use comfy_table::{Table, presets::UTF8_FULL};
use serde_json::Value;
use stock_mcp::HttpClient;
use stock_tools::ToolDefinition;
use stock_utils::Config;

use super::build_registry;

pub fn list(config: &Config) -> Result<()> {
    let registry = build_registry(config)?;
    println!("{}", tools_table(&registry.definitions()));
    Ok(())
}

pub async fn list_remote(client: &HttpClient) -> Result<()> {
    let definitions = client.list_tools().await?;
    println!("{}", tools_table(&definitions));
    Ok(())
}

fn parse_arguments(args: &str) -> Result<Value> {
    let arguments: Value =
        serde_json::from_str(args).context("--args must be a JSON object")?;
    if !arguments.is_object() {
        bail!("--args must be a JSON object");
    }
    Ok(arguments)
}

pub async fn call(config: &Config, name: &str, args: &str) -> Result<()> {
    let arguments = parse_arguments(args)?;

    let registry = build_registry(config)?;
    let payload = registry
        .call(name, arguments)
        .await
        .with_context(|| format!("{name} failed"))?;

    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

/// Same as [`call`], but executed by the server behind `client`
pub async fn call_remote(client: &HttpClient, name: &str, args: &str) -> Result<()> {
    let arguments = parse_arguments(args)?;

    let result = client
        .call_tool(name, arguments)
        .await
        .with_context(|| format!("{name} failed"))?;

    let text = result.text().unwrap_or("No content returned");
    if result.is_error() {
        bail!("{name} failed: {text}");
    }

    println!("{text}");
    Ok(())
}

fn required_fields(definition: &ToolDefinition) -> String {
    definition.input_schema["required"]
        .as_array()
        .map(|fields| {
            fields
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default()
}

fn tools_table(definitions: &[ToolDefinition]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Tool", "Required", "Description"]);

    for definition in definitions {
        table.add_row(vec![
            definition.name.clone(),
            required_fields(definition),
            definition.description.clone(),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn definition(name: &str, required: &[&str]) -> ToolDefinition {
        ToolDefinition {
            name: name.to_string(),
            description: format!("{name} description"),
            input_schema: json!({"type": "object", "properties": {}, "required": required}),
        }
    }

    #[test]
    fn test_required_fields() {
        assert_eq!(required_fields(&definition("a", &["symbol"])), "symbol");
        assert_eq!(required_fields(&definition("b", &["x", "y"])), "x, y");

        let no_required = ToolDefinition {
            input_schema: json!({"type": "object"}),
            ..definition("c", &[])
        };
        assert_eq!(required_fields(&no_required), "");
    }

    #[test]
    fn test_parse_arguments() {
        assert_eq!(
            parse_arguments(r#"{"symbol":"AAPL"}"#).unwrap(),
            json!({"symbol": "AAPL"})
        );
        assert!(parse_arguments("[1, 2]").is_err());
        assert!(parse_arguments("{not json").is_err());
    }

    #[test]
    fn test_tools_table_lists_every_tool() {
        let rendered = tools_table(&[
            definition("get_stock_price", &["symbol"]),
            definition("compare_stocks", &["symbols"]),
        ])
        .to_string();

        assert!(rendered.contains("get_stock_price"));
        assert!(rendered.contains("compare_stocks"));
        assert!(rendered.contains("symbols"));
    }
}
