//! JSON schema helpers
//!
//! Builders for the small schema subset the tool manifest uses, and a check
//! of tool arguments against it.

use serde_json::{Value, json};
use stock_core::{Error, Result};

/// Create a JSON Schema object type
///
/// # Example
///
/// ```
/// use stock_tools::schema::{object, string};
/// use serde_json::json;
///
/// let schema = object(json!({ "symbol": string(Some("Ticker")) }), vec!["symbol"]);
/// assert_eq!(schema["required"][0], "symbol");
/// ```
pub fn object(properties: Value, required: Vec<&str>) -> Value {
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

/// Create a JSON Schema string type
pub fn string(description: Option<&str>) -> Value {
    if let Some(d) = description {
        json!({
            "type": "string",
            "description": d,
        })
    } else {
        json!({"type": "string"})
    }
}

/// Create a JSON Schema array type
///
/// # Arguments
///
/// * `items` - Schema for array items
/// * `description` - Optional description of the array field
pub fn array(items: Value, description: Option<&str>) -> Value {
    if let Some(d) = description {
        json!({
            "type": "array",
            "items": items,
            "description": d,
        })
    } else {
        json!({
            "type": "array",
            "items": items,
        })
    }
}

/// Check that a value has the schema's top-level type
pub fn validate_basic(value: &Value, schema: &Value) -> bool {
    let schema_type = match schema.get("type") {
        Some(Value::String(t)) => t.as_str(),
        _ => return true,
    };

    match schema_type {
        "string" => value.is_string(),
        "number" => value.is_number(),
        "integer" => value.is_i64() || value.is_u64(),
        "boolean" => value.is_boolean(),
        "array" => value.is_array(),
        "object" => value.is_object(),
        "null" => value.is_null(),
        _ => true,
    }
}

/// Validate tool arguments against an object schema
///
/// Arguments must be an object, every `required` property must be present
/// and non-null, and every present property must match its declared type.
/// Array items are checked against `items`.
pub fn validate_arguments(arguments: &Value, schema: &Value) -> Result<()> {
    let Some(args) = arguments.as_object() else {
        return Err(Error::validation("Arguments must be a JSON object"));
    };

    let missing: Vec<&str> = schema["required"]
        .as_array()
        .map(|required| {
            required
                .iter()
                .filter_map(Value::as_str)
                .filter(|field| args.get(*field).is_none_or(Value::is_null))
                .collect()
        })
        .unwrap_or_default();

    if !missing.is_empty() {
        return Err(Error::validation(format!(
            "Missing required field(s): {}",
            missing.join(", ")
        )));
    }

    if let Some(properties) = schema["properties"].as_object() {
        for (field, property) in properties {
            let Some(value) = args.get(field) else {
                continue;
            };
            if !validate_basic(value, property) {
                return Err(Error::validation(format!(
                    "Field '{field}' must be of type {}",
                    property["type"].as_str().unwrap_or("unknown")
                )));
            }
            if let (Some(items), Some(schema_items)) = (value.as_array(), property.get("items")) {
                if items.iter().any(|item| !validate_basic(item, schema_items)) {
                    return Err(Error::validation(format!(
                        "Every item of '{field}' must be of type {}",
                        schema_items["type"].as_str().unwrap_or("unknown")
                    )));
                }
            }
        }
    }

    Ok(())
}
