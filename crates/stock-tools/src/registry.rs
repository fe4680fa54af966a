//! Tool registry for managing available tools

use crate::{Tool, ToolDefinition};
use serde_json::Value;
use std::sync::Arc;
use stock_core::{Error, Result};
use tracing::debug;

/// Registry of tools, kept in registration order
///
/// The order is the manifest order clients see, so it is stable across
/// `tools/list` calls and across transports.
#[derive(Default, Clone)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new tool registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool
    ///
    /// A tool with the same name replaces the earlier one in place.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        if let Some(slot) = self.tools.iter_mut().find(|t| t.name() == tool.name()) {
            *slot = tool;
        } else {
            self.tools.push(tool);
        }
    }

    /// Builder-style variant of [`ToolRegistry::register`]
    pub fn with_tool(mut self, tool: Arc<dyn Tool>) -> Self {
        self.register(tool);
        self
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.name() == name).cloned()
    }

    /// Manifest entries for every registered tool
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.definition()).collect()
    }

    /// Look up `name` and execute it with `arguments`
    ///
    /// An unknown name is a validation error, distinct from failures raised
    /// by the tool itself.
    pub async fn call(&self, name: &str, arguments: Value) -> Result<Value> {
        let tool = self
            .get(name)
            .ok_or_else(|| Error::validation(format!("Unknown tool: {name}")))?;

        debug!(tool = name, "Executing tool");
        tool.execute(arguments).await
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
