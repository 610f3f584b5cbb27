//! Tool schema conversion port.
//!
//! The domain decides which tools a task may use; this port turns their
//! definitions into the JSON Schema declarations the model service sends.

use legalai_domain::tool::entities::ToolDefinition;

/// Port for converting tool definitions to provider-neutral JSON Schema.
pub trait ToolSchemaPort: Send + Sync {
    /// Convert a single tool definition.
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value;

    /// Convert a set of tools, preserving order.
    fn tools_to_schema(&self, tools: &[&ToolDefinition]) -> Vec<serde_json::Value> {
        tools.iter().map(|t| self.tool_to_schema(t)).collect()
    }
}
