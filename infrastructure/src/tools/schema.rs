//! JSON Schema tool converter.
//!
//! Default implementation of [`ToolSchemaPort`] producing provider-neutral
//! JSON Schema. Provider adapters reshape it (the Gemini adapter turns it
//! into `functionDeclarations`).

use legalai_application::ToolSchemaPort;
use legalai_domain::tool::entities::ToolDefinition;
use serde_json::{Map, Value, json};

/// Handles param_type → JSON Schema type mapping:
/// - `"number"`, `"integer"`, `"boolean"` map to themselves
/// - anything else → `"string"`
pub struct JsonSchemaToolConverter;

impl ToolSchemaPort for JsonSchemaToolConverter {
    fn tool_to_schema(&self, tool: &ToolDefinition) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for param in &tool.parameters {
            let schema_type = match param.param_type.as_str() {
                "number" => "number",
                "integer" => "integer",
                "boolean" => "boolean",
                _ => "string",
            };
            properties.insert(
                param.name.clone(),
                json!({ "type": schema_type, "description": param.description }),
            );
            if param.required {
                required.push(json!(param.name));
            }
        }

        json!({
            "name": tool.name,
            "description": tool.description,
            "input_schema": {
                "type": "object",
                "properties": properties,
                "required": required,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::legal_search_definition;

    #[test]
    fn test_legal_search_schema() {
        let schema = JsonSchemaToolConverter.tool_to_schema(&legal_search_definition());

        assert_eq!(schema["name"], "legal_search");
        assert_eq!(schema["input_schema"]["type"], "object");
        assert_eq!(schema["input_schema"]["properties"]["query"]["type"], "string");
        assert_eq!(schema["input_schema"]["properties"]["year"]["type"], "integer");
        assert_eq!(schema["input_schema"]["required"], json!(["query"]));
    }

    #[test]
    fn test_tools_to_schema_keeps_order() {
        let a = ToolDefinition::new("a_tool", "A");
        let b = ToolDefinition::new("b_tool", "B");
        let schemas = JsonSchemaToolConverter.tools_to_schema(&[&b, &a]);
        assert_eq!(schemas[0]["name"], "b_tool");
        assert_eq!(schemas[1]["name"], "a_tool");
        assert_eq!(schemas[1]["input_schema"]["required"], json!([]));
    }
}
