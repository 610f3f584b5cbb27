//! Structured model responses.
//!
//! A model turn is a list of content blocks mixing text and tool-use
//! requests. When a task asked for structured output, the text blocks hold
//! a JSON document that [`ModelResponse::structured`] extracts.

use crate::tool::entities::ToolCall;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single block of content within a model response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text(String),

    /// A tool call requested by the model.
    ToolUse {
        /// Correlates the call with its result; generated when the API has none.
        id: String,
        name: String,
        input: HashMap<String, serde_json::Value>,
    },
}

impl ContentBlock {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentBlock::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_tool_use(&self) -> Option<(&str, &str, &HashMap<String, serde_json::Value>)> {
        match self {
            ContentBlock::ToolUse { id, name, input } => Some((id, name, input)),
            _ => None,
        }
    }
}

/// Reason the model stopped generating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    EndTurn,
    /// The model wants tool results before it can finish.
    ToolUse,
    MaxTokens,
    /// Blocked by the provider's safety settings
    Safety,
    Other(String),
}

/// A structured response from the model
#[derive(Debug, Clone)]
pub struct ModelResponse {
    pub content: Vec<ContentBlock>,
    pub stop_reason: Option<StopReason>,
    pub model: Option<String>,
}

impl ModelResponse {
    /// Create a text-only response.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::Text(text.into())],
            stop_reason: Some(StopReason::EndTurn),
            model: None,
        }
    }

    /// Concatenate all `Text` content blocks into a single string.
    pub fn text_content(&self) -> String {
        self.content
            .iter()
            .filter_map(|b| b.as_text())
            .collect::<Vec<_>>()
            .join("")
    }

    /// Extract all `ToolUse` content blocks as `Vec<ToolCall>`.
    pub fn tool_calls(&self) -> Vec<ToolCall> {
        self.content
            .iter()
            .filter_map(|b| match b {
                ContentBlock::ToolUse { id, name, input } => {
                    Some(ToolCall::from_native(id, name, input.clone()))
                }
                _ => None,
            })
            .collect()
    }

    pub fn has_tool_calls(&self) -> bool {
        self.content
            .iter()
            .any(|b| matches!(b, ContentBlock::ToolUse { .. }))
    }

    /// Parse the text content as a JSON document.
    ///
    /// Tolerates a surrounding ```` ```json ```` fence. Returns the parse
    /// error message when the text is not JSON.
    pub fn structured(&self) -> Result<serde_json::Value, String> {
        let text = self.text_content();
        let body = strip_code_fence(text.trim());
        serde_json::from_str(body).map_err(|e| e.to_string())
    }
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_text_creates_text_only_response() {
        let response = ModelResponse::from_text("Hello");
        assert_eq!(response.text_content(), "Hello");
        assert!(!response.has_tool_calls());
        assert_eq!(response.stop_reason, Some(StopReason::EndTurn));
    }

    #[test]
    fn tool_calls_extraction() {
        let response = ModelResponse {
            content: vec![
                ContentBlock::Text("Checking precedent.".to_string()),
                ContentBlock::ToolUse {
                    id: "call_1".to_string(),
                    name: "legal_search".to_string(),
                    input: [("query".to_string(), json!("unilateral termination"))]
                        .into_iter()
                        .collect(),
                },
            ],
            stop_reason: Some(StopReason::ToolUse),
            model: None,
        };

        assert!(response.has_tool_calls());
        let calls = response.tool_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].tool_name, "legal_search");
        assert_eq!(calls[0].native_id.as_deref(), Some("call_1"));
        assert_eq!(calls[0].get_string("query"), Some("unilateral termination"));
    }

    #[test]
    fn structured_parses_plain_json() {
        let response = ModelResponse::from_text(r#"{"summary": "ok", "citations": []}"#);
        assert_eq!(response.structured().unwrap()["summary"], "ok");
    }

    #[test]
    fn structured_strips_fence() {
        let response = ModelResponse::from_text("```json\n{\"timeline\": \"2020: filed\"}\n```");
        assert_eq!(response.structured().unwrap()["timeline"], "2020: filed");
    }

    #[test]
    fn structured_rejects_prose() {
        let response = ModelResponse::from_text("I cannot help with that.");
        assert!(response.structured().is_err());
    }

    #[test]
    fn content_block_accessors() {
        let tool = ContentBlock::ToolUse {
            id: "id1".to_string(),
            name: "legal_search".to_string(),
            input: HashMap::new(),
        };
        assert!(tool.as_text().is_none());
        let (id, name, input) = tool.as_tool_use().unwrap();
        assert_eq!(id, "id1");
        assert_eq!(name, "legal_search");
        assert!(input.is_empty());
    }
}
