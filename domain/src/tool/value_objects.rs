//! Tool result and error value objects
//!
//! A tool invocation yields a [`ToolResult`]; a failed one carries a
//! [`ToolError`] whose code tells the executor whether the failure came from
//! the model's arguments or from the tool itself.

use serde::{Deserialize, Serialize};

/// Error that occurred during tool execution.
///
/// | Code | Description |
/// |------|-------------|
/// | `INVALID_ARGUMENT` | Missing or wrong parameters |
/// | `NOT_FOUND` | Unknown tool |
/// | `EXECUTION_FAILED` | Runtime failure of the tool |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolError {
    pub code: String,
    pub message: String,
}

impl ToolError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn not_found(tool: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", format!("Unknown tool: {}", tool.into()))
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new("INVALID_ARGUMENT", message)
    }

    pub fn execution_failed(message: impl Into<String>) -> Self {
        Self::new("EXECUTION_FAILED", message)
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ToolError {}

/// Result of a tool execution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    pub tool_name: String,
    /// Structured output sent back to the model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ToolError>,
    #[serde(default)]
    pub duration_ms: u64,
}

impl ToolResult {
    pub fn success(tool_name: impl Into<String>, output: serde_json::Value) -> Self {
        Self {
            tool_name: tool_name.into(),
            output: Some(output),
            error: None,
            duration_ms: 0,
        }
    }

    pub fn failure(tool_name: impl Into<String>, error: ToolError) -> Self {
        Self {
            tool_name: tool_name.into(),
            output: None,
            error: Some(error),
            duration_ms: 0,
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// The payload returned to the model: the output, or `{"error": ...}`.
    pub fn response_payload(&self) -> serde_json::Value {
        match (&self.output, &self.error) {
            (_, Some(err)) => serde_json::json!({ "error": err.to_string() }),
            (Some(output), None) => output.clone(),
            (None, None) => serde_json::Value::Null,
        }
    }
}
