//! Model Service port
//!
//! Defines the interface for communicating with the hosted language model.

use async_trait::async_trait;
use legalai_domain::{MediaContent, ModelResponse};
use thiserror::Error;

/// Errors that can occur during model service operations
#[derive(Error, Debug)]
pub enum ModelServiceError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Response blocked: {0}")]
    Blocked(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// One part of a user turn: prompt text or an inline attachment
#[derive(Debug, Clone)]
pub enum PromptPart {
    Text(String),
    Media(MediaContent),
}

impl PromptPart {
    pub fn text(text: impl Into<String>) -> Self {
        PromptPart::Text(text.into())
    }
}

/// Options fixed for the lifetime of a session
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// JSON Schema the final answer must follow; `None` for free text.
    pub output_schema: Option<serde_json::Value>,
    /// Tool declarations as provider-neutral JSON Schema objects.
    pub tools: Vec<serde_json::Value>,
}

impl SessionOptions {
    pub fn free_text() -> Self {
        Self::default()
    }

    pub fn with_output_schema(mut self, schema: serde_json::Value) -> Self {
        self.output_schema = Some(schema);
        self
    }

    pub fn with_tools(mut self, tools: Vec<serde_json::Value>) -> Self {
        self.tools = tools;
        self
    }
}

/// Result of one tool call, sent back to the model
#[derive(Debug, Clone)]
pub struct ToolResultMessage {
    /// ID of the tool-use block this answers
    pub tool_use_id: String,
    pub tool_name: String,
    pub output: serde_json::Value,
    pub is_error: bool,
}

/// Gateway to the model service
///
/// The binary constructs one implementation and injects it; there is no
/// process-wide client.
#[async_trait]
pub trait ModelService: Send + Sync {
    /// Open a session that keeps the turn history of one task invocation
    async fn open_session(
        &self,
        options: SessionOptions,
    ) -> Result<Box<dyn ModelSession>, ModelServiceError>;
}

/// An active model session
#[async_trait]
pub trait ModelSession: Send + Sync {
    /// Send a user turn and get the model's response
    async fn send(&self, parts: &[PromptPart]) -> Result<ModelResponse, ModelServiceError>;

    /// Answer the model's tool calls and get its next response
    async fn send_tool_results(
        &self,
        results: &[ToolResultMessage],
    ) -> Result<ModelResponse, ModelServiceError>;
}
