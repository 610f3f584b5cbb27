//! Gemini model session
//!
//! `generateContent` is stateless, so the session keeps the conversation
//! locally and resends it on every call.

use super::client::GeminiClient;
use super::types::{self, Content};
use async_trait::async_trait;
use legalai_application::ports::model_service::{
    ModelServiceError, ModelSession, PromptPart, SessionOptions, ToolResultMessage,
};
use legalai_domain::ModelResponse;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

pub struct GeminiSession {
    client: Arc<GeminiClient>,
    options: SessionOptions,
    /// Conversation history (user turns, model turns, function responses)
    contents: Mutex<Vec<Content>>,
}

impl GeminiSession {
    pub fn new(client: Arc<GeminiClient>, options: SessionOptions) -> Self {
        Self {
            client,
            options,
            contents: Mutex::new(Vec::new()),
        }
    }

    /// Append a turn, call the API and record the model's reply.
    async fn exchange(&self, turn: Content) -> Result<ModelResponse, ModelServiceError> {
        let mut contents = self.contents.lock().await;
        contents.push(turn);

        let request = types::build_request(
            &contents,
            self.options.output_schema.as_ref(),
            &self.options.tools,
            self.client.temperature(),
        );
        debug!(
            turns = contents.len(),
            tools = self.options.tools.len(),
            structured = self.options.output_schema.is_some(),
            "Calling generateContent"
        );

        let (response, model_turn) = self.client.generate(&request).await?;
        contents.push(model_turn);
        Ok(response)
    }
}

#[async_trait]
impl ModelSession for GeminiSession {
    async fn send(&self, parts: &[PromptPart]) -> Result<ModelResponse, ModelServiceError> {
        self.exchange(types::user_content(parts)).await
    }

    async fn send_tool_results(
        &self,
        results: &[ToolResultMessage],
    ) -> Result<ModelResponse, ModelServiceError> {
        self.exchange(types::tool_results_content(results)).await
    }
}
