//! Gemini model service adapter
//!
//! Implements the [`ModelService`] port over the Generative Language
//! `generateContent` endpoint:
//!
//! - structured output through `responseSchema` (JSON response mode)
//! - tool use through `functionDeclarations` and `functionCall` /
//!   `functionResponse` round trips
//! - attachments sent inline as base64 `inlineData`

mod client;
mod error;
mod session;
pub mod types;

pub use client::{GeminiClient, GeminiConfig};
pub use error::GeminiError;
pub use session::GeminiSession;

use async_trait::async_trait;
use legalai_application::ports::model_service::{
    ModelService, ModelServiceError, ModelSession, SessionOptions,
};
use std::sync::Arc;
use tracing::info;

/// Model service backed by Gemini; one shared HTTP client for all sessions.
pub struct GeminiModelService {
    client: Arc<GeminiClient>,
}

impl GeminiModelService {
    pub fn new(config: GeminiConfig) -> Result<Self, GeminiError> {
        let client = GeminiClient::new(config)?;
        info!(model = %client.model(), "Gemini model service initialized");
        Ok(Self {
            client: Arc::new(client),
        })
    }
}

#[async_trait]
impl ModelService for GeminiModelService {
    async fn open_session(
        &self,
        options: SessionOptions,
    ) -> Result<Box<dyn ModelSession>, ModelServiceError> {
        Ok(Box::new(GeminiSession::new(self.client.clone(), options)))
    }
}
