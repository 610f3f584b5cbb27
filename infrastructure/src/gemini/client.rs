//! HTTP client for the Generative Language API

use super::error::GeminiError;
use super::types::{self, Content, GenerateContentRequest};
use crate::config::FileModelConfig;
use legalai_domain::ModelResponse;
use std::time::Duration;
use tracing::{debug, warn};

/// Connection settings for `generateContent`
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub model: String,
    pub endpoint: String,
    pub api_key: String,
    pub timeout: Option<Duration>,
    pub temperature: Option<f32>,
}

impl GeminiConfig {
    /// Build from the `[model]` section, reading the key from the environment.
    pub fn from_file_config(config: &FileModelConfig) -> Result<Self, GeminiError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| GeminiError::MissingApiKey(config.api_key_env.clone()))?;
        Ok(Self {
            model: config.name.clone(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key,
            timeout: config.timeout_seconds.map(Duration::from_secs),
            temperature: config.temperature,
        })
    }

    pub fn generate_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, GeminiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            config,
        })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub fn temperature(&self) -> Option<f32> {
        self.config.temperature
    }

    /// POST a request and parse the first candidate.
    pub async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<(ModelResponse, Content), GeminiError> {
        let response = self
            .http
            .post(self.config.generate_url())
            .header("x-goog-api-key", &self.config.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let message = types::parse_error_message(&body);
            warn!(status = status.as_u16(), "generateContent failed: {}", message);
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!(bytes = body.len(), "generateContent response received");
        types::parse_response(&body)
    }
}
