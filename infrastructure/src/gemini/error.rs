//! Error types for the Gemini adapter

use legalai_application::ModelServiceError;
use thiserror::Error;

/// Errors that can occur when talking to the Generative Language API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("API key not found in environment variable {0}")]
    MissingApiKey(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Prompt blocked: {0}")]
    Blocked(String),

    #[error("Response contained no candidates")]
    EmptyResponse,
}

impl From<GeminiError> for ModelServiceError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::Http(e) if e.is_timeout() => ModelServiceError::Timeout,
            GeminiError::Http(e) if e.is_connect() => {
                ModelServiceError::ConnectionError(e.to_string())
            }
            GeminiError::Http(e) => ModelServiceError::RequestFailed(e.to_string()),
            GeminiError::Api { status, message } => {
                ModelServiceError::RequestFailed(format!("status {}: {}", status, message))
            }
            GeminiError::Decode(e) => ModelServiceError::InvalidResponse(e.to_string()),
            GeminiError::Blocked(reason) => ModelServiceError::Blocked(reason),
            GeminiError::EmptyResponse => {
                ModelServiceError::InvalidResponse("no candidates".to_string())
            }
            GeminiError::MissingApiKey(var) => {
                ModelServiceError::Other(format!("missing API key ({})", var))
            }
        }
    }
}
