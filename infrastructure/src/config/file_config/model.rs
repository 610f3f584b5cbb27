//! Model service configuration from TOML (`[model]` section)

use serde::{Deserialize, Serialize};

/// Default Generative Language API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Raw model configuration from TOML
///
/// # Example
///
/// ```toml
/// [model]
/// name = "gemini-2.0-flash"
/// api_key_env = "GEMINI_API_KEY"
/// timeout_seconds = 60
/// temperature = 0.2
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FileModelConfig {
    /// Model identifier sent to the API
    pub name: String,
    /// Base URL of the API
    pub endpoint: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// HTTP timeout per request
    pub timeout_seconds: Option<u64>,
    /// Sampling temperature; provider default when unset
    pub temperature: Option<f32>,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        Self {
            name: "gemini-2.0-flash".to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            timeout_seconds: Some(60),
            temperature: None,
        }
    }
}
