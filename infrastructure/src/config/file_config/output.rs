//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};

/// How responses are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// The response envelope as JSON
    Json,
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FileOutputConfig {
    pub format: Option<FileOutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}
