//! Attachment configuration from TOML (`[content]` section)

use serde::{Deserialize, Serialize};

/// 20 MiB, the inline request limit of the model API
pub const DEFAULT_MAX_BYTES: u64 = 20 * 1024 * 1024;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FileContentConfig {
    /// Largest attachment accepted, in bytes
    pub max_bytes: u64,
}

impl Default for FileContentConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }
}
