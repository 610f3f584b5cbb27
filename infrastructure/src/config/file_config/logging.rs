//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
///
/// # Example
///
/// ```toml
/// [logging]
/// file = "~/.local/state/legalai/legalai.log"
/// conversation_log = "~/.local/state/legalai/conversations.jsonl"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Diagnostic log file, in addition to stderr
    pub file: Option<PathBuf>,
    /// JSONL transcript of dispatch events
    pub conversation_log: Option<PathBuf>,
}
