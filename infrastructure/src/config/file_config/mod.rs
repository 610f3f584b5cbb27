//! Raw TOML configuration data types
//!
//! These structs mirror the TOML file one-to-one and are deserialized
//! directly. Conversion into application types happens here too.

mod case_law;
mod content;
mod dispatch;
mod logging;
mod model;
mod output;

pub use case_law::FileCaseLawConfig;
pub use content::{DEFAULT_MAX_BYTES, FileContentConfig};
pub use dispatch::FileDispatchConfig;
pub use logging::FileLoggingConfig;
pub use model::{DEFAULT_ENDPOINT, FileModelConfig};
pub use output::{FileOutputConfig, FileOutputFormat};

use legalai_domain::UserRole;
use serde::{Deserialize, Serialize};

/// Configuration validation error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("model.name must not be empty")]
    EmptyModelName,

    #[error("{field} must be greater than zero")]
    ZeroValue { field: &'static str },

    #[error("invalid dispatch.default_role '{0}' (expected advocate, student or public)")]
    InvalidRole(String),

    #[error("model.temperature {0} is out of range (0.0 - 2.0)")]
    InvalidTemperature(f32),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FileConfig {
    pub model: FileModelConfig,
    pub dispatch: FileDispatchConfig,
    pub content: FileContentConfig,
    pub case_law: FileCaseLawConfig,
    pub logging: FileLoggingConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Reject values that cannot produce a working dispatcher.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.model.name.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }
        if self.model.timeout_seconds == Some(0) {
            return Err(ConfigValidationError::ZeroValue {
                field: "model.timeout_seconds",
            });
        }
        if let Some(t) = self.model.temperature
            && !(0.0..=2.0).contains(&t)
        {
            return Err(ConfigValidationError::InvalidTemperature(t));
        }
        if self.dispatch.max_tool_turns == 0 {
            return Err(ConfigValidationError::ZeroValue {
                field: "dispatch.max_tool_turns",
            });
        }
        if self.dispatch.search_limit == 0 {
            return Err(ConfigValidationError::ZeroValue {
                field: "dispatch.search_limit",
            });
        }
        if self.dispatch.deadline_seconds == Some(0) {
            return Err(ConfigValidationError::ZeroValue {
                field: "dispatch.deadline_seconds",
            });
        }
        if self.content.max_bytes == 0 {
            return Err(ConfigValidationError::ZeroValue {
                field: "content.max_bytes",
            });
        }
        self.default_role()?;
        Ok(())
    }

    pub fn default_role(&self) -> Result<UserRole, ConfigValidationError> {
        self.dispatch
            .default_role
            .parse()
            .map_err(|_| ConfigValidationError::InvalidRole(self.dispatch.default_role.clone()))
    }
}
