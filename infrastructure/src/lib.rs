//! Infrastructure layer for legalai
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, plus configuration file loading.

pub mod case_law;
pub mod config;
pub mod content;
pub mod gemini;
pub mod logging;
pub mod tools;

// Re-export commonly used types
pub use case_law::{CaseLawCatalog, CatalogError};
pub use config::{
    ConfigLoader, ConfigValidationError, FileCaseLawConfig, FileConfig, FileContentConfig,
    FileDispatchConfig, FileLoggingConfig, FileModelConfig, FileOutputConfig, FileOutputFormat,
};
pub use content::LocalContentStore;
pub use gemini::{GeminiConfig, GeminiError, GeminiModelService};
pub use logging::JsonlConversationLogger;
pub use tools::{JsonSchemaToolConverter, LegalToolExecutor, legal_search_definition};
