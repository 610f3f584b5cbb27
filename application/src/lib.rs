//! Application layer for legalai
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ExecutionParams;
pub use ports::{
    content_store::{ContentStore, ContentStoreError},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    legal_search::{LegalSearchError, LegalSearchPort},
    model_service::{
        ModelService, ModelServiceError, ModelSession, PromptPart, SessionOptions,
        ToolResultMessage,
    },
    progress::{DispatchProgressNotifier, NoDispatchProgress},
    tool_executor::ToolExecutorPort,
    tool_schema::ToolSchemaPort,
};
pub use use_cases::converse::{ConverseInput, ConverseUseCase};
pub use use_cases::dispatch_chat::{ChatDispatcher, ChatRequest, DispatchError};
pub use use_cases::execute_task::{TaskExecutor, TaskOutcome};
pub use use_cases::search_case_law::SearchCaseLawUseCase;
