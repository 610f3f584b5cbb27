//! Domain layer for legalai
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Commands
//!
//! A chat message either starts with a slash command (`/draft`, `/analyze`,
//! ...) and is routed to a task flow, or it is free text and goes to the
//! conversational fallback.
//!
//! ## Prompt Tasks
//!
//! Every task flow is a [`PromptTask`]: named inputs, an [`OutputSchema`]
//! the model must satisfy, and the tools the model may call on the way.
//!
//! ## Response Envelope
//!
//! Whatever ran, the caller receives one [`ResponseEnvelope`].

pub mod case_law;
pub mod command;
pub mod conversation;
pub mod core;
pub mod envelope;
pub mod media;
pub mod prompt;
pub mod session;
pub mod task;
pub mod tool;

// Re-export commonly used types
pub use case_law::{CaseLaw, CaseLawFilters, CaseLawQuery, CaseStatus, LegalSearchHit};
pub use command::{ParsedMessage, SlashCommand, TranslateArgs, parse_command, parse_translate_args};
pub use conversation::{ConversationHistory, ConversationTurn, TurnRole};
pub use crate::core::{error::DomainError, role::UserRole};
pub use envelope::{AnalysisReport, DEFAULT_CONTENT, ResponseEnvelope, ResponsePayload};
pub use media::{MediaContent, MediaReference};
pub use prompt::LegalPromptTemplate;
pub use session::{ContentBlock, ModelResponse, StopReason};
pub use task::{
    ExecutorState, FieldType, OutputSchema, PromptTask, PromptTaskBuilder, SchemaField, TaskInput,
    TaskKind,
};
pub use tool::{ToolCall, ToolDefinition, ToolError, ToolParameter, ToolResult, ToolSpec};
