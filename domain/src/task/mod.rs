//! Prompt task domain.
//!
//! A [`PromptTask`] describes a request for structured model output: which
//! task flow, its named inputs, the declared [`OutputSchema`], and the tools
//! the model may call. [`ExecutorState`] tracks a single executor invocation.

pub mod entities;
pub mod schema;
pub mod state;

pub use entities::{PromptTask, PromptTaskBuilder, TaskInput, TaskKind};
pub use schema::{FieldType, OutputSchema, SchemaField};
pub use state::ExecutorState;
