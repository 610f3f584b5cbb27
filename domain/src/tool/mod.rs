//! Tool domain
//!
//! Definitions of the tools a model may call during a task, the calls it
//! makes, and the results sent back.

pub mod entities;
pub mod value_objects;

pub use entities::{ToolCall, ToolDefinition, ToolParameter, ToolSpec};
pub use value_objects::{ToolError, ToolResult};
