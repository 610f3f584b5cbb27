//! Port definitions for the application layer
//!
//! Ports are interfaces the use cases depend on. The infrastructure layer
//! supplies the adapters.

pub mod content_store;
pub mod conversation_logger;
pub mod legal_search;
pub mod model_service;
pub mod progress;
pub mod tool_executor;
pub mod tool_schema;
