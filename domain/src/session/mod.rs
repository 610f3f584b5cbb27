//! Model session domain

pub mod response;

pub use response::{ContentBlock, ModelResponse, StopReason};
