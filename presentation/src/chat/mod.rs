//! Interactive chat module
//!
//! Provides a line-editor based chat interface that keeps conversation
//! history between messages.

mod repl;

pub use repl::{ChatRepl, ChatSession, ReplCommand};
