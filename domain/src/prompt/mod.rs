//! Prompt domain
//!
//! Templates that turn a prompt task's inputs into model instructions.

mod template;

pub use template::LegalPromptTemplate;
