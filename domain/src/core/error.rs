//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Raised by the pure parsing and validation helpers in this crate. The
/// application layer wraps them into its own dispatch errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0}")]
    MissingInput(String),

    #[error("{0}")]
    InvalidCommandSyntax(String),

    #[error("Invalid user role: {0}")]
    InvalidRole(String),

    #[error("Invalid media reference: {0}")]
    InvalidMediaReference(String),

    #[error("Output does not match schema: {0}")]
    SchemaMismatch(String),
}

impl DomainError {
    /// Check if this error was caused by malformed user input
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            DomainError::MissingInput(_)
                | DomainError::InvalidCommandSyntax(_)
                | DomainError::InvalidRole(_)
        )
    }
}
