//! Type definitions for the chat dispatch use case.

use crate::ports::content_store::ContentStoreError;
use crate::ports::legal_search::LegalSearchError;
use crate::ports::model_service::ModelServiceError;
use legalai_domain::{ConversationHistory, DomainError, MediaReference, UserRole};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while dispatching a chat message
#[derive(Error, Debug)]
pub enum DispatchError {
    /// A required attachment is absent.
    #[error("{0}")]
    MissingInput(String),

    /// Command arguments could not be parsed.
    #[error("{0}")]
    InvalidCommandSyntax(String),

    /// Empty output, unparsable JSON, schema mismatch, or tool turns exhausted.
    #[error("The model did not return a valid result: {0}")]
    ModelOutputInvalid(String),

    #[error("Tool execution failed: {0}")]
    ToolExecutionFailed(String),

    #[error("Model service error: {0}")]
    ModelService(#[from] ModelServiceError),

    #[error("Content store error: {0}")]
    ContentStore(#[from] ContentStoreError),

    #[error("Legal search error: {0}")]
    LegalSearch(#[from] LegalSearchError),

    #[error("Dispatch timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("Operation cancelled")]
    Cancelled,
}

impl DispatchError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, DispatchError::Cancelled)
    }

    /// Whether the user can fix this by changing the message or attachments
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            DispatchError::MissingInput(_) | DispatchError::InvalidCommandSyntax(_)
        )
    }
}

impl From<DomainError> for DispatchError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::MissingInput(msg) => DispatchError::MissingInput(msg),
            DomainError::SchemaMismatch(msg) => DispatchError::ModelOutputInvalid(msg),
            other @ (DomainError::InvalidCommandSyntax(_)
            | DomainError::InvalidRole(_)
            | DomainError::InvalidMediaReference(_)) => {
                DispatchError::InvalidCommandSyntax(other.to_string())
            }
        }
    }
}

/// A chat message with its context
///
/// History and attachments are owned by the caller; the dispatcher keeps
/// nothing between requests.
#[derive(Debug, Clone, Default)]
pub struct ChatRequest {
    pub message: String,
    pub history: ConversationHistory,
    pub user_role: UserRole,
    pub document: Option<MediaReference>,
    pub audio: Option<MediaReference>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn with_history(mut self, history: ConversationHistory) -> Self {
        self.history = history;
        self
    }

    pub fn with_role(mut self, role: UserRole) -> Self {
        self.user_role = role;
        self
    }

    pub fn with_document(mut self, document: impl Into<MediaReference>) -> Self {
        self.document = Some(document.into());
        self
    }

    pub fn with_audio(mut self, audio: impl Into<MediaReference>) -> Self {
        self.audio = Some(audio.into());
        self
    }
}
