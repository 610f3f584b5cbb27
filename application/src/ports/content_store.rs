//! Content Store port
//!
//! Resolves opaque attachment references into bytes the model can read.

use async_trait::async_trait;
use legalai_domain::{MediaContent, MediaReference};
use thiserror::Error;

/// Errors that can occur while resolving an attachment
#[derive(Error, Debug)]
pub enum ContentStoreError {
    #[error("Attachment not found: {0}")]
    NotFound(String),

    #[error("Invalid attachment reference: {0}")]
    InvalidReference(String),

    #[error("Attachment too large: {size} bytes (limit {limit})")]
    TooLarge { size: u64, limit: u64 },

    #[error("Unsupported attachment type: {0}")]
    UnsupportedType(String),

    #[error("I/O error: {0}")]
    Io(String),
}

#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn resolve(&self, reference: &MediaReference) -> Result<MediaContent, ContentStoreError>;
}
