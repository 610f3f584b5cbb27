//! Legal Search port
//!
//! Backs both the `/search` command and the `legal_search` tool the model
//! may call during `/analyze`.

use async_trait::async_trait;
use legalai_domain::{CaseLaw, CaseLawFilters};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LegalSearchError {
    #[error("Search index unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid search query: {0}")]
    InvalidQuery(String),
}

/// Port for case-law retrieval
#[async_trait]
pub trait LegalSearchPort: Send + Sync {
    /// Return at most `limit` cases matching `query` and `filters`, best first.
    async fn search(
        &self,
        query: &str,
        filters: &CaseLawFilters,
        limit: usize,
    ) -> Result<Vec<CaseLaw>, LegalSearchError>;
}
