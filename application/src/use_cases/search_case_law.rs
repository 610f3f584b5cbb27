//! Search Case Law use case.
//!
//! `/search` is answered straight from the legal-search port: the ordered
//! records are returned as-is, with no model call in between.

use crate::ports::legal_search::LegalSearchPort;
use crate::use_cases::dispatch_chat::DispatchError;
use crate::use_cases::shared::cancellable;
use legalai_domain::{CaseLaw, CaseLawQuery};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub struct SearchCaseLawUseCase {
    search: Arc<dyn LegalSearchPort>,
}

impl SearchCaseLawUseCase {
    pub fn new(search: Arc<dyn LegalSearchPort>) -> Self {
        Self { search }
    }

    /// Search with inline `court:` / `judge:` / `year:` / `subject:` filters.
    pub async fn execute(
        &self,
        input: &str,
        limit: usize,
        cancellation_token: &Option<CancellationToken>,
    ) -> Result<Vec<CaseLaw>, DispatchError> {
        let query = CaseLawQuery::parse(input);
        let cases = cancellable(
            cancellation_token,
            self.search.search(&query.text, &query.filters, limit),
        )
        .await?;
        info!(
            "Case law search '{}' ({:?}) returned {} case(s)",
            query.text,
            query.filters,
            cases.len()
        );
        Ok(cases)
    }
}
