//! Legal tool executor, the concrete implementation of [`ToolExecutorPort`].
//!
//! Routes tool calls from the model to their implementations. The only tool
//! today is `legal_search`, backed by the same [`LegalSearchPort`] that
//! answers `/search`.

use super::legal_search::{self, legal_search_definition};
use async_trait::async_trait;
use legalai_application::use_cases::tasks::LEGAL_SEARCH_TOOL;
use legalai_application::{LegalSearchPort, ToolExecutorPort};
use legalai_domain::tool::{
    entities::{ToolCall, ToolSpec},
    value_objects::{ToolError, ToolResult},
};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct LegalToolExecutor {
    tool_spec: ToolSpec,
    search: Arc<dyn LegalSearchPort>,
    /// Cases returned per `legal_search` call
    search_limit: usize,
}

impl LegalToolExecutor {
    pub fn new(search: Arc<dyn LegalSearchPort>, search_limit: usize) -> Self {
        Self {
            tool_spec: ToolSpec::new().register(legal_search_definition()),
            search,
            search_limit,
        }
    }
}

#[async_trait]
impl ToolExecutorPort for LegalToolExecutor {
    fn tool_spec(&self) -> &ToolSpec {
        &self.tool_spec
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        debug!("Executing tool {} with {:?}", call.tool_name, call.arguments);
        let result = match call.tool_name.as_str() {
            LEGAL_SEARCH_TOOL => {
                legal_search::execute_legal_search(self.search.as_ref(), call, self.search_limit)
                    .await
            }
            other => ToolResult::failure(other, ToolError::not_found(other)),
        };
        if let Some(err) = &result.error {
            warn!("Tool {} failed: {}", call.tool_name, err);
        }
        result
    }
}
