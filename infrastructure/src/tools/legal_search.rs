//! `legal_search` tool: case-law lookup for the model during analysis

use legalai_application::LegalSearchPort;
use legalai_application::use_cases::tasks::LEGAL_SEARCH_TOOL;
use legalai_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolParameter},
    value_objects::{ToolError, ToolResult},
};
use legalai_domain::{CaseLawFilters, LegalSearchHit};
use std::time::Instant;

/// Get the tool definition for legal_search
pub fn legal_search_definition() -> ToolDefinition {
    ToolDefinition::new(
        LEGAL_SEARCH_TOOL,
        "Search Indian case law and statutes. Returns matching judgments as \
         {source, content} pairs, where source is the citation.",
    )
    .with_parameter(ToolParameter::new(
        "query",
        "Keywords describing the legal issue or clause",
        true,
    ))
    .with_parameter(ToolParameter::new("court", "Restrict to a court", false))
    .with_parameter(
        ToolParameter::new("year", "Restrict to a judgment year", false).with_type("integer"),
    )
}

/// Run one `legal_search` call against the port.
pub async fn execute_legal_search(
    search: &dyn LegalSearchPort,
    call: &ToolCall,
    limit: usize,
) -> ToolResult {
    let start = Instant::now();

    let query = match call.require_string("query") {
        Ok(q) if !q.trim().is_empty() => q.trim(),
        Ok(_) => {
            return ToolResult::failure(
                LEGAL_SEARCH_TOOL,
                ToolError::invalid_argument("query must not be empty"),
            );
        }
        Err(e) => return ToolResult::failure(LEGAL_SEARCH_TOOL, ToolError::invalid_argument(e)),
    };
    let filters = CaseLawFilters {
        court: call.get_string("court").map(str::to_string),
        year: call.get_i64("year").and_then(|y| u16::try_from(y).ok()),
        ..Default::default()
    };

    let result = match search.search(query, &filters, limit).await {
        Ok(cases) => {
            let hits: Vec<LegalSearchHit> = cases.iter().map(|c| c.to_hit()).collect();
            match serde_json::to_value(hits) {
                Ok(output) => ToolResult::success(LEGAL_SEARCH_TOOL, output),
                Err(e) => ToolResult::failure(
                    LEGAL_SEARCH_TOOL,
                    ToolError::execution_failed(e.to_string()),
                ),
            }
        }
        Err(e) => ToolResult::failure(LEGAL_SEARCH_TOOL, ToolError::execution_failed(e.to_string())),
    };
    result.with_duration(start.elapsed().as_millis() as u64)
}
