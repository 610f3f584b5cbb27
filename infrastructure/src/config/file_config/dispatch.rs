//! Dispatch configuration from TOML (`[dispatch]` section)

use legalai_application::ExecutionParams;
use legalai_domain::UserRole;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw dispatch configuration from TOML
///
/// # Example
///
/// ```toml
/// [dispatch]
/// max_tool_turns = 5
/// search_limit = 5
/// deadline_seconds = 120
/// default_role = "advocate"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FileDispatchConfig {
    pub max_tool_turns: usize,
    /// Cases returned by `/search`
    pub search_limit: usize,
    /// Cases returned per `legal_search` tool call
    pub tool_search_limit: usize,
    /// Deadline for one dispatch; unset waits indefinitely
    pub deadline_seconds: Option<u64>,
    /// Role used when the CLI does not pass `--role`
    pub default_role: String,
}

impl Default for FileDispatchConfig {
    fn default() -> Self {
        let params = ExecutionParams::default();
        Self {
            max_tool_turns: params.max_tool_turns,
            search_limit: params.search_limit,
            tool_search_limit: params.tool_search_limit,
            deadline_seconds: params.deadline.map(|d| d.as_secs()),
            default_role: UserRole::default().as_str().to_lowercase(),
        }
    }
}

impl FileDispatchConfig {
    pub fn to_execution_params(&self) -> ExecutionParams {
        ExecutionParams::default()
            .with_max_tool_turns(self.max_tool_turns)
            .with_search_limit(self.search_limit)
            .with_tool_search_limit(self.tool_search_limit)
            .with_deadline(self.deadline_seconds.map(Duration::from_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::super::FileConfig;
    use std::time::Duration;

    #[test]
    fn test_dispatch_section_to_params() {
        let toml_str = r#"
[dispatch]
max_tool_turns = 2
deadline_seconds = 30
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let params = config.dispatch.to_execution_params();
        assert_eq!(params.max_tool_turns, 2);
        assert_eq!(params.search_limit, 5);
        assert_eq!(params.deadline, Some(Duration::from_secs(30)));
    }
}
