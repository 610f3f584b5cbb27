//! Execution parameters — dispatch loop control.
//!
//! [`ExecutionParams`] groups the static parameters that bound a single
//! dispatch: how many tool round-trips the model may take, how many cases a
//! search returns, and the overall deadline. These are application-layer
//! concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Dispatch loop control parameters.
///
/// Used by [`ChatDispatcher`](crate::use_cases::dispatch_chat::ChatDispatcher)
/// and [`TaskExecutor`](crate::use_cases::execute_task::TaskExecutor).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionParams {
    /// Maximum tool round-trips in a single task invocation.
    pub max_tool_turns: usize,
    /// Number of cases returned by `/search`.
    pub search_limit: usize,
    /// Number of cases returned to the model per `legal_search` call.
    pub tool_search_limit: usize,
    /// Deadline for a whole dispatch; `None` waits indefinitely.
    pub deadline: Option<Duration>,
}

impl Default for ExecutionParams {
    fn default() -> Self {
        Self {
            max_tool_turns: 5,
            search_limit: 5,
            tool_search_limit: 3,
            deadline: Some(Duration::from_secs(120)),
        }
    }
}

impl ExecutionParams {
    // ==================== Builder Methods ====================

    pub fn with_max_tool_turns(mut self, max: usize) -> Self {
        self.max_tool_turns = max;
        self
    }

    pub fn with_search_limit(mut self, limit: usize) -> Self {
        self.search_limit = limit;
        self
    }

    pub fn with_tool_search_limit(mut self, limit: usize) -> Self {
        self.tool_search_limit = limit;
        self
    }

    pub fn with_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.deadline = deadline;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = ExecutionParams::default();
        assert_eq!(params.max_tool_turns, 5);
        assert_eq!(params.search_limit, 5);
        assert_eq!(params.tool_search_limit, 3);
        assert_eq!(params.deadline, Some(Duration::from_secs(120)));
    }

    #[test]
    fn test_builder() {
        let params = ExecutionParams::default()
            .with_max_tool_turns(2)
            .with_search_limit(10)
            .with_deadline(None);

        assert_eq!(params.max_tool_turns, 2);
        assert_eq!(params.search_limit, 10);
        assert!(params.deadline.is_none());
    }
}
