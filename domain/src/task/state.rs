//! Task executor state machine.
//!
//! Tracks one executor invocation from request to result.
//!
//! # State Transitions
//!
//! ```text
//! Pending ──> AwaitingModel ──> Completed
//!                 │    ▲   └──> Failed
//!                 ▼    │
//!             AwaitingTool ───> Failed
//! ```
//!
//! `Pending` may also go straight to `Failed` when a required input cannot
//! be resolved.

use serde::{Deserialize, Serialize};

/// State of a task executor invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutorState {
    Pending,
    /// Waiting on the model service; `turn` is 1-based.
    AwaitingModel { turn: usize },
    /// Waiting on a tool requested by the model.
    AwaitingTool { turn: usize, tool_name: String },
    Completed { turns: usize },
    Failed { reason: String },
}

impl ExecutorState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed { .. } | Self::Failed { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::AwaitingModel { .. } => "awaiting_model",
            Self::AwaitingTool { .. } => "awaiting_tool",
            Self::Completed { .. } => "completed",
            Self::Failed { .. } => "failed",
        }
    }

    /// Whether moving from `self` to `next` is a legal transition.
    pub fn can_transition_to(&self, next: &ExecutorState) -> bool {
        use ExecutorState::*;
        match (self, next) {
            (_, Failed { .. }) => !self.is_terminal(),
            (Pending, AwaitingModel { turn }) => *turn == 1,
            (AwaitingModel { turn: a }, AwaitingTool { turn: b, .. }) => a == b,
            (AwaitingTool { turn: a, .. }, AwaitingTool { turn: b, .. }) => a == b,
            (AwaitingTool { turn: a, .. }, AwaitingModel { turn: b }) => *b == a + 1,
            (AwaitingModel { turn: a }, Completed { turns }) => a == turns,
            _ => false,
        }
    }
}

impl std::fmt::Display for ExecutorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AwaitingModel { turn } => write!(f, "awaiting_model(turn {})", turn),
            Self::AwaitingTool { turn, tool_name } => {
                write!(f, "awaiting_tool({}, turn {})", tool_name, turn)
            }
            Self::Failed { reason } => write!(f, "failed({})", reason),
            other => write!(f, "{}", other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path_without_tools() {
        let pending = ExecutorState::Pending;
        let awaiting = ExecutorState::AwaitingModel { turn: 1 };
        let done = ExecutorState::Completed { turns: 1 };
        assert!(pending.can_transition_to(&awaiting));
        assert!(awaiting.can_transition_to(&done));
        assert!(done.is_terminal());
    }

    #[test]
    fn test_tool_round_trip() {
        let model1 = ExecutorState::AwaitingModel { turn: 1 };
        let tool = ExecutorState::AwaitingTool {
            turn: 1,
            tool_name: "legal_search".into(),
        };
        let model2 = ExecutorState::AwaitingModel { turn: 2 };
        assert!(model1.can_transition_to(&tool));
        assert!(tool.can_transition_to(&tool.clone()));
        assert!(tool.can_transition_to(&model2));
        assert!(model2.can_transition_to(&ExecutorState::Completed { turns: 2 }));
    }

    #[test]
    fn test_illegal_transitions() {
        assert!(!ExecutorState::Pending.can_transition_to(&ExecutorState::Completed { turns: 0 }));
        let done = ExecutorState::Completed { turns: 1 };
        assert!(!done.can_transition_to(&ExecutorState::Failed {
            reason: "late".into()
        }));
        assert!(
            !ExecutorState::AwaitingModel { turn: 1 }
                .can_transition_to(&ExecutorState::AwaitingModel { turn: 2 })
        );
    }

    #[test]
    fn test_any_live_state_can_fail() {
        let failed = ExecutorState::Failed {
            reason: "x".into(),
        };
        assert!(ExecutorState::Pending.can_transition_to(&failed));
        assert!(ExecutorState::AwaitingModel { turn: 3 }.can_transition_to(&failed));
    }
}
