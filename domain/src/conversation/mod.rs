//! Conversation history supplied by the caller.
//!
//! The dispatcher never stores history; the caller owns it and passes it in
//! with every request. Only the conversational fallback reads it.

use serde::{Deserialize, Serialize};

/// Speaker of a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Model,
}

impl TurnRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnRole::User => "user",
            TurnRole::Model => "model",
        }
    }
}

/// A single turn in a conversation (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: TurnRole,
    pub content: String,
}

impl ConversationTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
        }
    }

    pub fn model(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Model,
            content: content.into(),
        }
    }
}

/// Ordered sequence of turns, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationHistory {
    turns: Vec<ConversationTurn>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Render as `role: content` lines for inclusion in a prompt.
    pub fn render(&self) -> String {
        self.turns
            .iter()
            .map(|t| format!("{}: {}", t.role.as_str(), t.content))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<Vec<ConversationTurn>> for ConversationHistory {
    fn from(turns: Vec<ConversationTurn>) -> Self {
        Self { turns }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_history() {
        let history = ConversationHistory::from(vec![
            ConversationTurn::user("What is an FIR?"),
            ConversationTurn::model("A First Information Report."),
        ]);
        assert_eq!(
            history.render(),
            "user: What is an FIR?\nmodel: A First Information Report."
        );
    }

    #[test]
    fn test_empty_history_renders_empty() {
        assert_eq!(ConversationHistory::new().render(), "");
    }

    #[test]
    fn test_serde_shape() {
        let history = ConversationHistory::from(vec![ConversationTurn::user("hi")]);
        let json = serde_json::to_value(&history).unwrap();
        assert_eq!(json, serde_json::json!([{"role": "user", "content": "hi"}]));
    }
}
