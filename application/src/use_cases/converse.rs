//! Conversational fallback.
//!
//! Answers messages that carry no recognised command with free-form text,
//! grounded in the caller's conversation history.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::model_service::{ModelService, PromptPart, SessionOptions};
use crate::ports::progress::DispatchProgressNotifier;
use crate::use_cases::dispatch_chat::DispatchError;
use crate::use_cases::shared::cancellable;
use legalai_domain::{ConversationHistory, LegalPromptTemplate, UserRole};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Input for the conversational fallback
pub struct ConverseInput<'a> {
    /// The full original message, slash-token included
    pub message: &'a str,
    pub history: &'a ConversationHistory,
    pub user_role: UserRole,
}

pub struct ConverseUseCase {
    model: Arc<dyn ModelService>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl ConverseUseCase {
    pub fn new(model: Arc<dyn ModelService>) -> Self {
        Self {
            model,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Return the model's reply, trimmed; may be empty.
    pub async fn execute(
        &self,
        input: ConverseInput<'_>,
        progress: &dyn DispatchProgressNotifier,
        cancellation_token: &Option<CancellationToken>,
    ) -> Result<String, DispatchError> {
        let prompt = LegalPromptTemplate::conversation(input.user_role, input.history, input.message);
        debug!(
            "Conversational prompt with {} history turn(s)",
            input.history.len()
        );

        let session = self.model.open_session(SessionOptions::free_text()).await?;
        progress.on_model_turn(1);
        let response = cancellable(cancellation_token, session.send(&[PromptPart::text(&prompt)])).await?;
        let text = response.text_content().trim().to_string();

        self.conversation_logger.log(ConversationEvent::new(
            "model_response",
            serde_json::json!({
                "task": "conversation",
                "turn": 1,
                "prompt": prompt,
                "text": text,
            }),
        ));
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoDispatchProgress;
    use crate::use_cases::test_support::{Scripted, ScriptedModel};
    use legalai_domain::ConversationTurn;

    #[tokio::test]
    async fn test_reply_uses_rendered_history() {
        let model = Arc::new(ScriptedModel::new(vec![Scripted::text("  Hello! How can I help?  ")]));
        let converse = ConverseUseCase::new(model.clone());

        let history = ConversationHistory::from(vec![
            ConversationTurn::user("Is a verbal contract valid?"),
            ConversationTurn::model("Generally yes, under the Contract Act."),
        ]);
        let reply = converse
            .execute(
                ConverseInput {
                    message: "hello",
                    history: &history,
                    user_role: UserRole::Public,
                },
                &NoDispatchProgress,
                &None,
            )
            .await
            .unwrap();

        assert_eq!(reply, "Hello! How can I help?");
        let prompt = model.first_prompt().unwrap();
        assert!(prompt.contains(&history.render()));
        assert!(prompt.ends_with("User: hello\nLegalAi:"));

        let options = model.session_options();
        assert!(options[0].output_schema.is_none());
        assert!(options[0].tools.is_empty());
    }

    #[tokio::test]
    async fn test_model_error_propagates() {
        let model = Arc::new(ScriptedModel::new(vec![Scripted::Error("503".into())]));
        let converse = ConverseUseCase::new(model);
        let history = ConversationHistory::new();

        let err = converse
            .execute(
                ConverseInput {
                    message: "hi",
                    history: &history,
                    user_role: UserRole::Student,
                },
                &NoDispatchProgress,
                &None,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DispatchError::ModelService(_)));
    }
}
