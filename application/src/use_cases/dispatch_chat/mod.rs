//! Dispatch Chat use case.
//!
//! Routes a chat message to the task flow named by its slash command, or to
//! the conversational fallback, and normalizes every outcome into a
//! [`ResponseEnvelope`].
//!
//! # Flow
//!
//! ```text
//! message ─> parse_command ─> validate attachments ─> TaskExecutor ─> envelope
//!                  │                                       ▲
//!                  ├─ /search ─> SearchCaseLawUseCase ─────┤
//!                  └─ no / unknown command ─> ConverseUseCase
//! ```
//!
//! Attachment checks run before any port is called. Errors propagate
//! unchanged: there is no retry and no partial envelope.

mod types;

pub use types::{ChatRequest, DispatchError};

use crate::config::ExecutionParams;
use crate::ports::content_store::ContentStore;
use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger};
use crate::ports::legal_search::LegalSearchPort;
use crate::ports::model_service::ModelService;
use crate::ports::progress::DispatchProgressNotifier;
use crate::ports::tool_executor::ToolExecutorPort;
use crate::ports::tool_schema::ToolSchemaPort;
use crate::use_cases::converse::{ConverseInput, ConverseUseCase};
use crate::use_cases::execute_task::TaskExecutor;
use crate::use_cases::search_case_law::SearchCaseLawUseCase;
use crate::use_cases::shared::check_cancelled;
use crate::use_cases::tasks::{self, decode};
use legalai_domain::{
    MediaReference, PromptTask, ResponseEnvelope, ResponsePayload, SlashCommand, TaskKind,
    parse_command, parse_translate_args,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

const DOCUMENT_REQUIRED_FOR_SUMMARY: &str = "Document required for summarization.";
const DOCUMENT_REQUIRED_FOR_ANALYSIS: &str = "Document required for analysis.";
const AUDIO_REQUIRED: &str = "Audio file required for transcription.";

/// Use case for dispatching chat messages.
pub struct ChatDispatcher {
    executor: TaskExecutor,
    converse: ConverseUseCase,
    search: SearchCaseLawUseCase,
    conversation_logger: Arc<dyn ConversationLogger>,
    params: ExecutionParams,
    cancellation_token: Option<CancellationToken>,
}

impl ChatDispatcher {
    pub fn new(
        model: Arc<dyn ModelService>,
        content_store: Arc<dyn ContentStore>,
        legal_search: Arc<dyn LegalSearchPort>,
        tools: Arc<dyn ToolExecutorPort>,
        tool_schema: Arc<dyn ToolSchemaPort>,
    ) -> Self {
        Self {
            executor: TaskExecutor::new(model.clone(), content_store, tools, tool_schema),
            converse: ConverseUseCase::new(model),
            search: SearchCaseLawUseCase::new(legal_search),
            conversation_logger: Arc::new(NoConversationLogger),
            params: ExecutionParams::default(),
            cancellation_token: None,
        }
    }

    /// Replace execution parameters (tool turns, search limit, deadline).
    pub fn with_params(mut self, params: ExecutionParams) -> Self {
        self.executor = self.executor.with_params(params.clone());
        self.params = params;
        self
    }

    /// Record dispatch events to a structured conversation log.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.executor = self.executor.with_conversation_logger(logger.clone());
        self.converse = self.converse.with_conversation_logger(logger.clone());
        self.conversation_logger = logger;
        self
    }

    /// Set a cancellation token for graceful interruption.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    pub fn params(&self) -> &ExecutionParams {
        &self.params
    }

    /// Dispatch a chat message and return the response envelope.
    ///
    /// Bounded by the configured deadline, when there is one.
    pub async fn dispatch(
        &self,
        request: &ChatRequest,
        progress: &dyn DispatchProgressNotifier,
    ) -> Result<ResponseEnvelope, DispatchError> {
        match self.params.deadline {
            Some(deadline) => tokio::time::timeout(deadline, self.route(request, progress))
                .await
                .map_err(|_| DispatchError::Timeout(deadline))?,
            None => self.route(request, progress).await,
        }
    }

    async fn route(
        &self,
        request: &ChatRequest,
        progress: &dyn DispatchProgressNotifier,
    ) -> Result<ResponseEnvelope, DispatchError> {
        check_cancelled(&self.cancellation_token)?;

        let parsed = parse_command(&request.message);
        let label = match &parsed.command {
            Some(command) if command.is_known() => command.as_str().to_string(),
            _ => "conversation".to_string(),
        };
        info!("Dispatching {} (role: {})", label, request.user_role);
        self.conversation_logger.log(ConversationEvent::new(
            "dispatch_start",
            serde_json::json!({
                "command": parsed.command.as_ref().map(|c| c.as_str()),
                "route": label,
                "user_role": request.user_role.as_str(),
                "has_document": request.document.is_some(),
                "has_audio": request.audio.is_some(),
                "history_turns": request.history.len(),
            }),
        ));

        let envelope = match parsed.command {
            Some(SlashCommand::Draft) => {
                let task = tasks::draft(&parsed.text, request.user_role);
                let out: tasks::DraftOutput = self.run_task(&task, progress).await?;
                ResponseEnvelope::new(
                    out.draft,
                    ResponsePayload::Draft {
                        citations: out.citations,
                    },
                )
            }
            Some(SlashCommand::Summarize) => {
                let document = require(&request.document, DOCUMENT_REQUIRED_FOR_SUMMARY)?;
                let task = tasks::summarize(document);
                let out: tasks::SummaryOutput = self.run_task(&task, progress).await?;
                ResponseEnvelope::new(
                    out.summary,
                    ResponsePayload::Summary {
                        citations: out.citations,
                    },
                )
            }
            Some(SlashCommand::Timeline) => {
                let task = tasks::timeline(&parsed.text);
                let out: tasks::TimelineOutput = self.run_task(&task, progress).await?;
                ResponseEnvelope::new(
                    out.timeline.clone(),
                    ResponsePayload::Timeline {
                        timeline: out.timeline,
                    },
                )
            }
            Some(SlashCommand::Analyze) => {
                let document = require(&request.document, DOCUMENT_REQUIRED_FOR_ANALYSIS)?;
                let task = tasks::analyze(document);
                let out: tasks::AnalysisOutput = self.run_task(&task, progress).await?;
                let report = out.analysis_results;
                ResponseEnvelope::new(
                    report.to_json_string(),
                    ResponsePayload::Analysis { report },
                )
            }
            Some(SlashCommand::Search) => {
                progress.on_task_start(TaskKind::Search.as_str());
                let outcome = self
                    .search
                    .execute(&parsed.text, self.params.search_limit, &self.cancellation_token)
                    .await;
                progress.on_task_complete(TaskKind::Search.as_str(), outcome.is_ok());
                let results = outcome?;
                ResponseEnvelope::new(
                    format!("Found {} cases.", results.len()),
                    ResponsePayload::Search { results },
                )
            }
            Some(SlashCommand::Translate) => {
                let args = parse_translate_args(&parsed.text)?;
                let task = tasks::translate(&args);
                let out: tasks::TranslationOutput = self.run_task(&task, progress).await?;
                ResponseEnvelope::new(
                    out.translated_text,
                    ResponsePayload::Translation {
                        target_language: args.target_language,
                    },
                )
            }
            Some(SlashCommand::Transcribe) => {
                let audio = require(&request.audio, AUDIO_REQUIRED)?;
                let task = tasks::transcribe(audio);
                let out: tasks::TranscriptOutput = self.run_task(&task, progress).await?;
                ResponseEnvelope::new(out.transcript, ResponsePayload::Transcript)
            }
            Some(SlashCommand::Other(_)) | None => {
                progress.on_task_start(&label);
                let outcome = self
                    .converse
                    .execute(
                        ConverseInput {
                            message: &request.message,
                            history: &request.history,
                            user_role: request.user_role,
                        },
                        progress,
                        &self.cancellation_token,
                    )
                    .await;
                progress.on_task_complete(&label, outcome.is_ok());
                ResponseEnvelope::new(outcome?, ResponsePayload::Conversation)
            }
        };

        debug!(
            "Dispatch {} produced {} payload ({} chars)",
            label,
            envelope.payload().kind(),
            envelope.content().len()
        );
        self.conversation_logger.log(ConversationEvent::new(
            "dispatch_complete",
            serde_json::json!({
                "route": label,
                "payload": envelope.payload().kind(),
                "content": envelope.content(),
            }),
        ));
        Ok(envelope)
    }

    /// Run a task with progress callbacks and decode its output.
    async fn run_task<T: DeserializeOwned>(
        &self,
        task: &PromptTask,
        progress: &dyn DispatchProgressNotifier,
    ) -> Result<T, DispatchError> {
        let kind = task.kind();
        progress.on_task_start(kind.as_str());
        let outcome = self
            .executor
            .execute(task, progress, &self.cancellation_token)
            .await;
        progress.on_task_complete(kind.as_str(), outcome.is_ok());
        decode(kind, outcome?.value)
    }
}

/// Return the attachment or fail with `MissingInput` before any port call.
fn require(reference: &Option<MediaReference>, message: &str) -> Result<MediaReference, DispatchError> {
    reference
        .clone()
        .ok_or_else(|| DispatchError::MissingInput(message.to_string()))
}

#[cfg(test)]
mod tests;
