//! Execute Task use case.
//!
//! Runs one [`PromptTask`] against the model service: render the template,
//! attach media inline, expose the declared tools, drive tool round-trips one
//! at a time, and validate the final answer against the output schema.

use crate::config::ExecutionParams;
use crate::ports::content_store::ContentStore;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::model_service::{ModelService, PromptPart, SessionOptions, ToolResultMessage};
use crate::ports::progress::DispatchProgressNotifier;
use crate::ports::tool_executor::ToolExecutorPort;
use crate::ports::tool_schema::ToolSchemaPort;
use crate::use_cases::dispatch_chat::DispatchError;
use crate::use_cases::shared::cancellable;
use legalai_domain::core::string::truncate;
use legalai_domain::{
    ExecutorState, LegalPromptTemplate, ModelResponse, PromptTask, StopReason, ToolCall,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Validated output of a task invocation
#[derive(Debug, Clone)]
pub struct TaskOutcome {
    /// The structured answer, already checked against the task's schema
    pub value: serde_json::Value,
    /// Number of model turns taken, including tool round-trips
    pub turns: usize,
}

/// Use case for executing a single prompt task.
pub struct TaskExecutor {
    model: Arc<dyn ModelService>,
    content_store: Arc<dyn ContentStore>,
    tools: Arc<dyn ToolExecutorPort>,
    tool_schema: Arc<dyn ToolSchemaPort>,
    conversation_logger: Arc<dyn ConversationLogger>,
    params: ExecutionParams,
}

impl TaskExecutor {
    pub fn new(
        model: Arc<dyn ModelService>,
        content_store: Arc<dyn ContentStore>,
        tools: Arc<dyn ToolExecutorPort>,
        tool_schema: Arc<dyn ToolSchemaPort>,
    ) -> Self {
        Self {
            model,
            content_store,
            tools,
            tool_schema,
            conversation_logger: Arc::new(NoConversationLogger),
            params: ExecutionParams::default(),
        }
    }

    pub fn with_params(mut self, params: ExecutionParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Execute a task and return its schema-validated output.
    pub async fn execute(
        &self,
        task: &PromptTask,
        progress: &dyn DispatchProgressNotifier,
        cancellation_token: &Option<CancellationToken>,
    ) -> Result<TaskOutcome, DispatchError> {
        let mut state = ExecutorState::Pending;
        let result = self
            .run(task, &mut state, progress, cancellation_token)
            .await;

        if let Err(e) = &result {
            advance(
                &mut state,
                ExecutorState::Failed {
                    reason: e.to_string(),
                },
            );
            warn!("Task {} failed: {}", task.kind(), e);
        }
        result
    }

    async fn run(
        &self,
        task: &PromptTask,
        state: &mut ExecutorState,
        progress: &dyn DispatchProgressNotifier,
        cancellation_token: &Option<CancellationToken>,
    ) -> Result<TaskOutcome, DispatchError> {
        let prompt = LegalPromptTemplate::render(task);
        let mut parts = vec![PromptPart::Text(prompt.clone())];

        for (name, reference) in task.media_inputs() {
            let content =
                cancellable(cancellation_token, self.content_store.resolve(reference)).await?;
            debug!(
                "Resolved {} '{}' ({}, {} bytes)",
                name,
                reference.describe(),
                content.mime_type,
                content.len()
            );
            parts.push(PromptPart::Media(content));
        }

        let definitions = self.tools.tool_spec().select(task.tools());
        if definitions.len() < task.tools().len() {
            warn!(
                "Task {} declares tools that are not registered: {:?}",
                task.kind(),
                task.tools()
            );
        }
        let options = SessionOptions::default()
            .with_output_schema(task.output_schema().to_json_schema())
            .with_tools(self.tool_schema.tools_to_schema(&definitions));

        self.conversation_logger.log(ConversationEvent::new(
            "task_start",
            serde_json::json!({
                "task": task.kind().as_str(),
                "inputs": task.inputs().keys().collect::<Vec<_>>(),
                "tools": task.tools(),
                "prompt": prompt,
            }),
        ));

        let session = self.model.open_session(options).await?;

        let mut turn = 1;
        advance(state, ExecutorState::AwaitingModel { turn });
        progress.on_model_turn(turn);
        let mut response = cancellable(cancellation_token, session.send(&parts)).await?;
        self.log_response(task, turn, &response);

        while response.has_tool_calls() {
            if turn > self.params.max_tool_turns {
                return Err(DispatchError::ModelOutputInvalid(format!(
                    "{} exceeded {} tool turns",
                    task.kind(),
                    self.params.max_tool_turns
                )));
            }

            let results = self
                .run_tool_calls(response.tool_calls(), turn, state, progress, cancellation_token)
                .await?;

            turn += 1;
            advance(state, ExecutorState::AwaitingModel { turn });
            progress.on_model_turn(turn);
            response =
                cancellable(cancellation_token, session.send_tool_results(&results)).await?;
            self.log_response(task, turn, &response);
        }

        if response.stop_reason == Some(StopReason::Safety) {
            return Err(DispatchError::ModelOutputInvalid(format!(
                "{} response was blocked",
                task.kind()
            )));
        }

        let value = response.structured().map_err(|e| {
            DispatchError::ModelOutputInvalid(format!("{} returned no usable JSON: {}", task.kind(), e))
        })?;
        task.output_schema().validate(&value)?;

        advance(state, ExecutorState::Completed { turns: turn });
        info!("Task {} completed in {} turn(s)", task.kind(), turn);
        Ok(TaskOutcome { value, turns: turn })
    }

    /// Execute the requested tools sequentially, failing on the first error.
    async fn run_tool_calls(
        &self,
        calls: Vec<ToolCall>,
        turn: usize,
        state: &mut ExecutorState,
        progress: &dyn DispatchProgressNotifier,
        cancellation_token: &Option<CancellationToken>,
    ) -> Result<Vec<ToolResultMessage>, DispatchError> {
        let mut results = Vec::with_capacity(calls.len());

        for call in calls {
            advance(
                state,
                ExecutorState::AwaitingTool {
                    turn,
                    tool_name: call.tool_name.clone(),
                },
            );
            progress.on_tool_call(&call.tool_name);
            self.conversation_logger.log(ConversationEvent::new(
                "tool_call",
                serde_json::json!({
                    "tool": call.tool_name,
                    "arguments": call.arguments,
                    "turn": turn,
                }),
            ));

            let result = cancellable(cancellation_token, async {
                Ok::<_, DispatchError>(self.tools.execute(&call).await)
            })
            .await?;

            progress.on_tool_result(&call.tool_name, result.is_success(), result.duration_ms);
            self.conversation_logger.log(ConversationEvent::new(
                "tool_result",
                serde_json::json!({
                    "tool": call.tool_name,
                    "success": result.is_success(),
                    "duration_ms": result.duration_ms,
                }),
            ));

            if let Some(err) = result.error {
                return Err(DispatchError::ToolExecutionFailed(format!(
                    "{}: {}",
                    call.tool_name, err
                )));
            }

            debug!("Tool {} succeeded in {}ms", call.tool_name, result.duration_ms);
            results.push(ToolResultMessage {
                tool_use_id: call.native_id.clone().unwrap_or_else(|| call.tool_name.clone()),
                tool_name: call.tool_name,
                output: result.output.unwrap_or(serde_json::Value::Null),
                is_error: false,
            });
        }

        Ok(results)
    }

    fn log_response(&self, task: &PromptTask, turn: usize, response: &ModelResponse) {
        let text = response.text_content();
        let tool_calls: Vec<String> = response
            .tool_calls()
            .into_iter()
            .map(|c| c.tool_name)
            .collect();
        debug!(
            "Model turn {} for {}: {} tool call(s), text: {}",
            turn,
            task.kind(),
            tool_calls.len(),
            truncate(&text, 120)
        );
        self.conversation_logger.log(ConversationEvent::new(
            "model_response",
            serde_json::json!({
                "task": task.kind().as_str(),
                "turn": turn,
                "text": text,
                "tool_calls": tool_calls,
            }),
        ));
    }
}

fn advance(state: &mut ExecutorState, next: ExecutorState) {
    debug_assert!(
        state.can_transition_to(&next),
        "illegal executor transition {} -> {}",
        state,
        next
    );
    debug!("Executor state: {} -> {}", state, next);
    *state = next;
}
