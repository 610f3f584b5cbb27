//! Scripted port implementations shared by the use case tests.

use crate::ports::content_store::{ContentStore, ContentStoreError};
use crate::ports::legal_search::{LegalSearchError, LegalSearchPort};
use crate::ports::model_service::{
    ModelService, ModelServiceError, ModelSession, PromptPart, SessionOptions, ToolResultMessage,
};
use crate::ports::progress::DispatchProgressNotifier;
use crate::ports::tool_executor::ToolExecutorPort;
use crate::ports::tool_schema::ToolSchemaPort;
use async_trait::async_trait;
use legalai_domain::{
    CaseLaw, CaseLawFilters, CaseStatus, ContentBlock, MediaContent, MediaReference,
    ModelResponse, StopReason, ToolCall, ToolDefinition, ToolError, ToolParameter, ToolResult,
    ToolSpec,
};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// A scripted response for the mock session
#[derive(Debug, Clone)]
pub(crate) enum Scripted {
    Response(ModelResponse),
    Error(String),
    /// Never resolves; for deadline and cancellation tests
    Stall,
}

impl Scripted {
    pub(crate) fn text(text: &str) -> Self {
        Scripted::Response(ModelResponse::from_text(text))
    }
}

/// What the executor sent on each model call
#[derive(Debug, Clone)]
pub(crate) enum SentTurn {
    Parts(Vec<PromptPart>),
    ToolResults(Vec<ToolResultMessage>),
}

/// A model response that requests one `legal_search` call
pub(crate) fn tool_use(id: &str, name: &str, query: &str) -> ModelResponse {
    ModelResponse {
        content: vec![ContentBlock::ToolUse {
            id: id.to_string(),
            name: name.to_string(),
            input: [("query".to_string(), serde_json::json!(query))]
                .into_iter()
                .collect(),
        }],
        stop_reason: Some(StopReason::ToolUse),
        model: None,
    }
}

#[derive(Default)]
struct Script {
    responses: Mutex<VecDeque<Scripted>>,
    sent: Mutex<Vec<SentTurn>>,
}

impl Script {
    async fn next(&self, turn: SentTurn) -> Result<ModelResponse, ModelServiceError> {
        self.sent.lock().unwrap().push(turn);
        let next = self.responses.lock().unwrap().pop_front();
        match next {
            Some(Scripted::Response(r)) => Ok(r),
            Some(Scripted::Error(e)) => Err(ModelServiceError::RequestFailed(e)),
            Some(Scripted::Stall) => std::future::pending().await,
            None => Ok(ModelResponse::from_text("(no more responses)")),
        }
    }
}

/// Mock session that returns scripted responses in order
pub(crate) struct ScriptedSession {
    script: Arc<Script>,
}

#[async_trait]
impl ModelSession for ScriptedSession {
    async fn send(&self, parts: &[PromptPart]) -> Result<ModelResponse, ModelServiceError> {
        self.script.next(SentTurn::Parts(parts.to_vec())).await
    }

    async fn send_tool_results(
        &self,
        results: &[ToolResultMessage],
    ) -> Result<ModelResponse, ModelServiceError> {
        self.script
            .next(SentTurn::ToolResults(results.to_vec()))
            .await
    }
}

/// Mock model service; every session draws from one shared script
pub(crate) struct ScriptedModel {
    script: Arc<Script>,
    sessions: Mutex<Vec<SessionOptions>>,
}

impl ScriptedModel {
    pub(crate) fn new(responses: Vec<Scripted>) -> Self {
        let script = Script {
            responses: Mutex::new(responses.into()),
            sent: Mutex::new(Vec::new()),
        };
        Self {
            script: Arc::new(script),
            sessions: Mutex::new(Vec::new()),
        }
    }

    /// Number of `send` / `send_tool_results` calls
    pub(crate) fn call_count(&self) -> usize {
        self.script.sent.lock().unwrap().len()
    }

    pub(crate) fn sent_turns(&self) -> Vec<SentTurn> {
        self.script.sent.lock().unwrap().clone()
    }

    pub(crate) fn session_options(&self) -> Vec<SessionOptions> {
        self.sessions.lock().unwrap().clone()
    }

    /// Text of the first part of the first user turn
    pub(crate) fn first_prompt(&self) -> Option<String> {
        self.sent_turns().into_iter().find_map(|turn| match turn {
            SentTurn::Parts(parts) => parts.into_iter().find_map(|p| match p {
                PromptPart::Text(t) => Some(t),
                PromptPart::Media(_) => None,
            }),
            SentTurn::ToolResults(_) => None,
        })
    }
}

#[async_trait]
impl ModelService for ScriptedModel {
    async fn open_session(
        &self,
        options: SessionOptions,
    ) -> Result<Box<dyn ModelSession>, ModelServiceError> {
        self.sessions.lock().unwrap().push(options);
        Ok(Box::new(ScriptedSession {
            script: self.script.clone(),
        }))
    }
}

/// Content store that returns the reference text as the document bytes
#[derive(Default)]
pub(crate) struct StaticContentStore {
    calls: AtomicUsize,
}

impl StaticContentStore {
    pub(crate) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentStore for StaticContentStore {
    async fn resolve(&self, reference: &MediaReference) -> Result<MediaContent, ContentStoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mime = if reference.as_str().ends_with(".mp3") {
            "audio/mpeg"
        } else {
            "application/pdf"
        };
        Ok(MediaContent::new(mime, reference.as_str().as_bytes().to_vec()))
    }
}

pub(crate) fn landmark_case() -> CaseLaw {
    CaseLaw {
        id: 1,
        title: "Kesavananda Bharati vs. State of Kerala".into(),
        citation: "AIR 1973 SC 1461".into(),
        court: "Supreme Court of India".into(),
        date: "24/04/1973".into(),
        summary: "Established the basic structure doctrine.".into(),
        status: CaseStatus::Landmark,
        judges: vec![],
        subjects: vec!["Constitutional Law".into()],
    }
}

/// Legal search returning a fixed case list, recording the queries it saw
#[derive(Default)]
pub(crate) struct StaticSearch {
    pub(crate) queries: Mutex<Vec<(String, CaseLawFilters, usize)>>,
}

impl StaticSearch {
    pub(crate) fn call_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

#[async_trait]
impl LegalSearchPort for StaticSearch {
    async fn search(
        &self,
        query: &str,
        filters: &CaseLawFilters,
        limit: usize,
    ) -> Result<Vec<CaseLaw>, LegalSearchError> {
        self.queries
            .lock()
            .unwrap()
            .push((query.to_string(), filters.clone(), limit));
        let mut cases = vec![landmark_case()];
        cases.retain(|c| filters.matches(c));
        cases.truncate(limit);
        Ok(cases)
    }
}

fn legal_search_spec() -> ToolSpec {
    ToolSpec::new().register(
        ToolDefinition::new("legal_search", "Search case law")
            .with_parameter(ToolParameter::new("query", "Search query", true)),
    )
}

/// Tool executor whose `legal_search` always returns the landmark case
pub(crate) struct StaticTools {
    spec: ToolSpec,
    calls: AtomicUsize,
}

impl Default for StaticTools {
    fn default() -> Self {
        Self {
            spec: legal_search_spec(),
            calls: AtomicUsize::new(0),
        }
    }
}

impl StaticTools {
    pub(crate) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ToolExecutorPort for StaticTools {
    fn tool_spec(&self) -> &ToolSpec {
        &self.spec
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let hit = landmark_case().to_hit();
        ToolResult::success(&call.tool_name, serde_json::json!([hit])).with_duration(3)
    }
}

/// Tool executor whose tools always fail
pub(crate) struct FailingTools {
    spec: ToolSpec,
}

impl Default for FailingTools {
    fn default() -> Self {
        Self {
            spec: legal_search_spec(),
        }
    }
}

#[async_trait]
impl ToolExecutorPort for FailingTools {
    fn tool_spec(&self) -> &ToolSpec {
        &self.spec
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        ToolResult::failure(&call.tool_name, ToolError::execution_failed("index offline"))
    }
}

/// Schema converter that emits only the tool name
pub(crate) struct NameOnlySchema;

impl ToolSchemaPort for NameOnlySchema {
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value {
        serde_json::json!({ "name": tool.name })
    }
}

/// Progress notifier that records events as strings
#[derive(Default)]
pub(crate) struct RecordingProgress {
    events: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub(crate) fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl DispatchProgressNotifier for RecordingProgress {
    fn on_task_start(&self, task: &str) {
        self.push(format!("task_start:{}", task));
    }

    fn on_model_turn(&self, turn: usize) {
        self.push(format!("model_turn:{}", turn));
    }

    fn on_tool_call(&self, tool_name: &str) {
        self.push(format!("tool_call:{}", tool_name));
    }

    fn on_tool_result(&self, tool_name: &str, success: bool, _duration_ms: u64) {
        self.push(format!("tool_result:{}:{}", tool_name, success));
    }

    fn on_task_complete(&self, task: &str, success: bool) {
        self.push(format!("task_complete:{}:{}", task, success));
    }
}
