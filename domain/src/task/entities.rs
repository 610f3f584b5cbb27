//! Prompt task entities

use super::schema::OutputSchema;
use crate::media::MediaReference;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The task flows the assistant can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    Draft,
    Summarize,
    Timeline,
    Analyze,
    Search,
    Translate,
    Transcribe,
}

impl TaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Draft => "draft",
            TaskKind::Summarize => "summarize",
            TaskKind::Timeline => "timeline",
            TaskKind::Analyze => "analyze",
            TaskKind::Search => "search",
            TaskKind::Translate => "translate",
            TaskKind::Transcribe => "transcribe",
        }
    }
}

impl std::fmt::Display for TaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named input value for a prompt task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskInput {
    Text(String),
    Media(MediaReference),
}

impl TaskInput {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TaskInput::Text(s) => Some(s),
            TaskInput::Media(_) => None,
        }
    }

    pub fn as_media(&self) -> Option<&MediaReference> {
        match self {
            TaskInput::Media(m) => Some(m),
            TaskInput::Text(_) => None,
        }
    }
}

/// A parameterized request for structured model output (Entity)
///
/// Describes *what* is wanted: the task, its named inputs, the declared
/// output shape, and which tools the model may call. Immutable once built;
/// created per dispatch and dropped when the call resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTask {
    kind: TaskKind,
    inputs: BTreeMap<String, TaskInput>,
    output_schema: OutputSchema,
    tools: Vec<String>,
}

impl PromptTask {
    pub fn builder(kind: TaskKind, output_schema: OutputSchema) -> PromptTaskBuilder {
        PromptTaskBuilder {
            task: PromptTask {
                kind,
                inputs: BTreeMap::new(),
                output_schema,
                tools: Vec::new(),
            },
        }
    }

    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    pub fn inputs(&self) -> &BTreeMap<String, TaskInput> {
        &self.inputs
    }

    pub fn input(&self, name: &str) -> Option<&TaskInput> {
        self.inputs.get(name)
    }

    /// Text input by name, empty when absent.
    pub fn text(&self, name: &str) -> &str {
        self.inputs
            .get(name)
            .and_then(TaskInput::as_text)
            .unwrap_or("")
    }

    /// All media inputs, in name order.
    pub fn media_inputs(&self) -> impl Iterator<Item = (&str, &MediaReference)> {
        self.inputs
            .iter()
            .filter_map(|(name, input)| input.as_media().map(|m| (name.as_str(), m)))
    }

    pub fn output_schema(&self) -> &OutputSchema {
        &self.output_schema
    }

    pub fn tools(&self) -> &[String] {
        &self.tools
    }

    pub fn uses_tools(&self) -> bool {
        !self.tools.is_empty()
    }
}

/// Builder for [`PromptTask`]; the task is frozen by [`PromptTaskBuilder::build`].
#[derive(Debug)]
pub struct PromptTaskBuilder {
    task: PromptTask,
}

impl PromptTaskBuilder {
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.task
            .inputs
            .insert(name.into(), TaskInput::Text(value.into()));
        self
    }

    pub fn media(mut self, name: impl Into<String>, reference: MediaReference) -> Self {
        self.task
            .inputs
            .insert(name.into(), TaskInput::Media(reference));
        self
    }

    pub fn tool(mut self, name: impl Into<String>) -> Self {
        self.task.tools.push(name.into());
        self
    }

    pub fn build(self) -> PromptTask {
        self.task
    }
}
