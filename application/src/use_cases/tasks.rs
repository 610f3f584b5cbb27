//! Task catalogue.
//!
//! One constructor per task flow, each declaring the inputs, output schema,
//! and tools of its [`PromptTask`], plus the typed shape of the validated
//! output.

use crate::use_cases::dispatch_chat::DispatchError;
use legalai_domain::{
    AnalysisReport, MediaReference, OutputSchema, PromptTask, SchemaField, TaskKind,
    TranslateArgs, UserRole,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Name of the case-law retrieval tool exposed to `/analyze`.
pub const LEGAL_SEARCH_TOOL: &str = "legal_search";

pub fn draft(query: &str, user_role: UserRole) -> PromptTask {
    let schema = OutputSchema::new()
        .with_field(SchemaField::string(
            "draft",
            "The complete petition, formatted and ready to use",
        ))
        .with_field(
            SchemaField::string_array("citations", "Statutes and judgments relied on").optional(),
        );
    PromptTask::builder(TaskKind::Draft, schema)
        .text("query", query)
        .text("userRole", user_role.as_str())
        .build()
}

pub fn summarize(document: MediaReference) -> PromptTask {
    let schema = OutputSchema::new()
        .with_field(SchemaField::string("summary", "Plain-language summary"))
        .with_field(
            SchemaField::string_array("citations", "Authorities cited in the document").optional(),
        );
    PromptTask::builder(TaskKind::Summarize, schema)
        .media("document", document)
        .build()
}

pub fn timeline(case_details: &str) -> PromptTask {
    let schema = OutputSchema::new().with_field(SchemaField::string(
        "timeline",
        "Chronological events, one per line",
    ));
    PromptTask::builder(TaskKind::Timeline, schema)
        .text("caseDetails", case_details)
        .build()
}

pub fn analyze(document: MediaReference) -> PromptTask {
    let schema = OutputSchema::new().with_field(SchemaField::object(
        "analysisResults",
        "Clause analysis with redlines and supporting precedent",
        vec![
            SchemaField::string("annotatedClauses", "Key clauses identified"),
            SchemaField::string("suggestedEdits", "Redline edits for flagged clauses"),
            SchemaField::string("matchingPrecedent", "Precedents supporting the edits"),
        ],
    ));
    PromptTask::builder(TaskKind::Analyze, schema)
        .media("document", document)
        .tool(LEGAL_SEARCH_TOOL)
        .build()
}

pub fn translate(args: &TranslateArgs) -> PromptTask {
    let schema = OutputSchema::new().with_field(SchemaField::string(
        "translatedText",
        "The translation",
    ));
    PromptTask::builder(TaskKind::Translate, schema)
        .text("text", &args.text)
        .text("targetLanguage", &args.target_language)
        .build()
}

pub fn transcribe(audio: MediaReference) -> PromptTask {
    let schema = OutputSchema::new().with_field(SchemaField::string(
        "transcript",
        "Verbatim transcript",
    ));
    PromptTask::builder(TaskKind::Transcribe, schema)
        .media("audio", audio)
        .build()
}

#[derive(Debug, Deserialize)]
pub struct DraftOutput {
    pub draft: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub citations: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SummaryOutput {
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub citations: Vec<String>,
}

/// Optional list fields: `null` reads the same as a missing key.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Deserialize)]
pub struct TimelineOutput {
    pub timeline: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutput {
    pub analysis_results: AnalysisReport,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationOutput {
    pub translated_text: String,
}

#[derive(Debug, Deserialize)]
pub struct TranscriptOutput {
    pub transcript: String,
}

/// Decode schema-validated output into its typed shape.
pub fn decode<T: DeserializeOwned>(kind: TaskKind, value: serde_json::Value) -> Result<T, DispatchError> {
    serde_json::from_value(value)
        .map_err(|e| DispatchError::ModelOutputInvalid(format!("{} output: {}", kind, e)))
}
