//! Wire types for `generateContent` and conversions to domain types
//!
//! Everything here is pure: requests are assembled from session state and
//! responses are parsed without touching the network.

use super::error::GeminiError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use legalai_application::ports::model_service::{PromptPart, ToolResultMessage};
use legalai_domain::{ContentBlock, ModelResponse, StopReason};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::collections::HashMap;

// ─── Wire types ──────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Value>,
}

impl GenerationConfig {
    fn is_empty(&self) -> bool {
        self.temperature.is_none() && self.response_mime_type.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_call: Option<FunctionCall>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_response: Option<FunctionResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub args: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub response: Value,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
    pub model_version: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

// ─── Domain → Gemini ─────────────────────────────────────────────

/// Convert prompt parts into a user turn; media becomes base64 `inlineData`.
pub fn user_content(parts: &[PromptPart]) -> Content {
    let parts = parts
        .iter()
        .map(|part| match part {
            PromptPart::Text(text) => Part {
                text: Some(text.clone()),
                ..Default::default()
            },
            PromptPart::Media(media) => Part {
                inline_data: Some(InlineData {
                    mime_type: media.mime_type.clone(),
                    data: BASE64.encode(&media.bytes),
                }),
                ..Default::default()
            },
        })
        .collect();
    Content {
        role: "user".to_string(),
        parts,
    }
}

/// Convert tool results into a turn of `functionResponse` parts.
pub fn tool_results_content(results: &[ToolResultMessage]) -> Content {
    let parts = results
        .iter()
        .map(|result| {
            let key = if result.is_error { "error" } else { "result" };
            Part {
                function_response: Some(FunctionResponse {
                    id: Some(result.tool_use_id.clone()),
                    name: result.tool_name.clone(),
                    response: json!({ key: result.output }),
                }),
                ..Default::default()
            }
        })
        .collect();
    Content {
        role: "user".to_string(),
        parts,
    }
}

/// Convert provider-neutral JSON Schema into the OpenAPI subset Gemini accepts.
///
/// Type names are upper-cased and keywords Gemini rejects are dropped.
pub fn to_gemini_schema(schema: &Value) -> Value {
    match schema {
        Value::Object(map) => {
            let mut out = Map::new();
            for (key, value) in map {
                match key.as_str() {
                    "additionalProperties" | "$schema" | "default" => {}
                    "type" => {
                        let upper = value
                            .as_str()
                            .map(|t| Value::String(t.to_ascii_uppercase()))
                            .unwrap_or_else(|| value.clone());
                        out.insert(key.clone(), upper);
                    }
                    // Keys here are property names, not keywords
                    "properties" => {
                        let properties = match value {
                            Value::Object(props) => Value::Object(
                                props
                                    .iter()
                                    .map(|(name, prop)| (name.clone(), to_gemini_schema(prop)))
                                    .collect(),
                            ),
                            other => other.clone(),
                        };
                        out.insert(key.clone(), properties);
                    }
                    _ => {
                        out.insert(key.clone(), to_gemini_schema(value));
                    }
                }
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(to_gemini_schema).collect()),
        other => other.clone(),
    }
}

/// Convert tool schemas (from `ToolSchemaPort`) into a `functionDeclarations` block.
pub fn function_declarations(tools: &[Value]) -> Option<Value> {
    let declarations: Vec<Value> = tools
        .iter()
        .filter_map(|tool| {
            let name = tool.get("name")?.as_str()?;
            let mut decl = json!({ "name": name });
            if let Some(description) = tool.get("description") {
                decl["description"] = description.clone();
            }
            if let Some(params) = tool.get("input_schema") {
                decl["parameters"] = to_gemini_schema(params);
            }
            Some(decl)
        })
        .collect();

    if declarations.is_empty() {
        None
    } else {
        Some(json!({ "functionDeclarations": declarations }))
    }
}

/// Assemble a request from the session's history and fixed options.
///
/// JSON response mode cannot be combined with function calling, so a
/// session with tools carries its output schema as a system instruction
/// instead of `responseSchema`.
pub fn build_request(
    contents: &[Content],
    output_schema: Option<&Value>,
    tools: &[Value],
    temperature: Option<f32>,
) -> GenerateContentRequest {
    let tools_block = function_declarations(tools);
    let mut generation_config = GenerationConfig {
        temperature,
        ..Default::default()
    };
    let mut system_instruction = None;

    if let Some(schema) = output_schema {
        if tools_block.is_some() {
            system_instruction = Some(Content {
                role: "system".to_string(),
                parts: vec![Part {
                    text: Some(format!(
                        "When you have finished using tools, reply with a single JSON object \
                         matching this schema and nothing else:\n{}",
                        schema
                    )),
                    ..Default::default()
                }],
            });
        } else {
            generation_config.response_mime_type = Some("application/json".to_string());
            generation_config.response_schema = Some(to_gemini_schema(schema));
        }
    }

    GenerateContentRequest {
        contents: contents.to_vec(),
        system_instruction,
        tools: tools_block.into_iter().collect(),
        generation_config: (!generation_config.is_empty()).then_some(generation_config),
    }
}

// ─── Gemini → Domain ─────────────────────────────────────────────

/// Map a Gemini finish reason onto the domain stop reason.
pub fn convert_finish_reason(reason: &str, has_calls: bool) -> StopReason {
    match reason {
        "STOP" if has_calls => StopReason::ToolUse,
        "STOP" => StopReason::EndTurn,
        "MAX_TOKENS" => StopReason::MaxTokens,
        "SAFETY" | "RECITATION" | "BLOCKLIST" | "PROHIBITED_CONTENT" | "SPII" => {
            StopReason::Safety
        }
        other => StopReason::Other(other.to_string()),
    }
}

/// Convert one response part into a content block.
///
/// Calls without an id get a positional one, since tool results are
/// matched back by id.
fn convert_part(part: &Part, index: usize) -> Option<ContentBlock> {
    if let Some(call) = &part.function_call {
        let input: HashMap<String, Value> = call.args.clone().into_iter().collect();
        return Some(ContentBlock::ToolUse {
            id: call
                .id
                .clone()
                .unwrap_or_else(|| format!("call_{}", index)),
            name: call.name.clone(),
            input,
        });
    }
    part.text.as_ref().map(|t| ContentBlock::Text(t.clone()))
}

/// Parse a `generateContent` response body.
///
/// Returns the domain response plus the model turn to append to history.
pub fn parse_response(body: &str) -> Result<(ModelResponse, Content), GeminiError> {
    let response: GenerateContentResponse = serde_json::from_str(body)?;

    let Some(candidate) = response.candidates.into_iter().next() else {
        return match response.prompt_feedback.and_then(|f| f.block_reason) {
            Some(reason) => Err(GeminiError::Blocked(reason)),
            None => Err(GeminiError::EmptyResponse),
        };
    };

    let mut content = candidate.content.unwrap_or(Content {
        role: "model".to_string(),
        parts: Vec::new(),
    });
    content.role = "model".to_string();

    let blocks: Vec<ContentBlock> = content
        .parts
        .iter()
        .enumerate()
        .filter_map(|(i, part)| convert_part(part, i))
        .collect();

    // Echo generated ids into history so functionResponse ids line up
    for (i, part) in content.parts.iter_mut().enumerate() {
        if let Some(call) = part.function_call.as_mut()
            && call.id.is_none()
        {
            call.id = Some(format!("call_{}", i));
        }
    }

    let has_calls = blocks
        .iter()
        .any(|b| matches!(b, ContentBlock::ToolUse { .. }));
    let stop_reason = candidate
        .finish_reason
        .as_deref()
        .map(|r| convert_finish_reason(r, has_calls));

    Ok((
        ModelResponse {
            content: blocks,
            stop_reason,
            model: response.model_version,
        },
        content,
    ))
}

/// Extract the message from an API error body, falling back to the raw text.
pub fn parse_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}
