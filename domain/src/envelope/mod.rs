//! Uniform response envelope returned for every dispatch.
//!
//! Whatever task ran, the caller gets a [`ResponseEnvelope`]: the role is
//! always `model`, `content` is always non-empty, and exactly one
//! [`ResponsePayload`] variant says which task produced it.
//!
//! On the wire the envelope keeps the flat shape chat clients expect:
//!
//! ```text
//! { role, content, citations?, analysisResults?, timeline?, searchResult? }
//! ```

use crate::case_law::CaseLaw;
use serde::{Deserialize, Serialize, Serializer};

/// Substituted when a task yields empty content.
pub const DEFAULT_CONTENT: &str = "Sorry, I couldn't process that request.";

/// Structured result of `/analyze`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub annotated_clauses: String,
    pub suggested_edits: String,
    pub matching_precedent: String,
}

impl AnalysisReport {
    /// Compact JSON string, as carried in `analysisResults`.
    pub fn to_json_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Task-specific payload of an envelope (tagged union)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponsePayload {
    Draft { citations: Vec<String> },
    Summary { citations: Vec<String> },
    Timeline { timeline: String },
    Analysis { report: AnalysisReport },
    Search { results: Vec<CaseLaw> },
    Translation { target_language: String },
    Transcript,
    Conversation,
}

impl ResponsePayload {
    pub fn kind(&self) -> &'static str {
        match self {
            ResponsePayload::Draft { .. } => "draft",
            ResponsePayload::Summary { .. } => "summary",
            ResponsePayload::Timeline { .. } => "timeline",
            ResponsePayload::Analysis { .. } => "analysis",
            ResponsePayload::Search { .. } => "search",
            ResponsePayload::Translation { .. } => "translation",
            ResponsePayload::Transcript => "transcript",
            ResponsePayload::Conversation => "conversation",
        }
    }

    pub fn citations(&self) -> &[String] {
        match self {
            ResponsePayload::Draft { citations } | ResponsePayload::Summary { citations } => {
                citations
            }
            _ => &[],
        }
    }
}

/// The response returned to the caller (Value Object)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseEnvelope {
    content: String,
    payload: ResponsePayload,
}

impl ResponseEnvelope {
    /// Build an envelope, substituting [`DEFAULT_CONTENT`] for blank content.
    pub fn new(content: impl Into<String>, payload: ResponsePayload) -> Self {
        let content = content.into();
        let content = if content.trim().is_empty() {
            DEFAULT_CONTENT.to_string()
        } else {
            content
        };
        Self { content, payload }
    }

    pub fn role(&self) -> &'static str {
        "model"
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn payload(&self) -> &ResponsePayload {
        &self.payload
    }

    pub fn into_parts(self) -> (String, ResponsePayload) {
        (self.content, self.payload)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireEnvelope<'a> {
    role: &'static str,
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    citations: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    analysis_results: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timeline: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    search_result: Option<WireSearchResult<'a>>,
}

#[derive(Serialize)]
struct WireSearchResult<'a> {
    results: &'a [CaseLaw],
}

impl Serialize for ResponseEnvelope {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut wire = WireEnvelope {
            role: self.role(),
            content: &self.content,
            citations: None,
            analysis_results: None,
            timeline: None,
            search_result: None,
        };
        match &self.payload {
            ResponsePayload::Draft { citations } | ResponsePayload::Summary { citations } => {
                if !citations.is_empty() {
                    wire.citations = Some(citations);
                }
            }
            ResponsePayload::Timeline { timeline } => wire.timeline = Some(timeline),
            ResponsePayload::Analysis { report } => {
                wire.analysis_results = Some(report.to_json_string())
            }
            ResponsePayload::Search { results } => {
                wire.search_result = Some(WireSearchResult { results })
            }
            ResponsePayload::Translation { .. }
            | ResponsePayload::Transcript
            | ResponsePayload::Conversation => {}
        }
        wire.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case_law::CaseStatus;
    use serde_json::json;

    #[test]
    fn test_blank_content_falls_back() {
        for blank in ["", "   ", "\n"] {
            let envelope = ResponseEnvelope::new(blank, ResponsePayload::Conversation);
            assert_eq!(envelope.content(), DEFAULT_CONTENT);
            assert_eq!(envelope.role(), "model");
        }
    }

    #[test]
    fn test_draft_wire_shape() {
        let envelope = ResponseEnvelope::new(
            "IN THE COURT OF [Court Name]",
            ResponsePayload::Draft {
                citations: vec!["X v Y".into()],
            },
        );
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "role": "model",
                "content": "IN THE COURT OF [Court Name]",
                "citations": ["X v Y"],
            })
        );
    }

    #[test]
    fn test_empty_citations_are_omitted() {
        let envelope = ResponseEnvelope::new("summary", ResponsePayload::Summary { citations: vec![] });
        let value = serde_json::to_value(&envelope).unwrap();
        assert!(value.get("citations").is_none());
    }

    #[test]
    fn test_analysis_wire_shape_is_json_string() {
        let report = AnalysisReport {
            annotated_clauses: "Clause 7: termination".into(),
            suggested_edits: "Add notice period".into(),
            matching_precedent: "AIR 1973 SC 1461".into(),
        };
        let envelope = ResponseEnvelope::new(
            report.to_json_string(),
            ResponsePayload::Analysis {
                report: report.clone(),
            },
        );
        let value = serde_json::to_value(&envelope).unwrap();
        let inner: AnalysisReport =
            serde_json::from_str(value["analysisResults"].as_str().unwrap()).unwrap();
        assert_eq!(inner, report);
        assert_eq!(value["content"], value["analysisResults"]);
    }

    #[test]
    fn test_search_wire_shape() {
        let case = CaseLaw {
            id: 1,
            title: "Kesavananda Bharati vs. State of Kerala".into(),
            citation: "AIR 1973 SC 1461".into(),
            court: "Supreme Court of India".into(),
            date: "24/04/1973".into(),
            summary: "Basic structure doctrine.".into(),
            status: CaseStatus::Landmark,
            judges: vec![],
            subjects: vec![],
        };
        let envelope = ResponseEnvelope::new(
            "Found 1 cases.",
            ResponsePayload::Search {
                results: vec![case],
            },
        );
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["searchResult"]["results"][0]["citation"], "AIR 1973 SC 1461");
        assert_eq!(value["searchResult"]["results"][0]["status"], "Landmark");
    }

    #[test]
    fn test_timeline_and_plain_payloads() {
        let timeline = ResponseEnvelope::new(
            "2019: FIR",
            ResponsePayload::Timeline {
                timeline: "2019: FIR".into(),
            },
        );
        assert_eq!(serde_json::to_value(&timeline).unwrap()["timeline"], "2019: FIR");

        let plain = ResponseEnvelope::new("hello", ResponsePayload::Transcript);
        assert_eq!(
            serde_json::to_value(&plain).unwrap(),
            json!({"role": "model", "content": "hello"})
        );
    }
}
