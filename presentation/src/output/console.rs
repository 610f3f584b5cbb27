//! Console output formatter for response envelopes

use colored::Colorize;
use legalai_application::DispatchError;
use legalai_domain::{AnalysisReport, CaseLaw, CaseStatus, ResponseEnvelope, ResponsePayload};

/// Formats response envelopes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format an envelope as readable text
    pub fn format(envelope: &ResponseEnvelope) -> String {
        let mut output = String::new();

        match envelope.payload() {
            ResponsePayload::Analysis { report } => {
                output.push_str(&Self::analysis(report));
            }
            ResponsePayload::Search { results } => {
                output.push_str(&format!("{}\n", envelope.content().cyan().bold()));
                for case in results {
                    output.push_str(&Self::case(case));
                }
            }
            ResponsePayload::Translation { target_language } => {
                output.push_str(&format!(
                    "{}\n\n{}\n",
                    format!("Translation ({})", target_language).cyan().bold(),
                    envelope.content()
                ));
            }
            _ => {
                output.push_str(envelope.content());
                output.push('\n');
            }
        }

        let citations = envelope.payload().citations();
        if !citations.is_empty() {
            output.push_str(&format!("\n{}\n", "Citations:".cyan().bold()));
            for citation in citations {
                output.push_str(&format!("  * {}\n", citation));
            }
        }

        output
    }

    /// Format as JSON in the chat wire shape
    pub fn format_json(envelope: &ResponseEnvelope) -> String {
        serde_json::to_string_pretty(envelope).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a dispatch failure; user errors read as guidance, not faults
    pub fn format_error(error: &DispatchError) -> String {
        if error.is_user_error() {
            format!("{} {}", "!".yellow().bold(), error)
        } else {
            format!("{} {}", "Error:".red().bold(), error)
        }
    }

    fn analysis(report: &AnalysisReport) -> String {
        let mut output = String::new();
        output.push_str(&Self::section_header("Annotated Clauses"));
        output.push_str(&format!("{}\n", report.annotated_clauses));
        output.push_str(&Self::section_header("Suggested Edits"));
        output.push_str(&format!("{}\n", report.suggested_edits));
        output.push_str(&Self::section_header("Matching Precedent"));
        output.push_str(&format!("{}\n", report.matching_precedent));
        output
    }

    fn case(case: &CaseLaw) -> String {
        let status = match case.status {
            CaseStatus::Landmark => case.status.as_str().green(),
            CaseStatus::Recent => case.status.as_str().blue(),
            CaseStatus::Overruled => case.status.as_str().red(),
        };
        format!(
            "\n{} [{}]\n  {} | {} | {}\n{}\n",
            case.title.yellow().bold(),
            status,
            case.citation,
            case.court,
            case.date,
            Self::indent(&case.summary, "  ")
        )
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_draft_with_citations() {
        plain();
        let envelope = ResponseEnvelope::new(
            "BEFORE THE DISTRICT CONSUMER FORUM",
            ResponsePayload::Draft {
                citations: vec!["Consumer Protection Act, 2019".into()],
            },
        );
        let text = ConsoleFormatter::format(&envelope);
        assert!(text.starts_with("BEFORE THE DISTRICT CONSUMER FORUM\n"));
        assert!(text.contains("Citations:"));
        assert!(text.contains("  * Consumer Protection Act, 2019"));
    }

    #[test]
    fn test_search_lists_cases() {
        plain();
        let case = CaseLaw {
            id: 4,
            title: "Justice K.S. Puttaswamy (Retd.) vs. Union of India".into(),
            citation: "(2017) 10 SCC 1".into(),
            court: "Supreme Court of India".into(),
            date: "24/08/2017".into(),
            summary: "Affirmed the right to privacy as a fundamental right.".into(),
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
        let text = ConsoleFormatter::format(&envelope);
        assert!(text.contains("Found 1 cases."));
        assert!(text.contains("[Landmark]"));
        assert!(text.contains("(2017) 10 SCC 1 | Supreme Court of India | 24/08/2017"));
    }

    #[test]
    fn test_analysis_sections() {
        plain();
        let report = AnalysisReport {
            annotated_clauses: "Clause 4 is one-sided.".into(),
            suggested_edits: "Add a cure period.".into(),
            matching_precedent: "AIR 1973 SC 1461".into(),
        };
        let envelope = ResponseEnvelope::new(
            report.to_json_string(),
            ResponsePayload::Analysis { report },
        );
        let text = ConsoleFormatter::format(&envelope);
        assert!(text.contains("Suggested Edits"));
        assert!(text.contains("Add a cure period."));
        assert!(!text.contains("annotatedClauses"));
    }

    #[test]
    fn test_json_is_wire_shape() {
        let envelope = ResponseEnvelope::new("Hello", ResponsePayload::Conversation);
        let value: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&envelope)).unwrap();
        assert_eq!(value["role"], "model");
        assert_eq!(value["content"], "Hello");
    }

    #[test]
    fn test_user_error_formatting() {
        plain();
        let err = DispatchError::MissingInput("Document required for analysis.".into());
        assert_eq!(
            ConsoleFormatter::format_error(&err),
            "! Document required for analysis."
        );
    }
}
