//! Prompt templates for each task flow

use crate::conversation::ConversationHistory;
use crate::core::role::UserRole;
use crate::task::{PromptTask, TaskKind};

/// Templates for generating the prompt of each task
pub struct LegalPromptTemplate;

impl LegalPromptTemplate {
    /// Render the prompt text for a task from its inputs.
    ///
    /// Media inputs are not embedded in the text; the executor attaches them
    /// inline next to the prompt.
    pub fn render(task: &PromptTask) -> String {
        match task.kind() {
            TaskKind::Draft => Self::draft_petition(task.text("query"), task.text("userRole")),
            TaskKind::Summarize => Self::summarize_document().to_string(),
            TaskKind::Timeline => Self::case_timeline(task.text("caseDetails")),
            TaskKind::Analyze => Self::analyze_document().to_string(),
            // Search is answered by the legal-search port, not the model.
            TaskKind::Search => task.text("query").to_string(),
            TaskKind::Translate => {
                Self::translate(task.text("text"), task.text("targetLanguage"))
            }
            TaskKind::Transcribe => Self::transcribe_audio().to_string(),
        }
    }

    /// Petition drafting prompt with role-specific instructions
    pub fn draft_petition(query: &str, user_role: &str) -> String {
        format!(
            r#"You are LegalAi, an AI assistant specialized in drafting legal petitions for the Indian legal system. Your task is to generate a clean, well-formatted, and ready-to-use draft of a legal petition based on the user's request.

User Role: {user_role}

Drafting Request: {query}

Instructions for Drafting:
1. Structure and Formatting: Create a formal legal petition structure. Use clear headings for sections such as "IN THE COURT OF [Court Name]", "PETITION UNDER [Relevant Section/Article]", "PARTIES", "MOST RESPECTFULLY SHOWETH:" and "PRAYER".
2. Placeholders: Use clear, bracketed placeholders for every case-specific detail the user must fill in (e.g. "[Name of Petitioner]", "[Address]", "[Date]").
3. Content: Based on the request, write the factual narrative and legal grounds in formal legal language.
4. Alignment: Use line breaks and indentation so the draft can be pasted into a word processor without losing its structure.
5. Role-Based Customization:
   - Advocate: formal, comprehensive, ready for filing, with detailed legal arguments and placeholders for evidence.
   - Student: well-structured, with annotations explaining the purpose of each clause.
   - Public: a simplified pro-forma template with clear explanations of each section and the information needed.
6. Do not add introductions, closing remarks, or disclaimers. The "draft" field must contain only the petition.
7. List any statutes or judgments you relied on in "citations"."#
        )
    }

    /// Document summarization prompt
    pub fn summarize_document() -> &'static str {
        r#"You are LegalAi, an expert legal assistant for the Indian legal system.
Summarize the attached legal document for a reader who has not seen it.

Cover, in plain language:
- the parties and the nature of the document
- the key facts and obligations
- the operative clauses or the holding
- deadlines, amounts, and risks worth flagging

Put the summary in "summary". List the statutes, sections, and cases the document cites in "citations"."#
    }

    /// Chronological case timeline prompt
    pub fn case_timeline(case_details: &str) -> String {
        format!(
            r#"You are LegalAi, a legal assistant who organizes case facts.
Build a chronological timeline of events from the case details below.

Case Details:
{case_details}

Rules:
- One event per line, oldest first, formatted as "<date>: <event>".
- Keep dates exactly as given; write "Date unknown" when none is stated.
- Include filings, hearings, orders, and deadlines.

Return the timeline in "timeline"."#
        )
    }

    /// Document analysis prompt; expects the `legal_search` tool.
    pub fn analyze_document() -> &'static str {
        r#"You are an expert legal analyst. Perform a retrieval-augmented analysis of the attached legal document.

1. Analyze and Identify: Review the document to identify key clauses, potential risks, and areas for improvement. Focus on liability, termination, payment terms, and intellectual property.
2. Retrieve: For each clause you flag as problematic or ambiguous, call the "legal_search" tool to find relevant precedents or statutes.
3. Generate Output: Your suggestions must be supported by the precedents you found.
   - annotatedClauses: summarize the key clauses identified.
   - suggestedEdits: specific, clear redline edits for the flagged clauses.
   - matchingPrecedent: the precedents retrieved with "legal_search" that support your recommendations, with their sources.

Return a single JSON object {"analysisResults": {"annotatedClauses": ..., "suggestedEdits": ..., "matchingPrecedent": ...}} and nothing else.

Disclaimer: this analysis is informational only and is not legal advice."#
    }

    /// Translation prompt
    pub fn translate(text: &str, target_language: &str) -> String {
        format!(
            r#"You are a legal translator. Translate the text below into {target_language}.
Preserve legal terms of art, section numbers, party names, and formatting. Do not add commentary.

Text:
{text}

Return the translation in "translatedText"."#
        )
    }

    /// Audio transcription prompt
    pub fn transcribe_audio() -> &'static str {
        r#"Transcribe the attached audio recording verbatim.
Label speakers as "Speaker 1", "Speaker 2" and so on when more than one voice is heard. Mark inaudible passages as [inaudible].

Return the transcript in "transcript"."#
    }

    /// Free-form conversational prompt with rendered history
    pub fn conversation(
        user_role: UserRole,
        history: &ConversationHistory,
        message: &str,
    ) -> String {
        format!(
            r#"You are LegalAi, a RAG-based AI assistant. Your responses must be grounded in your knowledge of Indian law and the provided conversation history.
User role: {role}.
Conversation History:
{history}
User: {message}
LegalAi:"#,
            role = user_role,
            history = history.render(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::ConversationTurn;
    use crate::task::OutputSchema;

    #[test]
    fn test_draft_prompt_contains_inputs() {
        let prompt = LegalPromptTemplate::draft_petition("File a consumer complaint", "Public");
        assert!(prompt.contains("Drafting Request: File a consumer complaint"));
        assert!(prompt.contains("User Role: Public"));
        assert!(prompt.contains("PRAYER"));
    }

    #[test]
    fn test_render_dispatches_on_kind() {
        let task = PromptTask::builder(TaskKind::Timeline, OutputSchema::new())
            .text("caseDetails", "FIR filed on 01/02/2020")
            .build();
        let prompt = LegalPromptTemplate::render(&task);
        assert!(prompt.contains("FIR filed on 01/02/2020"));
        assert!(prompt.contains("\"timeline\""));
    }

    #[test]
    fn test_translate_prompt() {
        let prompt = LegalPromptTemplate::translate("Summons issued", "Hindi");
        assert!(prompt.contains("into Hindi"));
        assert!(prompt.contains("Summons issued"));
    }

    #[test]
    fn test_analyze_prompt_mentions_tool() {
        assert!(LegalPromptTemplate::analyze_document().contains("legal_search"));
    }

    #[test]
    fn test_conversation_prompt_renders_history() {
        let history = ConversationHistory::from(vec![
            ConversationTurn::user("What is bail?"),
            ConversationTurn::model("Temporary release pending trial."),
        ]);
        let prompt = LegalPromptTemplate::conversation(UserRole::Student, &history, "And anticipatory bail?");
        assert!(prompt.contains("User role: Student."));
        assert!(prompt.contains("user: What is bail?\nmodel: Temporary release pending trial."));
        assert!(prompt.ends_with("User: And anticipatory bail?\nLegalAi:"));
    }
}
