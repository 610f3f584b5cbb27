//! Slash-command parsing for chat messages.
//!
//! A message such as `/draft File a consumer complaint` is split into a
//! command token (`draft`) and the remaining text. Messages without a leading
//! slash-token are plain conversation and keep their full text.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use regex::Regex;

/// `/` + word characters, optional whitespace, then the rest of the line.
///
/// `.` does not cross a newline, so only the first line after the token is
/// captured.
static COMMAND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/([A-Za-z0-9_]+)\s*(.*)").expect("valid command regex"));

/// A recognized chat command.
///
/// `Other` carries any lower-cased token that is not part of the fixed set;
/// the dispatcher routes it to the conversational fallback.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlashCommand {
    Draft,
    Summarize,
    Timeline,
    Analyze,
    Search,
    Translate,
    Transcribe,
    Other(String),
}

impl SlashCommand {
    /// Map a lower-cased token onto the command set.
    pub fn from_token(token: &str) -> Self {
        match token {
            "draft" => SlashCommand::Draft,
            "summarize" => SlashCommand::Summarize,
            "timeline" => SlashCommand::Timeline,
            "analyze" => SlashCommand::Analyze,
            "search" => SlashCommand::Search,
            "translate" => SlashCommand::Translate,
            "transcribe" => SlashCommand::Transcribe,
            other => SlashCommand::Other(other.to_string()),
        }
    }

    /// The lower-cased token as typed by the user.
    pub fn as_str(&self) -> &str {
        match self {
            SlashCommand::Draft => "draft",
            SlashCommand::Summarize => "summarize",
            SlashCommand::Timeline => "timeline",
            SlashCommand::Analyze => "analyze",
            SlashCommand::Search => "search",
            SlashCommand::Translate => "translate",
            SlashCommand::Transcribe => "transcribe",
            SlashCommand::Other(token) => token,
        }
    }

    /// Whether this command maps to a task flow rather than the fallback.
    pub fn is_known(&self) -> bool {
        !matches!(self, SlashCommand::Other(_))
    }

    /// Usage line for help output.
    pub fn usage(&self) -> &'static str {
        match self {
            SlashCommand::Draft => "/draft <request>          Draft a legal petition",
            SlashCommand::Summarize => "/summarize                Summarize the attached document",
            SlashCommand::Timeline => "/timeline <case details>  Build a chronological case timeline",
            SlashCommand::Analyze => "/analyze                  Annotate clauses and suggest redlines",
            SlashCommand::Search => "/search <query>           Search case law (court:, judge:, year:, subject:)",
            SlashCommand::Translate => "/translate to <lang> <t>  Translate text",
            SlashCommand::Transcribe => "/transcribe               Transcribe the attached audio",
            SlashCommand::Other(_) => "",
        }
    }

    /// All known commands in help order.
    pub fn known() -> [SlashCommand; 7] {
        [
            SlashCommand::Draft,
            SlashCommand::Summarize,
            SlashCommand::Timeline,
            SlashCommand::Analyze,
            SlashCommand::Search,
            SlashCommand::Translate,
            SlashCommand::Transcribe,
        ]
    }
}

impl std::fmt::Display for SlashCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}", self.as_str())
    }
}

/// Result of parsing a raw chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMessage {
    /// The command, if the message started with a slash-token.
    pub command: Option<SlashCommand>,
    /// Remainder after the command, or the whole message when there is none.
    pub text: String,
}

/// Split a raw message into command and remainder.
///
/// Never fails: a message without a leading slash-token yields
/// `command = None` and the original message verbatim.
pub fn parse_command(message: &str) -> ParsedMessage {
    match COMMAND_RE.captures(message) {
        Some(caps) => {
            let token = caps[1].to_lowercase();
            let text = caps.get(2).map(|m| m.as_str()).unwrap_or("").to_string();
            ParsedMessage {
                command: Some(SlashCommand::from_token(&token)),
                text,
            }
        }
        None => ParsedMessage {
            command: None,
            text: message.to_string(),
        },
    }
}
