//! Argument parsing for `/translate`.

use crate::core::error::DomainError;
use std::sync::LazyLock;

use regex::Regex;

static TRANSLATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(to\s*)?([A-Za-z0-9_]+)\s*(.*)").expect("valid translate regex")
});

const TRANSLATE_USAGE: &str = "Invalid translate command. Use /translate to <language> <text>";

/// Target language and text extracted from `/translate to <language> <text>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateArgs {
    pub target_language: String,
    pub text: String,
}

/// Parse the remainder of a `/translate` command.
///
/// The leading `to` is optional (`/translate hindi Good morning` works too).
/// Fails only when no language token can be found; the text may be empty.
pub fn parse_translate_args(text: &str) -> Result<TranslateArgs, DomainError> {
    let caps = TRANSLATE_RE
        .captures(text)
        .ok_or_else(|| DomainError::InvalidCommandSyntax(TRANSLATE_USAGE.to_string()))?;

    let target_language = caps[2].to_string();
    let body = caps.get(3).map(|m| m.as_str().trim()).unwrap_or("");

    Ok(TranslateArgs {
        target_language,
        text: body.to_string(),
    })
}
