//! String utilities for the domain layer.

/// Truncate a string for log previews, appending `...` when shortened.
///
/// `max_len` is measured in bytes; the cut always lands on a character
/// boundary so multi-byte scripts (Devanagari, Tamil) stay valid UTF-8.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut end = max_len.saturating_sub(3).min(s.len());
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}
