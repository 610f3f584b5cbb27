//! Case law records and search queries.
//!
//! - [`CaseLaw`] — a reported judgment as returned by the legal-search port
//! - [`CaseLawFilters`] — optional court / judge / year / subject filters
//! - [`CaseLawQuery::parse`] — pull `court:` style filters out of free text
//! - [`LegalSearchHit`] — the `{source, content}` pair handed to the model

use serde::{Deserialize, Serialize};

/// Standing of a judgment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseStatus {
    Landmark,
    Recent,
    Overruled,
}

impl CaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::Landmark => "Landmark",
            CaseStatus::Recent => "Recent",
            CaseStatus::Overruled => "Overruled",
        }
    }
}

/// A reported judgment (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseLaw {
    pub id: u32,
    pub title: String,
    pub citation: String,
    pub court: String,
    /// Judgment date as `DD/MM/YYYY`.
    pub date: String,
    pub summary: String,
    pub status: CaseStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub judges: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subjects: Vec<String>,
}

impl CaseLaw {
    /// Year of judgment parsed from the trailing `YYYY` of the date.
    pub fn year(&self) -> Option<u16> {
        self.date.rsplit('/').next()?.trim().parse().ok()
    }

    /// Project into the `{source, content}` shape the model sees.
    pub fn to_hit(&self) -> LegalSearchHit {
        LegalSearchHit {
            source: self.citation.clone(),
            content: self.summary.clone(),
        }
    }
}

/// Result row of the `legal_search` tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalSearchHit {
    pub source: String,
    pub content: String,
}

/// Optional search filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseLawFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub court: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub judge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

impl CaseLawFilters {
    pub fn is_empty(&self) -> bool {
        self.court.is_none() && self.judge.is_none() && self.year.is_none() && self.subject.is_none()
    }

    /// Whether a case passes every filter that is set.
    ///
    /// Text filters are case-insensitive substring matches.
    pub fn matches(&self, case: &CaseLaw) -> bool {
        fn contains(haystack: &str, needle: &str) -> bool {
            haystack.to_lowercase().contains(&needle.to_lowercase())
        }

        if let Some(court) = &self.court
            && !contains(&case.court, court)
        {
            return false;
        }
        if let Some(judge) = &self.judge
            && !case.judges.iter().any(|j| contains(j, judge))
        {
            return false;
        }
        if let Some(year) = self.year
            && case.year() != Some(year)
        {
            return false;
        }
        if let Some(subject) = &self.subject
            && !case.subjects.iter().any(|s| contains(s, subject))
        {
            return false;
        }
        true
    }
}

/// A free-text query plus filters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseLawQuery {
    pub text: String,
    pub filters: CaseLawFilters,
}

impl CaseLawQuery {
    /// Split `court:`, `judge:`, `year:` and `subject:` tokens from the text.
    ///
    /// Unknown `key:value` tokens and years that do not parse stay in the
    /// query text.
    pub fn parse(input: &str) -> Self {
        let mut filters = CaseLawFilters::default();
        let mut words = Vec::new();

        for token in input.split_whitespace() {
            let Some((key, value)) = token.split_once(':') else {
                words.push(token);
                continue;
            };
            if value.is_empty() {
                words.push(token);
                continue;
            }
            match key.to_ascii_lowercase().as_str() {
                "court" => filters.court = Some(value.to_string()),
                "judge" => filters.judge = Some(value.to_string()),
                "subject" => filters.subject = Some(value.to_string()),
                "year" => match value.parse() {
                    Ok(year) => filters.year = Some(year),
                    Err(_) => words.push(token),
                },
                _ => words.push(token),
            }
        }

        Self {
            text: words.join(" "),
            filters,
        }
    }
}
