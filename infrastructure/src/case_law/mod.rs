//! In-memory case-law catalogue
//!
//! Backs the [`LegalSearchPort`]. Records come from a JSON file (an array of
//! case objects) or from the built-in seed. Ranking is plain keyword
//! scoring: title and citation hits weigh more than subject and summary hits.

mod seed;

pub use seed::seed_cases;

use async_trait::async_trait;
use legalai_application::{LegalSearchError, LegalSearchPort};
use legalai_domain::{CaseLaw, CaseLawFilters};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

const TITLE_WEIGHT: u32 = 3;
const CITATION_WEIGHT: u32 = 5;
const SUBJECT_WEIGHT: u32 = 2;
const SUMMARY_WEIGHT: u32 = 1;

/// Error loading a catalogue file
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read case-law catalogue {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid case-law catalogue {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

pub struct CaseLawCatalog {
    cases: Vec<CaseLaw>,
}

impl CaseLawCatalog {
    pub fn new(cases: Vec<CaseLaw>) -> Self {
        Self { cases }
    }

    pub fn seeded() -> Self {
        Self::new(seed_cases())
    }

    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let path_display = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path_display.clone(),
            source,
        })?;
        let cases: Vec<CaseLaw> = serde_json::from_str(&raw).map_err(|source| {
            CatalogError::Parse {
                path: path_display.clone(),
                source,
            }
        })?;
        info!("Loaded {} case(s) from {}", cases.len(), path_display);
        Ok(Self::new(cases))
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Rank cases against the query.
    ///
    /// An empty query lists every case that passes the filters in catalogue
    /// order; otherwise only cases with at least one keyword hit are kept.
    pub fn rank(&self, query: &str, filters: &CaseLawFilters, limit: usize) -> Vec<CaseLaw> {
        let terms = keywords(query);
        let mut scored: Vec<(u32, &CaseLaw)> = self
            .cases
            .iter()
            .filter(|case| filters.matches(case))
            .map(|case| (score(case, &terms), case))
            .filter(|(score, _)| terms.is_empty() || *score > 0)
            .collect();

        // Stable sort keeps catalogue order among equal scores
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, case)| case.clone())
            .collect()
    }
}

fn keywords(query: &str) -> Vec<String> {
    query
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.len() > 2 || (!w.is_empty() && w.chars().all(|c| c.is_ascii_digit())))
        .map(|w| w.to_lowercase())
        .filter(|w| !matches!(w.as_str(), "the" | "and" | "for" | "vs" | "with"))
        .collect()
}

fn score(case: &CaseLaw, terms: &[String]) -> u32 {
    let title = case.title.to_lowercase();
    let citation = case.citation.to_lowercase();
    let summary = case.summary.to_lowercase();
    let subjects: Vec<String> = case.subjects.iter().map(|s| s.to_lowercase()).collect();

    terms
        .iter()
        .map(|term| {
            let mut s = 0;
            if title.contains(term.as_str()) {
                s += TITLE_WEIGHT;
            }
            if citation.contains(term.as_str()) {
                s += CITATION_WEIGHT;
            }
            if subjects.iter().any(|subject| subject.contains(term.as_str())) {
                s += SUBJECT_WEIGHT;
            }
            if summary.contains(term.as_str()) {
                s += SUMMARY_WEIGHT;
            }
            s
        })
        .sum()
}

#[async_trait]
impl LegalSearchPort for CaseLawCatalog {
    async fn search(
        &self,
        query: &str,
        filters: &CaseLawFilters,
        limit: usize,
    ) -> Result<Vec<CaseLaw>, LegalSearchError> {
        let results = self.rank(query, filters, limit);
        debug!(
            "Catalogue search '{}' matched {} of {} case(s)",
            query,
            results.len(),
            self.cases.len()
        );
        Ok(results)
    }
}
