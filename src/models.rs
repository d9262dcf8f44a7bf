//! Core data structures shared across the pipeline.
//!
//! - [`CandidateArticle`]: a discovered URL plus feed metadata, not yet fetched
//! - [`MatchRecord`]: one persisted keyword hit, destined for the CSV summary
//! - [`RunSummary`]: the append-only record list plus per-run counters

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// An article discovered by an ingestor, before any fetching.
///
/// `url` is always absolute (relative feed links are resolved against the
/// publisher's base origin during ingestion). Candidates are transient:
/// produced once per run, consumed once by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateArticle {
    /// Normalized absolute article URL.
    pub url: String,
    /// Title or anchor text the article was discovered under.
    pub title: String,
    /// Publication timestamp as reported by the feed, when present.
    pub published: Option<String>,
}

/// One keyword hit: an article whose rendered text matched the vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    /// The article URL.
    pub url: String,
    /// The article title from ingestion.
    pub title: String,
    /// Publication timestamp, when the feed supplied one.
    pub published: Option<String>,
    /// Matched vocabulary terms, sorted and unique.
    pub keywords: Vec<String>,
    /// Where the normalized article text was written.
    pub text_file: PathBuf,
}

impl MatchRecord {
    /// The matched terms joined for the summary file: `"depression;queer"`.
    pub fn keywords_joined(&self) -> String {
        self.keywords.join(";")
    }
}

/// Accumulated result of one run.
///
/// Records append in processing order; counters cover every candidate that
/// entered the pipeline, whatever terminal state it reached.
#[derive(Debug, Default)]
pub struct RunSummary {
    records: Vec<MatchRecord>,
    /// Candidates that could not be fetched (404 or retries exhausted).
    pub skipped: usize,
    /// Candidates fetched but matching no vocabulary term.
    pub dropped: usize,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a persisted match. Invariant: only called for candidates with
    /// a non-empty keyword match that were written to disk.
    pub fn push_record(&mut self, record: MatchRecord) {
        self.records.push(record);
    }

    /// Number of matched-and-persisted articles.
    pub fn matched(&self) -> usize {
        self.records.len()
    }

    /// The ordered match records for summary output.
    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }
}
