//! The per-article pipeline: fetch → extract → match → persist.
//!
//! Candidates are processed strictly one at a time, in discovery order.
//! Fetch failures (404 or exhausted retries) downgrade to logged skips and
//! the run continues; persistence failures propagate and abort the run. A
//! politeness delay follows every candidate, whatever terminal state it
//! reached — that pause is a rate-limiting contract toward the origin.

use std::error::Error;
use std::sync::Arc;
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};

use crate::config::ScrapeConfig;
use crate::extract::extract_plain_text;
use crate::fetch::{FetchOutcome, HttpGet, RetryFetch};
use crate::keywords::KeywordIndex;
use crate::models::{CandidateArticle, MatchRecord, RunSummary};
use crate::outputs;
use crate::utils::derive_article_id;

/// Orchestrates one run over a list of discovered candidates.
pub struct Pipeline<T> {
    config: ScrapeConfig,
    fetcher: RetryFetch<T>,
    index: Arc<KeywordIndex>,
}

impl<T> Pipeline<T>
where
    T: HttpGet,
{
    pub fn new(config: ScrapeConfig, fetcher: RetryFetch<T>, index: Arc<KeywordIndex>) -> Self {
        Self {
            config,
            fetcher,
            index,
        }
    }

    /// Process every candidate and return the accumulated summary.
    ///
    /// # Errors
    ///
    /// Only persistence failures abort the run; everything per-candidate is
    /// logged and skipped.
    #[instrument(level = "info", skip_all, fields(candidates = candidates.len()))]
    pub async fn run(&self, candidates: Vec<CandidateArticle>) -> Result<RunSummary, Box<dyn Error>> {
        let total = candidates.len();
        let mut summary = RunSummary::new();

        for (i, candidate) in candidates.into_iter().enumerate() {
            info!(
                index = i + 1,
                total,
                url = %candidate.url,
                title = %candidate.title,
                "Fetching article"
            );

            match self.fetcher.fetch(&candidate.url).await {
                FetchOutcome::Success { body } => {
                    self.match_and_persist(candidate, &body, &mut summary)
                        .await?;
                }
                FetchOutcome::NotFound => {
                    warn!(url = %candidate.url, "Article not found; skipping");
                    summary.skipped += 1;
                }
                FetchOutcome::TransientFailure { last_error } => {
                    warn!(
                        url = %candidate.url,
                        error = %last_error,
                        "Could not fetch article; skipping"
                    );
                    summary.skipped += 1;
                }
            }

            sleep(self.config.request_delay).await;
        }

        info!(
            matched = summary.matched(),
            skipped = summary.skipped,
            dropped = summary.dropped,
            "Run finished"
        );
        Ok(summary)
    }

    /// Normalize a fetched body, scan it, and persist on a hit.
    async fn match_and_persist(
        &self,
        candidate: CandidateArticle,
        body: &str,
        summary: &mut RunSummary,
    ) -> Result<(), Box<dyn Error>> {
        let text = extract_plain_text(body);
        let keywords = self.index.find_matches(&text);

        if keywords.is_empty() {
            debug!(url = %candidate.url, "No vocabulary terms matched; dropping");
            summary.dropped += 1;
            return Ok(());
        }

        let id = derive_article_id(&candidate.url);
        let text_file =
            outputs::text::write_article_text(&self.config.output_dir, &id, &text).await?;
        info!(
            url = %candidate.url,
            hits = keywords.len(),
            path = %text_file.display(),
            "Keyword hit; article text saved"
        );

        summary.push_record(MatchRecord {
            url: candidate.url,
            title: candidate.title,
            published: candidate.published,
            keywords,
            text_file,
        });
        Ok(())
    }
}
