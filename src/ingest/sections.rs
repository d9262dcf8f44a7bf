//! Section-page ingestion: a cheaper, title-only discovery strategy.
//!
//! Each configured section page is fetched once and its outgoing links
//! harvested. A link survives when its resolved path follows the publisher's
//! `/news/<numeric-id>` convention, its anchor text is long enough to be a
//! headline rather than a navigation label, and the anchor text itself
//! matches the keyword vocabulary. Article bodies are never fetched here;
//! the anchor text stands in for the title.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use std::error::Error;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::config::ScrapeConfig;
use crate::fetch::{FetchOutcome, HttpGet, RetryFetch};
use crate::ingest::{dedup_by_url, Ingestor};
use crate::keywords::KeywordIndex;
use crate::models::CandidateArticle;

/// Publisher convention for article links.
static ARTICLE_PATH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^/news/\d+").unwrap());

/// Section-page ingestion strategy.
pub struct SectionIngestor<T> {
    fetcher: RetryFetch<T>,
    base_url: Url,
    section_paths: Vec<String>,
    min_title_len: usize,
    index: Arc<KeywordIndex>,
}

impl<T> SectionIngestor<T>
where
    T: HttpGet,
{
    pub fn new(fetcher: RetryFetch<T>, config: &ScrapeConfig, index: Arc<KeywordIndex>) -> Self {
        Self {
            fetcher,
            base_url: config.base_url.clone(),
            section_paths: config.section_paths.clone(),
            min_title_len: config.min_title_len,
            index,
        }
    }
}

impl<T> Ingestor for SectionIngestor<T>
where
    T: HttpGet,
{
    #[instrument(level = "info", skip(self))]
    async fn discover(&self) -> Result<Vec<CandidateArticle>, Box<dyn Error>> {
        let mut candidates = Vec::new();
        let mut fetched_pages = 0usize;

        for path in &self.section_paths {
            let page_url = self.base_url.join(path)?;
            match self.fetcher.fetch(page_url.as_str()).await {
                FetchOutcome::Success { body } => {
                    fetched_pages += 1;
                    let links = harvest_links(&body, &self.base_url, self.min_title_len);
                    debug!(section = %path, links = links.len(), "Harvested section links");
                    // Title-only prefilter: the article body is never fetched
                    // during discovery.
                    candidates.extend(
                        links
                            .into_iter()
                            .filter(|c| !self.index.find_matches(&c.title).is_empty()),
                    );
                }
                FetchOutcome::NotFound => {
                    warn!(section = %path, "Section page not found; skipping");
                }
                FetchOutcome::TransientFailure { last_error } => {
                    warn!(section = %path, error = %last_error, "Section page fetch failed; skipping");
                }
            }
        }

        if fetched_pages == 0 {
            return Err("no section page could be fetched; nothing to ingest".into());
        }

        let candidates = dedup_by_url(candidates);
        info!(count = candidates.len(), "Discovered section candidates");
        Ok(candidates)
    }
}

/// Harvest article links from a section page.
///
/// Keeps anchors whose resolved URL path matches `/news/<digits>` and whose
/// whitespace-normalized text is at least `min_title_len` characters.
pub fn harvest_links(html: &str, base_url: &Url, min_title_len: usize) -> Vec<CandidateArticle> {
    let document = Html::parse_document(html);
    let anchor_selector = Selector::parse("a[href]").unwrap();

    let mut links = Vec::new();
    for element in document.select(&anchor_selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let Ok(resolved) = base_url.join(href) else {
            continue;
        };
        if !ARTICLE_PATH_RE.is_match(resolved.path()) {
            continue;
        }

        let title = element
            .text()
            .collect::<Vec<_>>()
            .join(" ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        if title.chars().count() < min_title_len {
            continue;
        }

        links.push(CandidateArticle {
            url: resolved.to_string(),
            title,
            published: None,
        });
    }
    links
}
