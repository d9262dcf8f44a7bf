//! RSS feed ingestion.
//!
//! The feed is fetched through the retrying [`RetryFetch`] transport and
//! parsed with quick-xml serde derives. A feed body that is not valid XML is
//! fatal (nothing to ingest); a single malformed entry (no link) is skipped
//! with a warning. Relative entry links resolve against the publisher's base
//! origin, entries past the optional cap are ignored, and duplicate URLs
//! collapse to their first occurrence.

use chrono::DateTime;
use quick_xml::de::from_str;
use serde::Deserialize;
use std::error::Error;
use tracing::{info, instrument, warn};
use url::Url;

use crate::config::ScrapeConfig;
use crate::fetch::{FetchOutcome, HttpGet, RetryFetch};
use crate::ingest::{dedup_by_url, Ingestor};
use crate::models::CandidateArticle;

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    title: Option<String>,
    link: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
}

/// Feed-based ingestion strategy.
pub struct FeedIngestor<T> {
    fetcher: RetryFetch<T>,
    feed_url: String,
    base_url: Url,
    max_items: Option<usize>,
}

impl<T> FeedIngestor<T>
where
    T: HttpGet,
{
    pub fn new(fetcher: RetryFetch<T>, config: &ScrapeConfig) -> Self {
        Self {
            fetcher,
            feed_url: config.feed_url.clone(),
            base_url: config.base_url.clone(),
            max_items: config.max_items,
        }
    }
}

impl<T> Ingestor for FeedIngestor<T>
where
    T: HttpGet,
{
    #[instrument(level = "info", skip(self), fields(feed_url = %self.feed_url))]
    async fn discover(&self) -> Result<Vec<CandidateArticle>, Box<dyn Error>> {
        let body = match self.fetcher.fetch(&self.feed_url).await {
            FetchOutcome::Success { body } => body,
            FetchOutcome::NotFound => {
                return Err(format!("feed not found (HTTP 404): {}", self.feed_url).into());
            }
            FetchOutcome::TransientFailure { last_error } => {
                return Err(
                    format!("could not fetch feed {}: {last_error}", self.feed_url).into(),
                );
            }
        };

        let candidates = parse_feed(&body, &self.base_url, self.max_items)?;
        info!(count = candidates.len(), "Discovered feed candidates");
        Ok(candidates)
    }
}

/// Parse a feed body into deduplicated candidates.
///
/// # Errors
///
/// Fails when the body is not a parseable RSS document. Individual entries
/// without a usable link are skipped, not fatal.
pub fn parse_feed(
    xml: &str,
    base_url: &Url,
    max_items: Option<usize>,
) -> Result<Vec<CandidateArticle>, Box<dyn Error>> {
    let rss: Rss = from_str(xml).map_err(|e| format!("parsing feed XML: {e}"))?;

    let cap = max_items.unwrap_or(usize::MAX);
    let mut candidates = Vec::new();
    for item in rss.channel.items.into_iter().take(cap) {
        let link = match item.link.as_deref().map(str::trim) {
            Some(link) if !link.is_empty() => link.to_string(),
            _ => {
                warn!(title = ?item.title, "Feed entry without link; skipping");
                continue;
            }
        };
        let url = match base_url.join(&link) {
            Ok(resolved) => resolved.to_string(),
            Err(e) => {
                warn!(link = %link, error = %e, "Unresolvable feed link; skipping");
                continue;
            }
        };

        candidates.push(CandidateArticle {
            url,
            title: item.title.unwrap_or_default().trim().to_string(),
            published: item.pub_date.as_deref().map(normalize_published),
        });
    }

    Ok(dedup_by_url(candidates))
}

/// Normalize an RFC 2822 `pubDate` to RFC 3339; keep the raw string when the
/// feed uses some other format, so no data is lost in the summary.
fn normalize_published(raw: &str) -> String {
    DateTime::parse_from_rfc2822(raw.trim())
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|_| raw.trim().to_string())
}
