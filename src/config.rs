//! Runtime configuration for a scrape run.
//!
//! Everything the pipeline and ingestors need travels in one explicit
//! [`ScrapeConfig`] value built from the CLI. Nothing here is process-global,
//! so tests construct their own configs with injected fakes behind them.

use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::cli::Cli;

/// Identifying user agent with a contact address, sent on every request.
pub const USER_AGENT: &str = "KiniKeywordScraper/0.1 (contact: research@example.org)";

/// Publisher base origin; relative feed links resolve against this.
pub const BASE_URL: &str = "https://www.malaysiakini.com";

/// Section paths scanned by the section-page ingestion strategy.
pub const SECTION_PATHS: &[&str] = &["/en/news", "/en/columns"];

/// Anchor texts shorter than this are treated as navigation labels, not titles.
pub const MIN_TITLE_LEN: usize = 15;

/// Filename of the CSV summary inside the output directory.
pub const SUMMARY_FILENAME: &str = "malaysiakini_keyword_hits.csv";

/// Configuration for one run, passed explicitly into the pipeline.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Publisher base origin.
    pub base_url: Url,
    /// Syndication feed to ingest (feed strategy).
    pub feed_url: String,
    /// Section paths to scan (section strategy).
    pub section_paths: Vec<String>,
    /// User-Agent header value.
    pub user_agent: String,
    /// Per-request timeout.
    pub request_timeout: Duration,
    /// Politeness delay after each processed candidate.
    pub request_delay: Duration,
    /// Optional cap on how many feed entries are scanned, in feed order.
    pub max_items: Option<usize>,
    /// Minimum anchor-text length for section-page links.
    pub min_title_len: usize,
    /// Base output directory for article texts and the summary.
    pub output_dir: PathBuf,
}

impl ScrapeConfig {
    /// Build a config from parsed CLI arguments.
    ///
    /// # Errors
    ///
    /// Fails only if the compiled-in base URL constant is invalid, which is
    /// a programming error surfaced at startup rather than mid-run.
    pub fn from_cli(args: &Cli) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            base_url: Url::parse(BASE_URL)?,
            feed_url: args.feed_url.clone(),
            section_paths: SECTION_PATHS.iter().map(|s| s.to_string()).collect(),
            user_agent: USER_AGENT.to_string(),
            request_timeout: Duration::from_secs(args.timeout_secs),
            request_delay: Duration::from_millis(args.delay_ms),
            max_items: args.max_items,
            min_title_len: MIN_TITLE_LEN,
            output_dir: PathBuf::from(&args.output_dir),
        })
    }
}
