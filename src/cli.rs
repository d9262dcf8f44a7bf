//! Command-line interface for the corpus scraper.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Arguments can be provided via command-line flags or environment variables.

use clap::Parser;

/// Command-line arguments for the corpus scraper.
///
/// # Examples
///
/// ```sh
/// # Default run: RSS ingestion into ./malaysiakini_corpus
/// kini_corpus
///
/// # Scan only the first 100 feed entries, custom output directory
/// kini_corpus -o ./corpus --max-items 100
///
/// # Cheaper title-only discovery from the section pages
/// kini_corpus --sections
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Base output directory for article texts and the CSV summary
    #[arg(short, long, default_value = "malaysiakini_corpus")]
    pub output_dir: String,

    /// Syndication feed URL to ingest
    #[arg(
        long,
        env = "KINI_FEED_URL",
        default_value = "https://www.malaysiakini.com/rss/en/news.rss"
    )]
    pub feed_url: String,

    /// Discover articles from the section pages instead of the RSS feed
    #[arg(long)]
    pub sections: bool,

    /// Limit how many feed entries are scanned (feed order)
    #[arg(long)]
    pub max_items: Option<usize>,

    /// Politeness delay between article requests, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub delay_ms: u64,

    /// Per-request timeout, in seconds
    #[arg(long, default_value_t = 15)]
    pub timeout_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["kini_corpus"]);
        assert_eq!(cli.output_dir, "malaysiakini_corpus");
        assert!(cli.feed_url.ends_with("/rss/en/news.rss"));
        assert!(!cli.sections);
        assert_eq!(cli.max_items, None);
        assert_eq!(cli.delay_ms, 1000);
        assert_eq!(cli.timeout_secs, 15);
    }

    #[test]
    fn test_cli_sections_flag() {
        let cli = Cli::parse_from(["kini_corpus", "--sections", "-o", "/tmp/out"]);
        assert!(cli.sections);
        assert_eq!(cli.output_dir, "/tmp/out");
    }
}
