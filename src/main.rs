//! # Kini Corpus
//!
//! A keyword-corpus builder for Malaysiakini: discovers article URLs from
//! the English news RSS feed (or the section pages), fetches each article
//! politely, scans the rendered text for mental-health and LGBT-related
//! vocabulary terms, and saves every hit as a text file plus one row in a
//! CSV summary.
//!
//! ## Usage
//!
//! ```sh
//! kini_corpus -o ./malaysiakini_corpus --max-items 200
//! ```
//!
//! ## Architecture
//!
//! One sequential pipeline per run:
//! 1. **Discovery**: feed entries or section-page links, deduplicated
//! 2. **Fetching**: per-article GET with bounded retries and backoff
//! 3. **Matching**: whole-word scan against the compiled keyword index
//! 4. **Output**: article text files and a CSV summary of all hits

use clap::Parser;
use std::error::Error;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

use kini_corpus::cli::Cli;
use kini_corpus::config::ScrapeConfig;
use kini_corpus::fetch::{ReqwestGetter, RetryFetch};
use kini_corpus::ingest::feed::FeedIngestor;
use kini_corpus::ingest::sections::SectionIngestor;
use kini_corpus::ingest::Ingestor;
use kini_corpus::keywords::KeywordIndex;
use kini_corpus::outputs;
use kini_corpus::pipeline::Pipeline;
use kini_corpus::utils::ensure_writable_dir;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("kini_corpus starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.output_dir, sections = args.sections, "Parsed CLI arguments");
    let config = ScrapeConfig::from_cli(&args)?;

    // Early check: an unusable output directory is fatal before any fetching
    let output_dir = config.output_dir.to_string_lossy().to_string();
    if let Err(e) = ensure_writable_dir(&output_dir).await {
        error!(
            path = %output_dir,
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    // ---- Build the keyword index ----
    let index = Arc::new(KeywordIndex::default_vocabulary()?);
    info!(terms = index.len(), "Compiled keyword index");

    // ---- Discover candidate articles ----
    let transport = ReqwestGetter::new(&config.user_agent, config.request_timeout)?;
    let fetcher = RetryFetch::new(transport);

    let candidates = if args.sections {
        SectionIngestor::new(fetcher.clone(), &config, Arc::clone(&index))
            .discover()
            .await?
    } else {
        FeedIngestor::new(fetcher.clone(), &config).discover().await?
    };
    info!(
        count = candidates.len(),
        strategy = if args.sections { "sections" } else { "feed" },
        "Discovered candidate articles"
    );

    // ---- Fetch, match, persist ----
    let pipeline = Pipeline::new(config.clone(), fetcher, Arc::clone(&index));
    let summary = pipeline.run(candidates).await?;

    match outputs::summary::write_summary(&config.output_dir, summary.records()).await? {
        Some(path) => info!(
            path = %path.display(),
            records = summary.matched(),
            "Summary CSV written"
        ),
        None => info!("No matching articles this run"),
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        matched = summary.matched(),
        skipped = summary.skipped,
        dropped = summary.dropped,
        "Execution complete"
    );

    Ok(())
}
