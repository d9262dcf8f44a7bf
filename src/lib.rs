//! # Kini Corpus
//!
//! Library crate behind the `kini_corpus` binary: builds a keyword-matched
//! news corpus from a single publisher (Malaysiakini). Articles are
//! discovered from the RSS feed or the section pages, fetched with bounded
//! retries, flattened to plain text, scanned against two fixed keyword
//! vocabularies (mental-health and LGBT-related terms), and persisted as one
//! text file per hit plus a CSV summary index.
//!
//! The pieces compose explicitly — no global state:
//!
//! - [`keywords::KeywordIndex`]: the merged vocabularies with whole-word matchers
//! - [`extract::extract_plain_text`]: HTML → collapsed plain text
//! - [`fetch::RetryFetch`]: GET with retries and exponential backoff
//! - [`ingest`]: feed-based and section-page discovery strategies
//! - [`pipeline::Pipeline`]: per-article fetch → match → persist loop
//! - [`outputs`]: article text files and the CSV summary

pub mod cli;
pub mod config;
pub mod extract;
pub mod fetch;
pub mod ingest;
pub mod keywords;
pub mod models;
pub mod outputs;
pub mod pipeline;
pub mod utils;
