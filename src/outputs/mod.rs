//! Persistence: per-article text files and the CSV summary index.
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! ├── articles/
//! │   ├── 762983.txt            # normalized text, one file per hit
//! │   └── my-cool-title__.txt
//! └── malaysiakini_keyword_hits.csv
//! ```
//!
//! Persistence failures are fatal to the run: silent data loss is worse than
//! an aborted scrape. The summary is finalized atomically (temp file, then
//! rename), so a failed run never leaves a partial CSV behind.

pub mod summary;
pub mod text;
