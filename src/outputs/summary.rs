//! CSV summary of every matched article in a run.
//!
//! Column order is fixed: `url,title,published,keywords,text_file`, with the
//! matched keywords semicolon-joined. The file is rebuilt wholesale each run
//! and reflects only that run's matches. An empty run writes no summary at
//! all — absence, not an empty file.

use csv::Writer;
use serde::Serialize;
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

use crate::config::SUMMARY_FILENAME;
use crate::models::MatchRecord;

/// Flattened CSV row; field order defines the column order.
#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    url: &'a str,
    title: &'a str,
    published: &'a str,
    keywords: String,
    text_file: String,
}

/// Write the run summary, or nothing when there are no records.
///
/// The CSV is built fully in memory, written to a `.tmp` sibling, and
/// renamed into place, so a mid-write failure never leaves a partial or
/// corrupt summary at the final path.
///
/// # Returns
///
/// `Ok(Some(path))` when a summary was written, `Ok(None)` for an empty run.
#[instrument(level = "info", skip(records), fields(records = records.len()))]
pub async fn write_summary(
    output_dir: &Path,
    records: &[MatchRecord],
) -> Result<Option<PathBuf>, Box<dyn Error>> {
    if records.is_empty() {
        info!("No matches this run; summary not written");
        return Ok(None);
    }

    let mut writer = Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(SummaryRow {
            url: &record.url,
            title: &record.title,
            published: record.published.as_deref().unwrap_or(""),
            keywords: record.keywords_joined(),
            text_file: record.text_file.display().to_string(),
        })?;
    }
    let bytes = writer.into_inner()?;

    fs::create_dir_all(output_dir).await?;
    let path = output_dir.join(SUMMARY_FILENAME);
    let tmp_path = output_dir.join(format!("{SUMMARY_FILENAME}.tmp"));
    fs::write(&tmp_path, bytes).await?;
    fs::rename(&tmp_path, &path).await?;

    info!(path = %path.display(), "Wrote summary CSV");
    Ok(Some(path))
}
