//! Per-article text output.

use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, instrument};

/// Subdirectory of the output dir holding one `.txt` file per matched article.
pub const ARTICLES_SUBDIR: &str = "articles";

/// Write the normalized text of one matched article.
///
/// The filename is the derived article id plus `.txt`; a repeated id (same
/// URL re-scraped) overwrites rather than duplicates.
///
/// # Errors
///
/// Any filesystem error is returned as-is; the caller treats it as fatal.
#[instrument(level = "debug", skip(text), fields(id = %id))]
pub async fn write_article_text(
    output_dir: &Path,
    id: &str,
    text: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let articles_dir = output_dir.join(ARTICLES_SUBDIR);
    fs::create_dir_all(&articles_dir).await?;

    let path = articles_dir.join(format!("{id}.txt"));
    fs::write(&path, text).await?;
    debug!(path = %path.display(), bytes = text.len(), "Wrote article text");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("kini_corpus_{name}"));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[tokio::test]
    async fn test_writes_text_under_articles_subdir() {
        let dir = scratch_dir("text_write");
        let path = write_article_text(&dir, "762983", "mental health coverage")
            .await
            .unwrap();
        assert_eq!(path, dir.join("articles").join("762983.txt"));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "mental health coverage"
        );
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_repeated_id_overwrites() {
        let dir = scratch_dir("text_overwrite");
        write_article_text(&dir, "1", "old").await.unwrap();
        let path = write_article_text(&dir, "1", "new").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
        let _ = std::fs::remove_dir_all(&dir);
    }
}
