//! Helpers for article identifiers and output-directory validation.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fs as stdfs;
use tokio::fs;
use tracing::{info, instrument};
use url::Url;

/// Malaysiakini news URLs carry a numeric article id: `/news/762983`.
static NEWS_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"/news/(\d+)").unwrap());

/// Derive a stable, filesystem-safe identifier from an article URL.
///
/// The numeric id is used when the URL follows the publisher's `/news/<id>`
/// pattern. Otherwise the last non-empty path segment becomes a slug with
/// every character outside alphanumeric/hyphen/underscore replaced by an
/// underscore, one for one. Total: never fails, never returns an empty
/// string (a fully degenerate URL yields `"article"`).
///
/// # Examples
///
/// ```
/// use kini_corpus::utils::derive_article_id;
///
/// assert_eq!(derive_article_id("https://pub.example/news/762983"), "762983");
/// assert_eq!(
///     derive_article_id("https://pub.example/columns/my-cool-title!!"),
///     "my-cool-title__"
/// );
/// ```
pub fn derive_article_id(url: &str) -> String {
    if let Some(caps) = NEWS_ID_RE.captures(url) {
        return caps[1].to_string();
    }

    // Fall back to a slug from the last path segment. Query and fragment are
    // dropped when the URL parses; otherwise the raw string is sluggified.
    let path = Url::parse(url)
        .map(|u| u.path().to_string())
        .unwrap_or_else(|_| url.to_string());
    let segment = path.trim_end_matches('/').rsplit('/').next().unwrap_or("");

    let slug: String = segment
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if slug.is_empty() {
        "article".to_string()
    } else {
        slug
    }
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if needed, then probes it with a throwaway file.
/// Failing here is fatal to the run: if the corpus cannot be written there
/// is no point fetching anything.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    if let Err(e) = fs::create_dir_all(path).await {
        return Err(Box::new(e));
    }
    // Try a small sync write using std fs (simpler error surface)
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Output directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_news_id() {
        assert_eq!(derive_article_id("https://pub.example/news/762983"), "762983");
    }

    #[test]
    fn test_slug_fallback_with_punctuation() {
        assert_eq!(
            derive_article_id("https://pub.example/columns/my-cool-title!!"),
            "my-cool-title__"
        );
    }

    #[test]
    fn test_trailing_slash_ignored() {
        assert_eq!(
            derive_article_id("https://pub.example/columns/some-title/"),
            "some-title"
        );
    }

    #[test]
    fn test_query_string_excluded_from_slug() {
        assert_eq!(
            derive_article_id("https://pub.example/columns/a-title?ref=rss"),
            "a-title"
        );
    }

    #[test]
    fn test_degenerate_url_yields_fallback() {
        assert_eq!(derive_article_id("https://pub.example/"), "article");
    }

    #[test]
    fn test_unparseable_url_is_still_total() {
        assert_eq!(derive_article_id("not a url at all"), "not_a_url_at_all");
    }

    #[test]
    fn test_news_id_wins_over_slug() {
        assert_eq!(
            derive_article_id("https://pub.example/news/123456/with-slug"),
            "123456"
        );
    }

    #[tokio::test]
    async fn test_ensure_writable_dir_creates_missing_dir() {
        let dir = std::env::temp_dir().join("kini_corpus_utils_probe");
        let _ = stdfs::remove_dir_all(&dir);
        let path = dir.to_str().unwrap().to_string();
        assert!(ensure_writable_dir(&path).await.is_ok());
        assert!(dir.is_dir());
        let _ = stdfs::remove_dir_all(&dir);
    }
}
