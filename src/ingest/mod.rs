//! Article discovery strategies.
//!
//! Two interchangeable ingestors produce deduplicated absolute article URLs:
//!
//! | Strategy | Module | Method | Notes |
//! |----------|--------|--------|-------|
//! | Feed | [`feed`] | RSS parsing | One candidate per feed entry |
//! | Section pages | [`sections`] | HTML link harvest | Title-only keyword prefilter, never fetches bodies |
//!
//! Both guarantee that no URL is yielded twice within a run (exact match on
//! the resolved absolute URL, order preserving).

pub mod feed;
pub mod sections;

use itertools::Itertools;
use std::error::Error;

use crate::models::CandidateArticle;

/// A finite source of candidate articles.
///
/// `discover` consumes the source once per run; re-discovery means
/// re-invoking the underlying feed or pages.
pub trait Ingestor {
    async fn discover(&self) -> Result<Vec<CandidateArticle>, Box<dyn Error>>;
}

/// Drop candidates whose URL was already yielded earlier, keeping first
/// occurrences in discovery order.
pub(crate) fn dedup_by_url(candidates: Vec<CandidateArticle>) -> Vec<CandidateArticle> {
    candidates
        .into_iter()
        .unique_by(|c| c.url.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(url: &str, title: &str) -> CandidateArticle {
        CandidateArticle {
            url: url.to_string(),
            title: title.to_string(),
            published: None,
        }
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let candidates = vec![
            candidate("https://pub.example/news/1", "first"),
            candidate("https://pub.example/news/2", "second"),
            candidate("https://pub.example/news/1", "duplicate of first"),
        ];
        let unique = dedup_by_url(candidates);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].title, "first");
        assert_eq!(unique[1].title, "second");
    }

    #[test]
    fn test_dedup_is_case_sensitive() {
        let candidates = vec![
            candidate("https://pub.example/News/1", "upper"),
            candidate("https://pub.example/news/1", "lower"),
        ];
        assert_eq!(dedup_by_url(candidates).len(), 2);
    }
}
