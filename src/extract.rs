//! HTML to plain-text extraction.
//!
//! The matcher only cares whether a keyword appears anywhere on the rendered
//! page, so extraction is deliberately unfiltered: navigation, footers, and
//! ad copy all stay in. The one exception is non-content elements
//! (`script`, `style`, `noscript`) whose text reflects code rather than
//! editorial content and must never reach the matcher.

use scraper::{Html, Node};

/// Tags whose entire subtree is excluded from extraction.
const NON_CONTENT_TAGS: &[&str] = &["script", "style", "noscript"];

/// Strip markup and return a single whitespace-normalized text string.
///
/// Text nodes are joined with single spaces, every run of whitespace
/// (newlines and tabs included) collapses to one space, and the result is
/// trimmed. Pure function: no network, no disk.
pub fn extract_plain_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let mut parts: Vec<&str> = Vec::new();
    for node in document.tree.root().descendants() {
        if let Node::Text(text) = node.value() {
            let excluded = node.ancestors().any(|ancestor| {
                matches!(ancestor.value(), Node::Element(el)
                    if NON_CONTENT_TAGS.contains(&el.name()))
            });
            if !excluded {
                parts.push(&**text);
            }
        }
    }

    parts
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace_runs() {
        let html = "<html><body><p>a\n\n  b</p></body></html>";
        assert_eq!(extract_plain_text(html), "a b");
    }

    #[test]
    fn test_joins_text_nodes_with_spaces() {
        let html = "<p>first</p><p>second</p>";
        assert_eq!(extract_plain_text(html), "first second");
    }

    #[test]
    fn test_script_content_never_reaches_output() {
        let html = r#"<body><script>var depression = "queer";</script><p>clean</p></body>"#;
        let text = extract_plain_text(html);
        assert_eq!(text, "clean");
    }

    #[test]
    fn test_style_and_noscript_excluded() {
        let html = "<style>.anxiety { color: red }</style><noscript>suicide</noscript><div>body text</div>";
        assert_eq!(extract_plain_text(html), "body text");
    }

    #[test]
    fn test_keeps_navigation_and_footer_text() {
        let html = "<nav>Home News</nav><article>story</article><footer>Contact us</footer>";
        assert_eq!(extract_plain_text(html), "Home News story Contact us");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(extract_plain_text(""), "");
    }

    #[test]
    fn test_trims_leading_and_trailing_whitespace() {
        let html = "<p>  padded  </p>";
        assert_eq!(extract_plain_text(html), "padded");
    }
}
