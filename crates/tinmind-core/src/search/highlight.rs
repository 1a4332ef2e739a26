//! Literal, case-insensitive query highlighting.
//!
//! The query is escaped before it becomes a pattern, so characters like `.`,
//! `*` or `(` match themselves. Output is a list of [`Segment`]s rather than
//! markup, which lets each renderer decide how to mark matches without ever
//! injecting raw HTML from the index.

use regex::{Regex, RegexBuilder};
use std::ops::Range;
use tracing::warn;

/// Run of text that is either plain or a query match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub is_match: bool,
}

/// Text split into plain and matched segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlighted {
    segments: Vec<Segment>,
}

impl Highlighted {
    /// Wraps text with no matches.
    pub fn plain(text: &str) -> Self {
        let mut highlighted = Self::default();
        highlighted.push(text, false);
        highlighted
    }

    fn push(&mut self, text: &str, is_match: bool) {
        if !text.is_empty() {
            self.segments.push(Segment {
                text: text.to_string(),
                is_match,
            });
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn has_matches(&self) -> bool {
        self.segments.iter().any(|s| s.is_match)
    }

    /// Reassembles the original text without markers.
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Renders as HTML, wrapping matches in `<mark>` and escaping everything else.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for segment in &self.segments {
            if segment.is_match {
                html.push_str("<mark>");
                html.push_str(&escape_html(&segment.text));
                html.push_str("</mark>");
            } else {
                html.push_str(&escape_html(&segment.text));
            }
        }
        html
    }
}

/// Escapes the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Case-insensitive matcher for one literal query.
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Option<Regex>,
}

impl Highlighter {
    /// Builds a highlighter for `query`. An empty query never matches.
    pub fn new(query: &str) -> Self {
        if query.is_empty() {
            return Self { pattern: None };
        }

        let pattern = RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
            .map_err(|e| warn!("Query too large to highlight: {}", e))
            .ok();

        Self { pattern }
    }

    /// Byte range of the first occurrence of the query in `text`.
    pub fn find(&self, text: &str) -> Option<Range<usize>> {
        self.pattern
            .as_ref()
            .and_then(|p| p.find(text))
            .map(|m| m.range())
    }

    /// Splits `text` around every occurrence of the query.
    pub fn highlight(&self, text: &str) -> Highlighted {
        let Some(pattern) = &self.pattern else {
            return Highlighted::plain(text);
        };

        let mut highlighted = Highlighted::default();
        let mut last = 0;
        for m in pattern.find_iter(text) {
            highlighted.push(&text[last..m.start()], false);
            highlighted.push(m.as_str(), true);
            last = m.end();
        }
        highlighted.push(&text[last..], false);
        highlighted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_marks_every_occurrence() {
        let highlighter = Highlighter::new("fox");
        let result = highlighter.highlight("Fox and fox and FOX");

        assert_eq!(
            result.to_html(),
            "<mark>Fox</mark> and <mark>fox</mark> and <mark>FOX</mark>"
        );
    }

    #[test]
    fn test_highlight_preserves_original_casing() {
        let result = Highlighter::new("RUST").highlight("Learning rust");

        let matched: Vec<&str> = result
            .segments()
            .iter()
            .filter(|s| s.is_match)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(matched, vec!["rust"]);
    }

    #[test]
    fn test_text_without_matches_is_unchanged() {
        let text = "The quick brown fox jumps";
        let result = Highlighter::new("zebra").highlight(text);

        assert!(!result.has_matches());
        assert_eq!(result.plain_text(), text);
        assert_eq!(result.to_html(), text);
    }

    #[test]
    fn test_pattern_metacharacters_are_literal() {
        let highlighter = Highlighter::new("a.b");
        assert!(!highlighter.highlight("axb").has_matches());
        assert!(highlighter.highlight("see a.b here").has_matches());

        for query in ["(x", "[x", "x*", "x+?", "^x$", "x|y", "\\d", "{1}"] {
            let text = format!("before {} after", query);
            let result = Highlighter::new(query).highlight(&text);
            assert!(result.has_matches(), "query {:?} should match itself", query);
        }
    }

    #[test]
    fn test_empty_query_never_matches() {
        let highlighter = Highlighter::new("");
        assert!(highlighter.find("anything").is_none());
        assert_eq!(highlighter.highlight("anything").plain_text(), "anything");
    }

    #[test]
    fn test_html_is_escaped_outside_and_inside_marks() {
        let result = Highlighter::new("<b>").highlight("a <b> & c");
        assert_eq!(result.to_html(), "a <mark>&lt;b&gt;</mark> &amp; c");
    }

    #[test]
    fn test_find_returns_byte_range_of_first_match() {
        let highlighter = Highlighter::new("brown");
        let text = "The quick brown fox, brown again";
        assert_eq!(highlighter.find(text), Some(10..15));
    }

    #[test]
    fn test_multibyte_text_is_split_on_char_boundaries() {
        let result = Highlighter::new("café").highlight("Le CAFÉ du café");
        assert_eq!(result.plain_text(), "Le CAFÉ du café");
        assert_eq!(
            result.segments().iter().filter(|s| s.is_match).count(),
            2
        );
    }
}
