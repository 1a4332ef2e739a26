//! Substring filtering of the index.
//!
//! An entry matches when the lower-cased query is contained in its
//! lower-cased title or body. There is no scoring; hits keep index order.

use super::highlight::Highlighter;
use super::snippet::build_snippet;
use super::types::{Query, SearchHit, SearchOutcome};
use crate::config::SearchConfig;
use crate::index::{IndexEntry, SearchIndex};
use instant::Instant;
use tracing::debug;

/// Containment predicate over title and body.
///
/// `lowered_query` must already be lower-cased.
pub fn entry_matches(entry: &IndexEntry, lowered_query: &str) -> bool {
    let contains = |field: &str| !field.is_empty() && field.to_lowercase().contains(lowered_query);
    contains(&entry.title) || contains(&entry.text)
}

/// Runs `query` against `index`.
///
/// Queries shorter than `config.min_query_chars` skip matching entirely.
pub fn search(index: &SearchIndex, query: &Query, config: &SearchConfig) -> SearchOutcome {
    if query.char_len() < config.min_query_chars {
        return SearchOutcome::BelowMinimum;
    }

    let start = Instant::now();
    let highlighter = Highlighter::new(query.as_str());

    let hits: Vec<SearchHit> = index
        .entries()
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry_matches(entry, query.lowered()))
        .map(|(entry_index, entry)| build_hit(entry_index, entry, query, &highlighter, config))
        .collect();

    debug!(
        "Matched '{}': {} of {} entries in {:.2}ms",
        query.as_str(),
        hits.len(),
        index.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    SearchOutcome::Matches(hits)
}

fn build_hit(
    entry_index: usize,
    entry: &IndexEntry,
    query: &Query,
    highlighter: &Highlighter,
    config: &SearchConfig,
) -> SearchHit {
    let match_start = highlighter.find(&entry.text).map(|range| range.start);
    let snippet = build_snippet(
        &entry.text,
        match_start,
        query.char_len(),
        config.snippet_chars,
    )
    .map(|text| highlighter.highlight(&text));

    SearchHit {
        entry_index,
        url: entry.url.clone(),
        title: highlighter.highlight(&entry.title),
        snippet,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> SearchIndex {
        SearchIndex::from(vec![
            IndexEntry::new("Intro", "/a", "The quick brown fox jumps"),
            IndexEntry::new("Rust Guide", "/b", "Ownership and borrowing"),
            IndexEntry::new("Foxes", "/c", ""),
            IndexEntry::new("Misc", "/d", "Nothing relevant here"),
        ])
    }

    fn urls(outcome: &SearchOutcome) -> Vec<&str> {
        outcome.hits().iter().map(|h| h.url.as_str()).collect()
    }

    #[test]
    fn test_short_query_skips_matching() {
        let config = SearchConfig::default();
        for input in ["", "f", "  f  ", "\t"] {
            let outcome = search(&sample_index(), &Query::new(input), &config);
            assert_eq!(outcome, SearchOutcome::BelowMinimum, "input {:?}", input);
        }
    }

    #[test]
    fn test_matches_title_or_body_in_index_order() {
        let outcome = search(&sample_index(), &Query::new("FOX"), &SearchConfig::default());
        assert_eq!(urls(&outcome), vec!["/a", "/c"]);
    }

    #[test]
    fn test_query_is_trimmed() {
        let outcome = search(
            &sample_index(),
            &Query::new("   rust  "),
            &SearchConfig::default(),
        );
        assert_eq!(urls(&outcome), vec!["/b"]);
    }

    #[test]
    fn test_no_matches_is_empty_not_below_minimum() {
        let outcome = search(&sample_index(), &Query::new("zebra"), &SearchConfig::default());
        assert_eq!(outcome, SearchOutcome::Matches(vec![]));
    }

    #[test]
    fn test_empty_index_yields_no_hits() {
        let outcome = search(
            &SearchIndex::empty(),
            &Query::new("fox"),
            &SearchConfig::default(),
        );
        assert!(outcome.hits().is_empty());
    }

    #[test]
    fn test_title_only_match_has_unhighlighted_head_snippet() {
        let index = SearchIndex::from(vec![IndexEntry::new(
            "Fox facts",
            "/f",
            "Animals of the forest",
        )]);
        let outcome = search(&index, &Query::new("fox"), &SearchConfig::default());

        let hit = &outcome.hits()[0];
        assert!(hit.title.has_matches());
        let snippet = hit.snippet.as_ref().unwrap();
        assert!(!snippet.has_matches());
        assert_eq!(snippet.plain_text(), "Animals of the forest");
    }

    #[test]
    fn test_empty_body_has_no_snippet() {
        let outcome = search(&sample_index(), &Query::new("foxes"), &SearchConfig::default());
        assert_eq!(outcome.hits()[0].snippet, None);
    }

    #[test]
    fn test_hit_records_entry_position() {
        let outcome = search(&sample_index(), &Query::new("nothing"), &SearchConfig::default());
        assert_eq!(outcome.hits()[0].entry_index, 3);
    }

    #[test]
    fn test_min_query_chars_is_configurable() {
        let config = SearchConfig {
            min_query_chars: 4,
            ..SearchConfig::default()
        };
        let outcome = search(&sample_index(), &Query::new("fox"), &config);
        assert_eq!(outcome, SearchOutcome::BelowMinimum);
    }

    #[test]
    fn test_entry_matches_ignores_empty_fields() {
        let entry = IndexEntry::new("", "/x", "");
        assert!(!entry_matches(&entry, "ab"));
    }
}
