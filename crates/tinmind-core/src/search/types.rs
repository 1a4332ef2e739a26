use super::highlight::Highlighted;

/// A user query, trimmed and pre-lowered for matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    text: String,
    lowered: String,
}

impl Query {
    /// Builds a query from raw input text.
    pub fn new(input: &str) -> Self {
        let text = input.trim().to_string();
        let lowered = text.to_lowercase();
        Self { text, lowered }
    }

    /// Trimmed query as typed.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Lower-cased query used by the containment predicate.
    pub fn lowered(&self) -> &str {
        &self.lowered
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// One matching index entry, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    /// Position of the entry in the index
    pub entry_index: usize,
    /// Link target
    pub url: String,
    /// Title with query occurrences marked
    pub title: Highlighted,
    /// Body excerpt with query occurrences marked (absent for empty bodies)
    pub snippet: Option<Highlighted>,
}

/// Result of running a query against the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Query is shorter than the minimum; nothing was matched
    BelowMinimum,
    /// Matching entries in index order (possibly none)
    Matches(Vec<SearchHit>),
}

impl SearchOutcome {
    /// Hits, or an empty slice when no matching ran.
    pub fn hits(&self) -> &[SearchHit] {
        match self {
            SearchOutcome::BelowMinimum => &[],
            SearchOutcome::Matches(hits) => hits,
        }
    }
}
