use serde::{Deserialize, Deserializer, Serialize};

/// One searchable document from the generated index.
///
/// Missing or `null` fields deserialize as empty strings, and an empty field
/// never matches a query.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Page title
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    /// Link target, used verbatim as the result href
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    /// Plain body text
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
}

impl IndexEntry {
    pub fn new(title: impl Into<String>, url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            text: text.into(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Ordered, immutable collection of index entries.
///
/// Entry order is the generator's order and is preserved by matching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchIndex {
    entries: Vec<IndexEntry>,
}

impl SearchIndex {
    /// Creates an empty index (the state before loading and after a failure).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses the index wire format: a JSON array of entries.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<IndexEntry>> for SearchIndex {
    fn from(entries: Vec<IndexEntry>) -> Self {
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index_preserves_order() {
        let json = r#"[
            {"title": "Intro", "url": "/a", "text": "The quick brown fox"},
            {"title": "Setup", "url": "/b", "text": "Install the tool"}
        ]"#;

        let index = SearchIndex::from_json(json).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.entries()[0].title, "Intro");
        assert_eq!(index.entries()[1].url, "/b");
    }

    #[test]
    fn test_null_and_missing_fields_become_empty() {
        let json = r#"[{"title": null, "url": "/a"}]"#;

        let index = SearchIndex::from_json(json).unwrap();
        let entry = &index.entries()[0];
        assert_eq!(entry.title, "");
        assert_eq!(entry.text, "");
        assert_eq!(entry.url, "/a");
    }

    #[test]
    fn test_object_root_is_rejected() {
        assert!(SearchIndex::from_json(r#"{"title": "Intro"}"#).is_err());
    }

    #[test]
    fn test_empty_array_is_empty_index() {
        let index = SearchIndex::from_json("[]").unwrap();
        assert!(index.is_empty());
        assert_eq!(index, SearchIndex::empty());
    }
}
