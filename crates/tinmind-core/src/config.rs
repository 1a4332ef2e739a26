//! Production configuration constants.
//!
//! These values define how the search widget behaves on a generated site:
//! where the index lives, how long queries must be before matching, how wide
//! snippets are, and which element ids the widget renders.
//!
//! # Usage
//!
//! ```
//! use tinmind_core::config::{SearchConfig, MIN_QUERY_CHARS};
//!
//! let config = SearchConfig::default().with_site_base_url(Some("/docs"));
//! assert_eq!(config.index_url(), "/docs/search_index.json");
//! assert_eq!(config.min_query_chars, MIN_QUERY_CHARS);
//! ```

use serde::Deserialize;

// =============================================================================
// Matching
// =============================================================================

/// Minimum trimmed query length (in characters) before any matching happens.
///
/// Shorter queries hide the results panel entirely.
pub const MIN_QUERY_CHARS: usize = 2;

/// Width of a snippet window in characters, not counting ellipses.
pub const SNIPPET_CHARS: usize = 150;

/// Marker added where a snippet was cut from a longer body.
pub const ELLIPSIS: &str = "...";

// =============================================================================
// Timing
// =============================================================================

/// Delay between the input losing focus and the panel hiding.
///
/// Long enough for a pointer click on a result to land first.
pub const HIDE_DELAY_MS: u32 = 150;

// =============================================================================
// Index location
// =============================================================================

/// File name of the generated index, relative to the site base URL.
pub const INDEX_FILE_NAME: &str = "search_index.json";

/// Site base URL value meaning "relative to the current page".
const CURRENT_DIR_BASE: &str = ".";

// =============================================================================
// DOM boundary
// =============================================================================

/// Host element the widget mounts into.
pub const ROOT_ELEMENT_ID: &str = "search-root";

/// Text input carrying the query.
pub const INPUT_ELEMENT_ID: &str = "search-input";

/// Results dropdown container.
pub const RESULTS_ELEMENT_ID: &str = "search-results-container";

/// Optional clear-query button.
pub const CLEAR_BUTTON_ELEMENT_ID: &str = "search-clear-btn";

/// Class applied to the keyboard-selected result.
pub const ACTIVE_RESULT_CLASS: &str = "active-search-result";

/// Class of the result title element.
pub const RESULT_TITLE_CLASS: &str = "search-result-title";

/// Class of the result snippet element.
pub const RESULT_SNIPPET_CLASS: &str = "search-result-snippet";

// =============================================================================
// Messages
// =============================================================================

pub const LOADING_MESSAGE: &str = "Loading search...";
pub const NO_RESULTS_MESSAGE: &str = "No results found. Try different keywords or check your spelling.";
pub const LOAD_ERROR_MESSAGE: &str = "Error loading search data. Please try again later.";

/// Tunable search settings.
///
/// Defaults match the production constants above. Deserializable so a page
/// can override values through an embedded JSON blob.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Site base URL prefixed to the index file (empty for site root)
    pub site_base_url: String,
    /// Minimum query length before matching
    pub min_query_chars: usize,
    /// Snippet window width in characters
    pub snippet_chars: usize,
    /// Blur-to-hide delay in milliseconds
    pub hide_delay_ms: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            site_base_url: String::new(),
            min_query_chars: MIN_QUERY_CHARS,
            snippet_chars: SNIPPET_CHARS,
            hide_delay_ms: HIDE_DELAY_MS,
        }
    }
}

impl SearchConfig {
    /// Sets the site base URL from the page's `SITE_BASE_URL` global.
    ///
    /// `None` and `"."` both mean the index sits at the site root.
    pub fn with_site_base_url(mut self, base: Option<&str>) -> Self {
        self.site_base_url = match base {
            Some(base) if base != CURRENT_DIR_BASE => base.trim_end_matches('/').to_string(),
            _ => String::new(),
        };
        self
    }

    /// Resolves the URL the index is fetched from.
    pub fn index_url(&self) -> String {
        format!("{}/{}", self.site_base_url, INDEX_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_index_url_is_site_root() {
        assert_eq!(SearchConfig::default().index_url(), "/search_index.json");
    }

    #[test]
    fn test_current_dir_base_is_ignored() {
        let config = SearchConfig::default().with_site_base_url(Some("."));
        assert_eq!(config.index_url(), "/search_index.json");
    }

    #[test]
    fn test_base_url_is_prefixed() {
        let config = SearchConfig::default().with_site_base_url(Some("/v2.1/"));
        assert_eq!(config.index_url(), "/v2.1/search_index.json");

        let config = SearchConfig::default().with_site_base_url(Some("https://example.com/docs"));
        assert_eq!(
            config.index_url(),
            "https://example.com/docs/search_index.json"
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: SearchConfig = serde_json::from_str(r#"{"hide_delay_ms": 300}"#).unwrap();
        assert_eq!(config.hide_delay_ms, 300);
        assert_eq!(config.min_query_chars, MIN_QUERY_CHARS);
        assert_eq!(config.snippet_chars, SNIPPET_CHARS);
    }
}
