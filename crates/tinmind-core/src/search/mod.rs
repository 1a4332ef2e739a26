//! Query matching, snippeting, and highlighting.
//!
//! # Usage
//!
//! ```
//! use tinmind_core::config::SearchConfig;
//! use tinmind_core::index::{IndexEntry, SearchIndex};
//! use tinmind_core::search::{search, Query};
//!
//! let index = SearchIndex::from(vec![IndexEntry::new(
//!     "Intro",
//!     "/a",
//!     "The quick brown fox jumps",
//! )]);
//!
//! let outcome = search(&index, &Query::new("fox"), &SearchConfig::default());
//! let hit = &outcome.hits()[0];
//! assert!(hit.snippet.as_ref().unwrap().to_html().contains("<mark>fox</mark>"));
//! ```

pub mod highlight;
pub mod matcher;
pub mod snippet;
pub mod types;

pub use highlight::{Highlighted, Highlighter, Segment};
pub use matcher::{entry_matches, search};
pub use types::{Query, SearchHit, SearchOutcome};
