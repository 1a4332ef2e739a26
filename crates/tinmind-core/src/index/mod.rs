//! Search index model and loading.
//!
//! The index is a JSON array of `{title, url, text}` objects produced by the
//! site generator. It is fetched once per page view through an
//! [`IndexSource`] and is read-only afterwards.

mod source;
mod types;

pub use source::{load_index, InMemoryIndexSource, IndexSource};
pub use types::{IndexEntry, SearchIndex};
