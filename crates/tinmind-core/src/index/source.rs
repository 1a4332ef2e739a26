//! Index fetch boundary.
//!
//! The browser frontend implements [`IndexSource`] on top of `fetch()`;
//! tests use [`InMemoryIndexSource`].

use super::SearchIndex;
use crate::error::IndexLoadError;
use tracing::{error, info, instrument};

/// Retrieves the raw index document.
///
/// Implementations return the response body as text; parsing is shared in
/// [`load_index`] so every source reports malformed JSON the same way.
#[async_trait::async_trait(?Send)]
pub trait IndexSource {
    /// Fetches the index body from `url`.
    ///
    /// Network failures map to [`IndexLoadError::Fetch`] and non-success
    /// responses to [`IndexLoadError::HttpStatus`].
    async fn fetch_index(&self, url: &str) -> Result<String, IndexLoadError>;
}

/// Fetches and parses the index.
#[instrument(skip(source))]
pub async fn load_index<S>(source: &S, url: &str) -> Result<SearchIndex, IndexLoadError>
where
    S: IndexSource + ?Sized,
{
    let body = source.fetch_index(url).await.map_err(|e| {
        error!("Error fetching {}: {}", url, e);
        e
    })?;

    let index = SearchIndex::from_json(&body).map_err(|e| {
        error!("Error parsing {}: {}", url, e);
        IndexLoadError::from(e)
    })?;

    info!("Loaded search index: {} entries from {}", index.len(), url);
    Ok(index)
}

/// Index source that serves a fixed response, for tests and embedding.
#[derive(Debug, Clone)]
pub struct InMemoryIndexSource {
    response: Result<String, IndexLoadError>,
}

impl InMemoryIndexSource {
    /// Serves `body` for every request.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            response: Ok(body.into()),
        }
    }

    /// Fails every request with `err`.
    pub fn failing(err: IndexLoadError) -> Self {
        Self { response: Err(err) }
    }
}

#[async_trait::async_trait(?Send)]
impl IndexSource for InMemoryIndexSource {
    async fn fetch_index(&self, _url: &str) -> Result<String, IndexLoadError> {
        self.response.clone()
    }
}
