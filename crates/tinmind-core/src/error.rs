//! Error types for tinmind-core.
//!
//! Index loading is the only fallible operation in the search pipeline;
//! matching and rendering are total over their inputs.

use thiserror::Error;

/// Errors that can occur while loading the search index.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndexLoadError {
    /// The request could not be issued or did not complete
    #[error("Failed to fetch index: {0}")]
    Fetch(String),
    /// The server answered with a non-success status
    #[error("HTTP {status} fetching {url}")]
    HttpStatus { status: u16, url: String },
    /// The response body is not a valid index
    #[error("Failed to parse index: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for IndexLoadError {
    fn from(err: serde_json::Error) -> Self {
        IndexLoadError::Parse(err.to_string())
    }
}

/// Errors detected while attaching the widget to the page.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SetupError {
    /// A required element is not present in the host page
    #[error("Required element #{0} not found in the page")]
    MissingElement(String),
    /// Browser globals (window/document) are unavailable
    #[error("Browser API unavailable")]
    BrowserApiUnavailable,
}

impl From<IndexLoadError> for String {
    fn from(err: IndexLoadError) -> String {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_message() {
        let err = IndexLoadError::HttpStatus {
            status: 404,
            url: "/search_index.json".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404 fetching /search_index.json");
    }

    #[test]
    fn test_json_error_converts_to_parse() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        assert!(matches!(
            IndexLoadError::from(json_err),
            IndexLoadError::Parse(_)
        ));
    }
}
