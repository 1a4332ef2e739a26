//! Fetching the generated search index.
//!
//! The index is a static JSON file next to the site's pages. On the web it is
//! fetched with the browser `fetch()` API; host builds read the same path from
//! the working directory, which is enough for local previews and tests.

use async_trait::async_trait;
use dioxus::logger::tracing::debug;
use tinmind_core::error::IndexLoadError;
use tinmind_core::index::IndexSource;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// [`IndexSource`] backed by the platform's native loading mechanism.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlatformIndexSource;

#[async_trait(?Send)]
impl IndexSource for PlatformIndexSource {
    async fn fetch_index(&self, url: &str) -> Result<String, IndexLoadError> {
        #[cfg(target_arch = "wasm32")]
        {
            fetch_index_web(url).await
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            read_index_file(url).await
        }
    }
}

/// Web implementation: one GET through the global `fetch()`.
#[cfg(target_arch = "wasm32")]
async fn fetch_index_web(url: &str) -> Result<String, IndexLoadError> {
    use js_sys::{Function, Promise, Reflect};
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;

    let global = js_sys::global();
    let fetch_fn = Reflect::get(&global, &JsValue::from_str("fetch"))
        .map_err(|_| IndexLoadError::Fetch("fetch API unavailable".to_string()))?
        .dyn_into::<Function>()
        .map_err(|_| IndexLoadError::Fetch("fetch is not callable".to_string()))?;

    debug!("📥 Fetching search index from {}...", url);

    let promise = fetch_fn
        .call1(&global, &JsValue::from_str(url))
        .map_err(|e| IndexLoadError::Fetch(format!("Fetch call failed: {:?}", e)))?;

    let resp_value = JsFuture::from(Promise::from(promise))
        .await
        .map_err(|e| IndexLoadError::Fetch(format!("Fetch failed: {:?}", e)))?;

    let resp: web_sys::Response = resp_value
        .dyn_into()
        .map_err(|_| IndexLoadError::Fetch("Failed to cast to Response".to_string()))?;

    if !resp.ok() {
        return Err(IndexLoadError::HttpStatus {
            status: resp.status(),
            url: url.to_string(),
        });
    }

    let text = JsFuture::from(
        resp.text()
            .map_err(|e| IndexLoadError::Fetch(format!("Failed to read body: {:?}", e)))?,
    )
    .await
    .map_err(|e| IndexLoadError::Fetch(format!("Failed to await body: {:?}", e)))?;

    let body = text
        .as_string()
        .ok_or_else(|| IndexLoadError::Parse("Response body is not text".to_string()))?;

    debug!("✓ Search index fetched ({} bytes)", body.len());
    Ok(body)
}

/// Host implementation: read the index path relative to the working directory.
#[cfg(not(target_arch = "wasm32"))]
async fn read_index_file(url: &str) -> Result<String, IndexLoadError> {
    let path = url.trim_start_matches('/');
    debug!("📥 Reading search index from {}...", path);

    tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IndexLoadError::HttpStatus {
                status: 404,
                url: url.to_string(),
            }
        } else {
            IndexLoadError::Fetch(format!("Failed to read {}: {}", path, e))
        }
    })
}
