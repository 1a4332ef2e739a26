//! Browser side effects behind platform-neutral functions.
//!
//! The search session decides *what* should happen (scroll, navigate, hide
//! later); this module performs it:
//!
//! - **Web**: `web_sys` calls against the live document
//! - **Host**: logged no-ops and `tokio` timers, so components compile and
//!   run outside a browser

use dioxus::logger::tracing::debug;
use tinmind_core::error::SetupError;

/// Element id of the rendered result at `index`.
pub fn result_element_id(index: usize) -> String {
    format!("search-result-{}", index)
}

/// Sleeps for `ms` milliseconds without blocking the event loop.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

/// Sleeps for `ms` milliseconds without blocking the event loop.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}

/// Reads the page's `SITE_BASE_URL` global, if set to a string.
#[cfg(target_arch = "wasm32")]
pub fn site_base_url() -> Option<String> {
    use js_sys::Reflect;
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    Reflect::get(&window, &JsValue::from_str("SITE_BASE_URL"))
        .ok()?
        .as_string()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn site_base_url() -> Option<String> {
    None
}

/// Verifies the host page provides the element with `id`.
#[cfg(target_arch = "wasm32")]
pub fn require_element(id: &str) -> Result<(), SetupError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(SetupError::BrowserApiUnavailable)?;

    document
        .get_element_by_id(id)
        .map(|_| ())
        .ok_or_else(|| SetupError::MissingElement(id.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn require_element(_id: &str) -> Result<(), SetupError> {
    Err(SetupError::BrowserApiUnavailable)
}

/// Performs full-page navigation to `url`.
#[cfg(target_arch = "wasm32")]
pub fn navigate_to(url: &str) {
    use dioxus::logger::tracing::error;

    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(url) {
        error!("Navigation to {} failed: {:?}", url, e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn navigate_to(url: &str) {
    debug!("Navigation requested: {}", url);
}

/// Scrolls the result at `index` into view within the panel.
#[cfg(target_arch = "wasm32")]
pub fn scroll_result_into_view(index: usize) {
    use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(&result_element_id(index)))
    else {
        debug!("Result {} not rendered, skipping scroll", index);
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_block(ScrollLogicalPosition::Nearest);
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_result_into_view(index: usize) {
    debug!("Scroll requested for result {}", index);
}

/// Moves keyboard focus to the element with `id`.
#[cfg(target_arch = "wasm32")]
pub fn focus_element(id: &str) {
    use wasm_bindgen::JsCast;

    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok());

    if let Some(element) = element {
        if let Err(e) = element.focus() {
            debug!("Focus on #{} failed: {:?}", id, e);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn focus_element(id: &str) {
    debug!("Focus requested for #{}", id);
}
