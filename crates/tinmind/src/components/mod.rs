//! UI components for the Tinmind search widget.
//!
//! # Context Providers
//!
//! [`App`] owns one [`SearchSession`] in a signal and provides it to the
//! component tree:
//!
//! ```ignore
//! let mut session = use_search_session();
//! session.mutate(|s| s.on_input("fox"));
//! ```

pub mod search;

pub use search::{ResultsPanel, SearchBox};

use crate::index_source::PlatformIndexSource;
use crate::platform;
use crate::utils::SignalExt;
use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use tinmind_core::config::SearchConfig;
use tinmind_core::index::load_index;
use tinmind_core::session::SearchSession;

/// Search session context provider
pub fn use_search_session() -> Signal<SearchSession> {
    use_context::<Signal<SearchSession>>()
}

/// Root of the widget: owns the session and loads the index once.
#[component]
pub fn App() -> Element {
    let config =
        use_hook(|| SearchConfig::default().with_site_base_url(platform::site_base_url().as_deref()));

    let session = use_signal({
        let config = config.clone();
        move || SearchSession::new(config)
    });
    use_context_provider(|| session);

    // One fetch per page view; completion is delivered back into the session.
    let mut session_signal = session;
    use_hook(move || {
        let url = config.index_url();
        spawn(async move {
            session_signal.mutate(|s| s.begin_loading(""));

            let result = load_index(&PlatformIndexSource, &url).await;
            match &result {
                Ok(index) => info!("🔎 Search ready: {} pages indexed", index.len()),
                Err(e) => error!("Error fetching or parsing {}: {}", url, e),
            }

            session_signal.mutate(|s| s.finish_loading(result));
        });
    });

    rsx! {
        SearchBox {}
    }
}
