use dioxus::prelude::*;

use tinmind_core::config::{LOADING_MESSAGE, NO_RESULTS_MESSAGE, RESULTS_ELEMENT_ID};
use tinmind_core::session::PanelContent;

use super::ResultItem;
use crate::components::use_search_session;
use crate::utils::SignalExt;

/// Results dropdown.
///
/// Rebuilt from the session on every change: messages for the loading,
/// error, and no-results states, otherwise the list of hits.
#[component]
pub fn ResultsPanel() -> Element {
    let mut session = use_search_session();

    let (visible, active, content) = {
        let state = session.read();
        (
            state.is_panel_visible(),
            state.active_index(),
            state.content().clone(),
        )
    };

    let body = match content {
        PanelContent::Empty => rsx! {},
        PanelContent::Loading => rsx! {
            p { "{LOADING_MESSAGE}" }
        },
        PanelContent::Error(message) => rsx! {
            p { class: "search-error", "{message}" }
        },
        PanelContent::NoResults => rsx! {
            p { "{NO_RESULTS_MESSAGE}" }
        },
        PanelContent::Results(hits) => rsx! {
            ul { class: "search-results-list",
                for (index, hit) in hits.into_iter().enumerate() {
                    ResultItem {
                        key: "{index}",
                        index,
                        active: active == Some(index),
                        hit,
                    }
                }
            }
        },
    };

    rsx! {
        div {
            id: RESULTS_ELEMENT_ID,
            class: "search-results",
            display: if visible { "block" } else { "none" },
            onmouseenter: move |_| session.mutate(|s| s.on_panel_enter()),
            onmouseleave: move |_| session.mutate(|s| s.on_panel_leave()),
            {body}
        }
    }
}
