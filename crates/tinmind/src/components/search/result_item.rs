use dioxus::prelude::*;

use tinmind_core::config::{ACTIVE_RESULT_CLASS, RESULT_SNIPPET_CLASS, RESULT_TITLE_CLASS};
use tinmind_core::search::{Highlighted, SearchHit};

use crate::platform::result_element_id;

/// One result: a link wrapping the highlighted title, then the snippet.
#[component]
pub fn ResultItem(index: usize, active: bool, hit: SearchHit) -> Element {
    let class = if active { ACTIVE_RESULT_CLASS } else { "" };

    rsx! {
        li { id: result_element_id(index), class: "{class}",
            a { href: "{hit.url}",
                div { class: RESULT_TITLE_CLASS,
                    HighlightedText { text: hit.title.clone() }
                }
            }
            if let Some(snippet) = hit.snippet.clone() {
                p { class: RESULT_SNIPPET_CLASS,
                    HighlightedText { text: snippet }
                }
            }
        }
    }
}

/// Renders matched segments inside `<mark>`, the rest as plain text.
#[component]
pub fn HighlightedText(text: Highlighted) -> Element {
    rsx! {
        for segment in text.segments().iter().cloned() {
            if segment.is_match {
                mark { "{segment.text}" }
            } else {
                "{segment.text}"
            }
        }
    }
}
