use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use tinmind_core::config::{CLEAR_BUTTON_ELEMENT_ID, INPUT_ELEMENT_ID};
use tinmind_core::navigation::NavKey;
use tinmind_core::session::KeyEffect;

use super::ResultsPanel;
use crate::components::use_search_session;
use crate::platform;
use crate::utils::SignalExt;

/// Search input with clear button and the results dropdown.
///
/// Every DOM event is forwarded to the session; the only state kept here is
/// the raw input value the `<input>` is bound to.
#[component]
pub fn SearchBox() -> Element {
    let mut session = use_search_session();
    let mut input_value = use_signal(String::new);

    let handle_input = move |evt: FormEvent| {
        let value = evt.value();
        session.mutate(|s| s.on_input(&value));
        input_value.set(value);
    };

    let handle_keydown = move |evt: KeyboardEvent| {
        let Some(key) = NavKey::from_key_name(&evt.key().to_string()) else {
            return;
        };

        let response = session.mutate(|s| s.on_key(key));
        if response.prevent_default {
            evt.prevent_default();
        }

        match response.effect {
            KeyEffect::ScrollTo(index) => platform::scroll_result_into_view(index),
            KeyEffect::Navigate(url) => platform::navigate_to(&url),
            KeyEffect::Dismissed => debug!("Search panel dismissed"),
            KeyEffect::None => {}
        }
    };

    let handle_blur = move |_: FocusEvent| {
        let ticket = session.mutate(|s| s.on_blur());
        let delay_ms = session.peek().config().hide_delay_ms;

        spawn(async move {
            platform::sleep_ms(delay_ms).await;
            session.mutate(|s| s.on_hide_elapsed(ticket));
        });
    };

    let handle_clear = move |_: MouseEvent| {
        session.mutate(|s| s.on_clear());
        input_value.set(String::new());
        platform::focus_element(INPUT_ELEMENT_ID);
    };

    let clear_display = if session.read().is_clear_visible() {
        "inline"
    } else {
        "none"
    };

    rsx! {
        div { class: "search-box",
            input {
                id: INPUT_ELEMENT_ID,
                class: "search-input",
                r#type: "search",
                placeholder: "Search…",
                autocomplete: "off",
                value: "{input_value}",
                oninput: handle_input,
                onkeydown: handle_keydown,
                onfocus: move |_| session.mutate(|s| s.on_focus()),
                onblur: handle_blur,
            }
            button {
                id: CLEAR_BUTTON_ELEMENT_ID,
                class: "search-clear-btn",
                r#type: "button",
                aria_label: "Clear search",
                display: clear_display,
                onclick: handle_clear,
                "×"
            }
            ResultsPanel {}
        }
    }
}
