//! Tinmind - incremental search for statically generated sites.
//!
//! A WebAssembly search widget that mounts into a generated page, fetches the
//! site's `search_index.json` once, and filters it as the user types, with a
//! keyboard-navigable results dropdown.
//!
//! # Architecture
//!
//! - **Core** (`tinmind-core`): matching, snippets, highlighting, keyboard
//!   cursor, and the [`SearchSession`](tinmind_core::SearchSession) state
//! - **Components**: Dioxus UI forwarding DOM events into the session
//! - **Index source**: `fetch()` on the web, file reads on the host
//! - **Platform**: scrolling, navigation, focus, and timers
//!
//! # Page Contract
//!
//! The host page provides `<div id="search-root">`, and may set a
//! `SITE_BASE_URL` global when the site is not served from the domain root.

#![forbid(unsafe_code)]

pub mod components;
pub mod index_source;
pub mod platform;
pub mod utils;
