//! Search widget state.
//!
//! [`SearchSession`] owns everything one search widget mutates: the loaded
//! index, the current query, what the results panel shows, the keyboard
//! cursor, and the pending blur hide. The host forwards DOM events to the
//! `on_*` methods and renders from the accessors; nothing here touches the
//! DOM or the network, so the whole widget can be driven from tests.
//!
//! # Usage
//!
//! ```
//! use tinmind_core::config::SearchConfig;
//! use tinmind_core::index::{IndexEntry, SearchIndex};
//! use tinmind_core::navigation::NavKey;
//! use tinmind_core::session::{KeyEffect, SearchSession};
//!
//! let mut session = SearchSession::new(SearchConfig::default());
//! session.begin_loading("");
//! session.finish_loading(Ok(SearchIndex::from(vec![IndexEntry::new(
//!     "Intro",
//!     "/a",
//!     "The quick brown fox",
//! )])));
//!
//! session.on_input("fox");
//! session.on_key(NavKey::ArrowDown);
//! let response = session.on_key(NavKey::Enter);
//! assert_eq!(response.effect, KeyEffect::Navigate("/a".to_string()));
//! ```

use crate::config::{SearchConfig, LOAD_ERROR_MESSAGE};
use crate::deferred::{DeferredHide, HideTicket};
use crate::error::IndexLoadError;
use crate::index::SearchIndex;
use crate::navigation::{NavAction, NavKey, ResultNavigator};
use crate::search::{search, Query, SearchHit, SearchOutcome};
use tracing::{debug, info, warn};

/// Lifecycle of the one-time index load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexState {
    /// Fetch in flight
    Loading,
    /// Index available
    Ready { entries: usize },
    /// Fetch or parse failed; the index stays empty until reload
    Failed(String),
}

/// What the results panel contains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PanelContent {
    /// Nothing rendered
    #[default]
    Empty,
    /// Index still loading for an early query
    Loading,
    /// Index failed to load
    Error(String),
    /// Query ran and matched nothing
    NoResults,
    /// Matching entries in index order
    Results(Vec<SearchHit>),
}

impl PanelContent {
    /// Rendered result items (empty unless showing results).
    pub fn hits(&self) -> &[SearchHit] {
        match self {
            PanelContent::Results(hits) => hits,
            _ => &[],
        }
    }
}

/// Side effect the host performs after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEffect {
    None,
    /// Scroll the result at this index into view
    ScrollTo(usize),
    /// Navigate the page to this URL
    Navigate(String),
    /// Panel and clear control were hidden
    Dismissed,
}

/// Response to a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyResponse {
    pub effect: KeyEffect,
    /// Whether the host should call `preventDefault` on the event
    pub prevent_default: bool,
}

/// State of one search widget instance.
#[derive(Debug, Clone)]
pub struct SearchSession {
    config: SearchConfig,
    index: SearchIndex,
    index_state: IndexState,
    query: Query,
    content: PanelContent,
    panel_visible: bool,
    clear_visible: bool,
    input_focused: bool,
    navigator: ResultNavigator,
    hide: DeferredHide,
}

impl SearchSession {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            index: SearchIndex::empty(),
            index_state: IndexState::Loading,
            query: Query::default(),
            content: PanelContent::Empty,
            panel_visible: false,
            clear_visible: false,
            input_focused: false,
            navigator: ResultNavigator::default(),
            hide: DeferredHide::default(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn index_state(&self) -> &IndexState {
        &self.index_state
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn content(&self) -> &PanelContent {
        &self.content
    }

    pub fn is_panel_visible(&self) -> bool {
        self.panel_visible
    }

    pub fn is_clear_visible(&self) -> bool {
        self.clear_visible
    }

    pub fn active_index(&self) -> Option<usize> {
        self.navigator.active()
    }

    /// URL of the active result, if any.
    pub fn active_url(&self) -> Option<&str> {
        let index = self.navigator.active()?;
        self.content.hits().get(index).map(|hit| hit.url.as_str())
    }

    fn query_is_searchable(&self) -> bool {
        self.query.char_len() >= self.config.min_query_chars
    }

    // =========================================================================
    // Index loading
    // =========================================================================

    /// Marks the index fetch as started.
    ///
    /// `current_input` is whatever the input already holds (browsers restore
    /// form values on back navigation). A searchable query shows a loading
    /// message until [`finish_loading`](Self::finish_loading) runs.
    pub fn begin_loading(&mut self, current_input: &str) {
        self.index_state = IndexState::Loading;
        self.set_query(current_input);

        if self.query_is_searchable() {
            self.show(PanelContent::Loading);
        } else {
            self.hide_panel();
        }
    }

    /// Stores the fetch result.
    ///
    /// On success a searchable pending query is matched immediately. On
    /// failure the index stays empty and the panel shows the error.
    pub fn finish_loading(&mut self, result: Result<SearchIndex, IndexLoadError>) {
        match result {
            Ok(index) => {
                info!("Search index ready: {} entries", index.len());
                self.index_state = IndexState::Ready {
                    entries: index.len(),
                };
                self.index = index;

                if self.query_is_searchable() {
                    self.refresh_results();
                } else {
                    self.content = PanelContent::Empty;
                    self.hide_panel();
                }
            }
            Err(e) => {
                warn!("Search disabled, index failed to load: {}", e);
                self.index_state = IndexState::Failed(e.to_string());
                self.index = SearchIndex::empty();
                self.show(PanelContent::Error(LOAD_ERROR_MESSAGE.to_string()));
            }
        }
    }

    // =========================================================================
    // Input events
    // =========================================================================

    /// Handles an `input` event with the input's full value.
    pub fn on_input(&mut self, value: &str) {
        self.set_query(value);
        self.refresh_results();
    }

    /// Handles the clear-query control.
    ///
    /// The host should return focus to the input afterwards.
    pub fn on_clear(&mut self) {
        self.set_query("");
        self.content = PanelContent::Empty;
        self.navigator.reset(0);
        self.hide_panel();
    }

    /// Handles a `keydown` on the input.
    pub fn on_key(&mut self, key: NavKey) -> KeyResponse {
        let outcome = self.navigator.handle_key(key, self.panel_visible);

        let effect = match outcome.action {
            NavAction::None => KeyEffect::None,
            NavAction::Moved { to, .. } => KeyEffect::ScrollTo(to),
            NavAction::Activate(index) => match self.content.hits().get(index) {
                Some(hit) => {
                    info!("Navigating to {}", hit.url);
                    KeyEffect::Navigate(hit.url.clone())
                }
                None => KeyEffect::None,
            },
            NavAction::Dismiss => {
                self.hide_panel();
                self.clear_visible = false;
                KeyEffect::Dismissed
            }
        };

        KeyResponse {
            effect,
            prevent_default: outcome.prevent_default,
        }
    }

    // =========================================================================
    // Focus and pointer events
    // =========================================================================

    /// Handles the input gaining focus.
    ///
    /// Cancels a pending hide and re-opens the panel when it still holds
    /// results for a searchable query.
    pub fn on_focus(&mut self) {
        self.input_focused = true;
        self.hide.cancel();

        if self.query_is_searchable() && !self.content.hits().is_empty() {
            self.panel_visible = true;
        }
    }

    /// Handles the input losing focus.
    ///
    /// Returns the ticket to redeem via [`on_hide_elapsed`](Self::on_hide_elapsed)
    /// after `config().hide_delay_ms`.
    pub fn on_blur(&mut self) -> HideTicket {
        self.input_focused = false;
        self.hide.schedule()
    }

    /// Redeems a blur ticket. Returns whether the panel was hidden.
    pub fn on_hide_elapsed(&mut self, ticket: HideTicket) -> bool {
        if self.hide.fire(ticket) {
            debug!("Deferred hide fired");
            self.hide_panel();
            true
        } else {
            false
        }
    }

    /// Handles the pointer entering the results panel.
    pub fn on_panel_enter(&mut self) {
        if self.hide.cancel() {
            debug!("Deferred hide cancelled by pointer");
        }
    }

    /// Handles the pointer leaving the results panel.
    pub fn on_panel_leave(&mut self) {
        if !self.input_focused {
            self.hide_panel();
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn set_query(&mut self, value: &str) {
        self.query = Query::new(value);
        self.clear_visible = !self.query.is_empty();
    }

    fn refresh_results(&mut self) {
        match search(&self.index, &self.query, &self.config) {
            SearchOutcome::BelowMinimum => {
                self.content = PanelContent::Empty;
                self.navigator.reset(0);
                self.hide_panel();
            }
            SearchOutcome::Matches(hits) if hits.is_empty() => {
                self.navigator.reset(0);
                self.show(PanelContent::NoResults);
            }
            SearchOutcome::Matches(hits) => {
                self.navigator.reset(hits.len());
                self.show(PanelContent::Results(hits));
            }
        }
    }

    fn show(&mut self, content: PanelContent) {
        if !matches!(content, PanelContent::Results(_)) {
            self.navigator.reset(0);
        }
        self.content = content;
        self.panel_visible = true;
    }

    fn hide_panel(&mut self) {
        self.panel_visible = false;
        self.navigator.clear();
    }
}
