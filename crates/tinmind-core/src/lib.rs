//! # Tinmind Core
//!
//! Platform-independent incremental search over a statically generated site
//! index.
//!
//! This crate holds everything the search widget does that does not need a
//! browser, so it can be unit-tested on the host and reused by other
//! frontends.
//!
//! ## Modules
//!
//! - [`index`] - Index model and the one-time loader
//! - [`search`] - Substring matching, snippets, and highlighting
//! - [`navigation`] - Keyboard cursor over rendered results
//! - [`deferred`] - Cancellable blur-to-hide task
//! - [`session`] - Widget state driven by DOM events
//! - [`render`] - HTML rendering of the results panel
//! - [`config`] - Production constants and tunables
//! - [`error`] - Error types for loading and setup

#![forbid(unsafe_code)]

pub mod config;
pub mod deferred;
pub mod error;
pub mod index;
pub mod navigation;
pub mod render;
pub mod search;
pub mod session;

pub use config::SearchConfig;
pub use error::{IndexLoadError, SetupError};
pub use index::{IndexEntry, IndexSource, SearchIndex};
pub use session::{KeyEffect, KeyResponse, PanelContent, SearchSession};
