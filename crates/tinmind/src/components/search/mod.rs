//! Search input, results dropdown, and result items.

mod result_item;
mod results_panel;
mod search_box;

pub use result_item::{HighlightedText, ResultItem};
pub use results_panel::ResultsPanel;
pub use search_box::SearchBox;
