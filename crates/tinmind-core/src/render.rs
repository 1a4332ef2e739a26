//! HTML rendering of the results panel.
//!
//! Produces the same markup the browser frontend builds with components, for
//! hosts that only need a string (server-side previews, tests). Every value
//! from the index is escaped; only `<mark>` comes from highlighting.

use crate::config::{ACTIVE_RESULT_CLASS, RESULT_SNIPPET_CLASS, RESULT_TITLE_CLASS};
use crate::config::{LOADING_MESSAGE, NO_RESULTS_MESSAGE};
use crate::search::highlight::escape_html;
use crate::search::SearchHit;
use crate::session::{PanelContent, SearchSession};

/// Renders panel content with the item at `active` marked.
pub fn render_panel_html(content: &PanelContent, active: Option<usize>) -> String {
    match content {
        PanelContent::Empty => String::new(),
        PanelContent::Loading => format!("<p>{}</p>", LOADING_MESSAGE),
        PanelContent::Error(message) => {
            format!("<p class=\"search-error\">{}</p>", escape_html(message))
        }
        PanelContent::NoResults => format!("<p>{}</p>", NO_RESULTS_MESSAGE),
        PanelContent::Results(hits) => {
            let items: String = hits
                .iter()
                .enumerate()
                .map(|(i, hit)| render_hit(hit, active == Some(i)))
                .collect();
            format!("<ul>{}</ul>", items)
        }
    }
}

/// Renders a session's panel, or nothing when it is hidden.
pub fn render_session_html(session: &SearchSession) -> String {
    if !session.is_panel_visible() {
        return String::new();
    }
    render_panel_html(session.content(), session.active_index())
}

fn render_hit(hit: &SearchHit, is_active: bool) -> String {
    let class = if is_active {
        format!(" class=\"{}\"", ACTIVE_RESULT_CLASS)
    } else {
        String::new()
    };

    let snippet = hit
        .snippet
        .as_ref()
        .map(|s| format!("<p class=\"{}\">{}</p>", RESULT_SNIPPET_CLASS, s.to_html()))
        .unwrap_or_default();

    format!(
        "<li{}><a href=\"{}\"><div class=\"{}\">{}</div></a>{}</li>",
        class,
        escape_html(&hit.url),
        RESULT_TITLE_CLASS,
        hit.title.to_html(),
        snippet
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Highlighted;

    fn hit(url: &str, title: &str, snippet: Option<&str>) -> SearchHit {
        SearchHit {
            entry_index: 0,
            url: url.to_string(),
            title: Highlighted::plain(title),
            snippet: snippet.map(Highlighted::plain),
        }
    }

    #[test]
    fn test_empty_renders_nothing() {
        assert_eq!(render_panel_html(&PanelContent::Empty, None), "");
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            render_panel_html(&PanelContent::NoResults, None),
            format!("<p>{}</p>", NO_RESULTS_MESSAGE)
        );
        assert!(render_panel_html(&PanelContent::Loading, None).contains(LOADING_MESSAGE));
        assert!(
            render_panel_html(&PanelContent::Error("Oops <1>".to_string()), None)
                .contains("Oops &lt;1&gt;")
        );
    }

    #[test]
    fn test_result_item_markup() {
        let content = PanelContent::Results(vec![hit("/a", "Intro", Some("Body"))]);
        assert_eq!(
            render_panel_html(&content, None),
            "<ul><li><a href=\"/a\"><div class=\"search-result-title\">Intro</div></a>\
             <p class=\"search-result-snippet\">Body</p></li></ul>"
        );
    }

    #[test]
    fn test_snippet_omitted_when_absent() {
        let content = PanelContent::Results(vec![hit("/a", "Intro", None)]);
        assert!(!render_panel_html(&content, None).contains(RESULT_SNIPPET_CLASS));
    }

    #[test]
    fn test_active_item_is_marked() {
        let content = PanelContent::Results(vec![
            hit("/a", "One", None),
            hit("/b", "Two", None),
        ]);
        let html = render_panel_html(&content, Some(1));

        assert_eq!(html.matches(ACTIVE_RESULT_CLASS).count(), 1);
        assert!(html.contains("<li class=\"active-search-result\"><a href=\"/b\">"));
    }

    #[test]
    fn test_url_is_escaped() {
        let content = PanelContent::Results(vec![hit("/a?x=1&y=\"2\"", "T", None)]);
        assert!(render_panel_html(&content, None).contains("href=\"/a?x=1&amp;y=&quot;2&quot;\""));
    }
}
