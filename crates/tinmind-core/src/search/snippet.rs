//! Fixed-width body excerpts around the first query occurrence.
//!
//! All positions here are character offsets. Byte offsets only appear at the
//! edges, when converting a regex match position and when slicing.

use crate::config::ELLIPSIS;

/// Character window `[start, end)` of width `width` around a match.
///
/// The window leads the match by half the spare width. When it runs past
/// either edge of the text it slides toward the other side, so it is always
/// exactly `width` characters unless the text itself is shorter.
pub fn snippet_window(
    text_chars: usize,
    match_start: usize,
    query_chars: usize,
    width: usize,
) -> (usize, usize) {
    let lead = width.saturating_sub(query_chars) / 2;
    let mut start = match_start.saturating_sub(lead);
    let mut end = text_chars.min(start + width);

    if end - start < width && start == 0 {
        end = text_chars.min(width);
    }
    if end - start < width && end == text_chars {
        start = text_chars.saturating_sub(width);
    }

    (start, end)
}

/// Builds the snippet for a body.
///
/// `match_start` is the byte offset of the first query occurrence in `body`,
/// or `None` when only the title matched. Returns `None` for an empty body.
pub fn build_snippet(
    body: &str,
    match_start: Option<usize>,
    query_chars: usize,
    width: usize,
) -> Option<String> {
    if body.is_empty() {
        return None;
    }

    let text_chars = body.chars().count();

    let snippet = match match_start {
        Some(byte_pos) => {
            let match_char = body[..byte_pos].chars().count();
            let (start, end) = snippet_window(text_chars, match_char, query_chars, width);

            let mut snippet = String::new();
            if start > 0 {
                snippet.push_str(ELLIPSIS);
            }
            snippet.push_str(char_slice(body, start, end));
            if end < text_chars {
                snippet.push_str(ELLIPSIS);
            }
            snippet
        }
        None => {
            let mut snippet = char_slice(body, 0, width).to_string();
            if text_chars > width {
                snippet.push_str(ELLIPSIS);
            }
            snippet
        }
    };

    Some(snippet)
}

/// Slices `text` by character positions, clamping to its length.
fn char_slice(text: &str, start: usize, end: usize) -> &str {
    let byte_at = |pos: usize| {
        text.char_indices()
            .nth(pos)
            .map(|(b, _)| b)
            .unwrap_or(text.len())
    };
    let start_byte = byte_at(start);
    let end_byte = byte_at(end).max(start_byte);
    &text[start_byte..end_byte]
}
