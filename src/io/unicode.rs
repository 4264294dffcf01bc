//! Grapheme-aware helpers for chunk previews.
//!
//! Previews are cut at grapheme cluster boundaries so that accented
//! letters, CJK text, and emoji sequences are never split.

use unicode_segmentation::UnicodeSegmentation;

/// Counts the number of grapheme clusters in a string.
///
/// # Examples
///
/// ```
/// use transchunk::io::unicode::grapheme_count;
///
/// assert_eq!(grapheme_count("Käännös"), 7);
/// assert_eq!(grapheme_count("世界"), 2);
/// ```
#[must_use]
pub fn grapheme_count(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Truncates a string to at most `max_graphemes` grapheme clusters.
#[must_use]
pub fn truncate_graphemes(s: &str, max_graphemes: usize) -> &str {
    let mut end_byte = 0;

    for (count, grapheme) in s.graphemes(true).enumerate() {
        if count >= max_graphemes {
            break;
        }
        end_byte += grapheme.len();
    }

    &s[..end_byte]
}

/// Renders `s` on a single line, at most `max_graphemes` wide.
///
/// Newlines are shown as `\n`; truncated text ends with `...`.
#[must_use]
pub fn single_line_preview(s: &str, max_graphemes: usize) -> String {
    let flat = s.replace('\n', "\\n");
    if grapheme_count(&flat) <= max_graphemes {
        return flat;
    }
    if max_graphemes <= 3 {
        return truncate_graphemes(&flat, max_graphemes).to_string();
    }
    format!("{}...", truncate_graphemes(&flat, max_graphemes - 3))
}
