//! Word tokenizer for diffing.
//!
//! Splits text at Unicode word boundaries into words, punctuation, and
//! whitespace runs. Adjacent whitespace pieces are merged so that every
//! gap between two non-space tokens is a single token.

use unicode_segmentation::UnicodeSegmentation;

/// A slice of the input classified for comparison.
#[derive(Debug, Clone, Copy)]
pub struct Token<'a> {
    /// Token text, borrowed from the input.
    pub text: &'a str,
    /// Whether the token is whitespace only.
    pub is_whitespace: bool,
}

impl PartialEq for Token<'_> {
    /// Whitespace tokens compare equal regardless of their content.
    fn eq(&self, other: &Self) -> bool {
        match (self.is_whitespace, other.is_whitespace) {
            (true, true) => true,
            (false, false) => self.text == other.text,
            _ => false,
        }
    }
}

impl Eq for Token<'_> {}

/// Tokenizes `text` for word-level comparison.
///
/// # Examples
///
/// ```
/// use transchunk::diff::tokenize;
///
/// let tokens: Vec<&str> = tokenize("Hello,  world").iter().map(|t| t.text).collect();
/// assert_eq!(tokens, vec!["Hello", ",", "  ", "world"]);
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens: Vec<Token<'_>> = Vec::new();
    let mut offset = 0;

    for piece in text.split_word_bounds() {
        let start = offset;
        offset += piece.len();
        let is_whitespace = piece.chars().all(char::is_whitespace);

        if is_whitespace
            && let Some(last) = tokens.last_mut()
            && last.is_whitespace
        {
            let last_start = offset - piece.len() - last.text.len();
            last.text = &text[last_start..offset];
            continue;
        }

        tokens.push(Token {
            text: &text[start..offset],
            is_whitespace,
        });
    }

    tokens
}
