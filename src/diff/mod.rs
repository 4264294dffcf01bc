//! Word-level differences between two texts.
//!
//! Used to record how a user changed a translation: the texts are
//! tokenized into words, punctuation, and whitespace, the words are
//! aligned with a Myers edit script, and the changed runs are reported as
//! a one-line summary such as `Added: "brave" | Deleted: "old"`.
//!
//! Whitespace runs match each other whatever they contain, so reflowing
//! or re-indenting text is not reported as a change.

pub mod myers;
pub mod tokenize;

pub use myers::{Edit, edit_script};
pub use tokenize::{Token, tokenize};

use serde::{Deserialize, Serialize};
use std::iter::repeat_n;

/// Separator between entries of a difference summary.
pub const SEGMENT_SEPARATOR: &str = " | ";

/// A run of tokens sharing the same edit status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "text", rename_all = "lowercase")]
pub enum DiffSegment {
    /// Text present in both inputs.
    Unchanged(String),
    /// Text only in the modified input.
    Added(String),
    /// Text only in the original input.
    Removed(String),
}

impl DiffSegment {
    /// Returns the segment text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Unchanged(text) | Self::Added(text) | Self::Removed(text) => text,
        }
    }

    /// Returns true for added or removed segments.
    #[must_use]
    pub const fn is_change(&self) -> bool {
        !matches!(self, Self::Unchanged(_))
    }

    /// Renders the segment as a summary entry, or `None` if there is
    /// nothing to report.
    #[must_use]
    pub fn describe(&self) -> Option<String> {
        let text = self.text().trim();
        match self {
            _ if text.is_empty() => None,
            Self::Added(_) => Some(format!("Added: \"{text}\"")),
            Self::Removed(_) => Some(format!("Deleted: \"{text}\"")),
            Self::Unchanged(_) => None,
        }
    }
}

/// Computes the word-level segments between `original` and `modified`.
///
/// Unchanged whitespace carries the modified text's spelling.
///
/// # Examples
///
/// ```
/// use transchunk::diff::{DiffSegment, diff_words};
///
/// let segments = diff_words("alpha beta", "alpha");
/// assert_eq!(
///     segments,
///     vec![
///         DiffSegment::Unchanged("alpha".to_string()),
///         DiffSegment::Removed(" beta".to_string()),
///     ]
/// );
/// ```
#[must_use]
pub fn diff_words(original: &str, modified: &str) -> Vec<DiffSegment> {
    let old = tokenize(original);
    let new = tokenize(modified);
    let script = align(&old, &new);

    let mut segments: Vec<DiffSegment> = Vec::new();
    let (mut i, mut j) = (0, 0);

    for edit in script {
        let (kind, text) = match edit {
            Edit::Keep => {
                let text = new[j].text;
                i += 1;
                j += 1;
                (Edit::Keep, text)
            }
            Edit::Delete => {
                let text = old[i].text;
                i += 1;
                (Edit::Delete, text)
            }
            Edit::Insert => {
                let text = new[j].text;
                j += 1;
                (Edit::Insert, text)
            }
        };

        match (segments.last_mut(), kind) {
            (Some(DiffSegment::Unchanged(buf)), Edit::Keep)
            | (Some(DiffSegment::Removed(buf)), Edit::Delete)
            | (Some(DiffSegment::Added(buf)), Edit::Insert) => buf.push_str(text),
            (_, Edit::Keep) => segments.push(DiffSegment::Unchanged(text.to_string())),
            (_, Edit::Delete) => segments.push(DiffSegment::Removed(text.to_string())),
            (_, Edit::Insert) => segments.push(DiffSegment::Added(text.to_string())),
        }
    }

    segments
}

/// Aligns two token streams on their words, then pairs up the whitespace
/// left between matched words.
fn align(old: &[Token<'_>], new: &[Token<'_>]) -> Vec<Edit> {
    let old_words = word_positions(old);
    let new_words = word_positions(new);
    let old_text: Vec<&str> = old_words.iter().map(|&i| old[i].text).collect();
    let new_text: Vec<&str> = new_words.iter().map(|&j| new[j].text).collect();

    let mut script = Vec::with_capacity(old.len() + new.len());
    let (mut i, mut j) = (0, 0);
    let (mut a, mut b) = (0, 0);

    for edit in edit_script(&old_text, &new_text) {
        match edit {
            Edit::Keep => {
                let (next_i, next_j) = (old_words[a], new_words[b]);
                fill_gap(&old[i..next_i], &new[j..next_j], &mut script);
                script.push(Edit::Keep);
                (i, j) = (next_i + 1, next_j + 1);
                a += 1;
                b += 1;
            }
            Edit::Delete => a += 1,
            Edit::Insert => b += 1,
        }
    }
    fill_gap(&old[i..], &new[j..], &mut script);
    script
}

fn word_positions(tokens: &[Token<'_>]) -> Vec<usize> {
    tokens
        .iter()
        .enumerate()
        .filter(|(_, t)| !t.is_whitespace)
        .map(|(i, _)| i)
        .collect()
}

/// Edits for the tokens between two matched words.
///
/// No word matches here, so only whitespace can be kept; as much of it is
/// kept as possible and deletions come before insertions.
fn fill_gap(old: &[Token<'_>], new: &[Token<'_>], script: &mut Vec<Edit>) {
    let old_spaces = spaces_from(old);
    let new_spaces = spaces_from(new);
    let keepable = |i: usize, j: usize| old_spaces[i].min(new_spaces[j]);

    let (mut i, mut j) = (0, 0);
    while i < old.len() && j < new.len() {
        if old[i] == new[j] {
            script.push(Edit::Keep);
            i += 1;
            j += 1;
        } else if keepable(i + 1, j) >= keepable(i, j + 1) {
            script.push(Edit::Delete);
            i += 1;
        } else {
            script.push(Edit::Insert);
            j += 1;
        }
    }
    script.extend(repeat_n(Edit::Delete, old.len() - i));
    script.extend(repeat_n(Edit::Insert, new.len() - j));
}

/// `counts[i]` is the number of whitespace tokens in `tokens[i..]`.
fn spaces_from(tokens: &[Token<'_>]) -> Vec<usize> {
    let mut counts = vec![0; tokens.len() + 1];
    for (i, token) in tokens.iter().enumerate().rev() {
        counts[i] = counts[i + 1] + usize::from(token.is_whitespace);
    }
    counts
}

/// Joins the reportable segments into a summary string.
#[must_use]
pub fn format_segments(segments: &[DiffSegment]) -> String {
    segments
        .iter()
        .filter_map(DiffSegment::describe)
        .collect::<Vec<_>>()
        .join(SEGMENT_SEPARATOR)
}

/// Summarizes the word-level changes from `original` to `modified`.
///
/// Returns an empty string when the texts are word-identical.
///
/// # Examples
///
/// ```
/// use transchunk::diff::word_difference;
///
/// assert_eq!(word_difference("hello world", "hello brave world"), "Added: \"brave\"");
/// assert_eq!(word_difference("alpha beta", "alpha"), "Deleted: \"beta\"");
/// assert_eq!(word_difference("same", "same"), "");
/// ```
#[must_use]
pub fn word_difference(original: &str, modified: &str) -> String {
    format_segments(&diff_words(original, modified))
}
