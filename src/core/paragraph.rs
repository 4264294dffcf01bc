//! Paragraph representation.
//!
//! A paragraph is one translatable unit cut from a source text: either a
//! run of prose closed by a blank line or a complete fenced code block.
//! Each paragraph remembers where it came from in the source so callers
//! can map edits back onto the original document.

use crate::io::unicode::single_line_preview;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Kind of content a paragraph holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParagraphKind {
    /// Prose, possibly spanning several lines.
    #[default]
    Text,
    /// A fenced code block, including its delimiter lines.
    Code,
}

/// A segment of source text produced by a splitter.
///
/// # Examples
///
/// ```
/// use transchunk::core::{Paragraph, ParagraphKind};
///
/// let paragraph = Paragraph::new("Hello, world!\n".to_string(), 0..14, 0);
/// assert_eq!(paragraph.size(), 14);
/// assert_eq!(paragraph.kind, ParagraphKind::Text);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Paragraph content, verbatim from the source.
    pub content: String,

    /// Byte range in the source text.
    pub byte_range: Range<usize>,

    /// Sequential index within the source (0-based).
    pub index: usize,

    /// Prose or code.
    pub kind: ParagraphKind,

    /// Paragraph metadata.
    pub metadata: ParagraphMetadata,
}

/// Metadata associated with a paragraph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphMetadata {
    /// Splitting strategy that produced this paragraph.
    pub strategy: Option<String>,

    /// Whitespace-separated word count.
    pub word_count: usize,

    /// Line range in the source (0-based, end exclusive).
    pub line_range: Option<Range<usize>>,
}

impl Paragraph {
    /// Creates a new text paragraph.
    ///
    /// # Arguments
    ///
    /// * `content` - Paragraph content.
    /// * `byte_range` - Byte range in the source text.
    /// * `index` - Sequential index within the source.
    #[must_use]
    pub fn new(content: String, byte_range: Range<usize>, index: usize) -> Self {
        let word_count = count_words(&content);
        Self {
            content,
            byte_range,
            index,
            kind: ParagraphKind::Text,
            metadata: ParagraphMetadata {
                word_count,
                ..Default::default()
            },
        }
    }

    /// Creates a paragraph tagged with the strategy that produced it.
    #[must_use]
    pub fn with_strategy(
        content: String,
        byte_range: Range<usize>,
        index: usize,
        strategy: &str,
    ) -> Self {
        let mut paragraph = Self::new(content, byte_range, index);
        paragraph.metadata.strategy = Some(strategy.to_string());
        paragraph
    }

    /// Sets the paragraph kind.
    #[must_use]
    pub const fn kind(mut self, kind: ParagraphKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the line range in the source.
    pub const fn set_line_range(&mut self, start_line: usize, end_line: usize) {
        self.metadata.line_range = Some(start_line..end_line);
    }

    /// Returns the size of the paragraph in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.content.len()
    }

    /// Checks if the paragraph is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns true for fenced code blocks.
    #[must_use]
    pub fn is_code(&self) -> bool {
        self.kind == ParagraphKind::Code
    }

    /// Returns the start byte offset in the source.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.byte_range.start
    }

    /// Returns the end byte offset in the source.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.byte_range.end
    }

    /// Returns the whitespace-separated word count.
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.metadata.word_count
    }

    /// Returns the content on one line, at most `max_graphemes`
    /// user-perceived characters wide.
    #[must_use]
    pub fn preview(&self, max_graphemes: usize) -> String {
        single_line_preview(&self.content, max_graphemes)
    }
}

/// Counts whitespace-separated words.
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
