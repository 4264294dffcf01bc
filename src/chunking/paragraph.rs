//! Paragraph splitting strategy.
//!
//! Cuts text into prose paragraphs and fenced code blocks. Prose ends at a
//! blank line, which stays attached to the paragraph it closes. Code
//! blocks are atomic: everything from an opening fence line to the next
//! fence line is one paragraph, blank lines included. Whitespace that
//! would form a paragraph of its own is folded into a neighbour, so the
//! output concatenates back to the input byte for byte.

use crate::chunking::traits::{SplitConfig, Splitter};
use crate::core::{Paragraph, ParagraphKind};
use crate::error::Result;
use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

/// Returns true if `line` opens or closes a fenced code block.
#[allow(clippy::expect_used)]
pub(crate) fn is_fence(line: &str) -> bool {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    FENCE
        .get_or_init(|| Regex::new(r"^\s*```").expect("valid regex"))
        .is_match(line)
}

/// Returns true if `text` is empty or consists only of whitespace.
#[allow(clippy::expect_used)]
pub(crate) fn is_blank(text: &str) -> bool {
    static BLANK: OnceLock<Regex> = OnceLock::new();
    BLANK
        .get_or_init(|| Regex::new(r"^\s*$").expect("valid regex"))
        .is_match(text)
}

/// A raw split result before it is turned into a [`Paragraph`].
#[derive(Debug, Clone, PartialEq, Eq)]
struct Segment {
    bytes: Range<usize>,
    lines: Range<usize>,
    kind: ParagraphKind,
}

/// Paragraph and code-block splitter.
///
/// # Examples
///
/// ```
/// use transchunk::chunking::ParagraphSplitter;
///
/// let text = "Intro.\n\n```\nlet x = 1;\n\nlet y = 2;\n```\nOutro.";
/// let paragraphs = ParagraphSplitter::new().paragraphs(text);
///
/// assert_eq!(paragraphs.len(), 3);
/// assert_eq!(paragraphs[0].content, "Intro.\n\n");
/// assert!(paragraphs[1].is_code());
/// assert_eq!(paragraphs[2].content, "Outro.");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ParagraphSplitter;

impl ParagraphSplitter {
    /// Creates a new paragraph splitter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Splits `text` into paragraphs. Never fails.
    #[must_use]
    pub fn paragraphs(&self, text: &str) -> Vec<Paragraph> {
        let segments = coalesce_whitespace(text, scan(text));

        segments
            .into_iter()
            .enumerate()
            .map(|(index, segment)| {
                let mut paragraph = Paragraph::with_strategy(
                    text[segment.bytes.clone()].to_string(),
                    segment.bytes,
                    index,
                    self.name(),
                )
                .kind(segment.kind);
                paragraph.set_line_range(segment.lines.start, segment.lines.end);
                paragraph
            })
            .collect()
    }
}

/// Scans lines, emitting a segment at every paragraph boundary.
fn scan(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut in_code_block = false;
    // Buffer is always text[start..offset].
    let mut start = 0;
    let mut start_line = 0;
    let mut offset = 0;

    for (line_no, line) in text.split_inclusive('\n').enumerate() {
        let line_start = offset;
        offset += line.len();

        if is_fence(line) {
            if in_code_block {
                push_segment(
                    &mut segments,
                    start..offset,
                    start_line..line_no + 1,
                    ParagraphKind::Code,
                );
                start = offset;
                start_line = line_no + 1;
                in_code_block = false;
            } else {
                push_segment(
                    &mut segments,
                    start..line_start,
                    start_line..line_no,
                    ParagraphKind::Text,
                );
                start = line_start;
                start_line = line_no;
                in_code_block = true;
            }
        } else if !in_code_block && is_blank(line) {
            push_segment(
                &mut segments,
                start..offset,
                start_line..line_no + 1,
                ParagraphKind::Text,
            );
            start = offset;
            start_line = line_no + 1;
        }
    }

    let kind = if in_code_block {
        ParagraphKind::Code
    } else {
        ParagraphKind::Text
    };
    let line_count = text.split_inclusive('\n').count();
    push_segment(&mut segments, start..offset, start_line..line_count, kind);

    segments
}

fn push_segment(
    segments: &mut Vec<Segment>,
    bytes: Range<usize>,
    lines: Range<usize>,
    kind: ParagraphKind,
) {
    if !bytes.is_empty() {
        segments.push(Segment { bytes, lines, kind });
    }
}

/// Folds whitespace-only segments into the previous segment, or into the
/// next one when nothing precedes them.
///
/// Input that is whitespace from start to end comes back as one segment.
fn coalesce_whitespace(text: &str, segments: Vec<Segment>) -> Vec<Segment> {
    let mut result: Vec<Segment> = Vec::with_capacity(segments.len());
    let mut leading: Option<Segment> = None;

    for segment in segments {
        if is_blank(&text[segment.bytes.clone()]) {
            if let Some(last) = result.last_mut() {
                last.bytes.end = segment.bytes.end;
                last.lines.end = segment.lines.end;
            } else if let Some(pending) = leading.as_mut() {
                pending.bytes.end = segment.bytes.end;
                pending.lines.end = segment.lines.end;
            } else {
                leading = Some(segment);
            }
        } else {
            let mut segment = segment;
            if let Some(pending) = leading.take() {
                segment.bytes.start = pending.bytes.start;
                segment.lines.start = pending.lines.start;
            }
            result.push(segment);
        }
    }

    if let Some(pending) = leading {
        result.push(pending);
    }

    result
}

impl Splitter for ParagraphSplitter {
    fn split(&self, text: &str, config: Option<&SplitConfig>) -> Result<Vec<Paragraph>> {
        let mut paragraphs = self.paragraphs(text);

        if let Some(config) = config {
            config.apply_limit(&mut paragraphs);
        }

        tracing::debug!(
            strategy = self.name(),
            source = config.and_then(|c| c.source.as_deref()),
            paragraphs = paragraphs.len(),
            "split text"
        );

        Ok(paragraphs)
    }

    fn name(&self) -> &'static str {
        "paragraph"
    }

    fn description(&self) -> &'static str {
        "Paragraphs closed by blank lines; fenced code blocks kept whole"
    }
}
