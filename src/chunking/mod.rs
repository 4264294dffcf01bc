//! Splitting strategies for transchunk.
//!
//! This module provides a trait-based system for cutting documents into
//! translatable units. Two strategies are available:
//!
//! - **Paragraph**: prose paragraphs and atomic fenced code blocks
//! - **Words**: whole lines grouped up to a word budget
//!
//! [`split_batch`] runs either strategy over many documents in parallel.

pub mod paragraph;
pub mod parallel;
pub mod traits;
pub mod words;

pub use paragraph::ParagraphSplitter;
pub use parallel::split_batch;
pub use traits::{SplitConfig, Splitter};
pub use words::WordBudgetSplitter;

/// Default word budget per document chunk.
pub const DEFAULT_MAX_WORDS: usize = 300;

/// Splits `input` into paragraphs and code blocks.
///
/// `None` yields an empty list. Concatenating the result reproduces the
/// input exactly.
///
/// # Examples
///
/// ```
/// use transchunk::chunking::split_into_paragraphs;
///
/// assert!(split_into_paragraphs(None).is_empty());
///
/// let chunks = split_into_paragraphs(Some("One.\n\n```\ncode\n```\nTwo."));
/// assert_eq!(chunks, vec!["One.\n\n", "```\ncode\n```\n", "Two."]);
/// ```
#[must_use]
pub fn split_into_paragraphs(input: Option<&str>) -> Vec<String> {
    input.map_or_else(Vec::new, |text| {
        ParagraphSplitter::new()
            .paragraphs(text)
            .into_iter()
            .map(|p| p.content)
            .collect()
    })
}

/// Creates a splitter by name.
///
/// # Arguments
///
/// * `name` - Strategy name: "paragraph" or "words".
/// * `max_words` - Word budget used by the "words" strategy.
///
/// # Errors
///
/// Returns [`crate::error::SplitError::UnknownStrategy`] if the strategy name is not recognized.
pub fn create_splitter(name: &str, max_words: usize) -> crate::error::Result<Box<dyn Splitter>> {
    match name.to_lowercase().as_str() {
        "paragraph" | "paragraphs" => Ok(Box::new(ParagraphSplitter::new())),
        "words" => Ok(Box::new(WordBudgetSplitter::with_max_words(max_words))),
        _ => Err(crate::error::SplitError::UnknownStrategy {
            name: name.to_string(),
        }
        .into()),
    }
}

/// Lists available strategy names.
#[must_use]
pub fn available_strategies() -> Vec<&'static str> {
    vec!["paragraph", "words"]
}
