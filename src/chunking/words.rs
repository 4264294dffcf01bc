//! Word-budget splitting strategy.
//!
//! Groups whole lines into chunks of at most `max_words` words, the unit a
//! document is sent for translation in. A fenced code block is never cut:
//! the budget is only checked for lines outside code blocks, so a long
//! block stays with the chunk it starts in and can push it over the limit.

use crate::chunking::DEFAULT_MAX_WORDS;
use crate::chunking::paragraph::is_fence;
use crate::chunking::traits::{SplitConfig, Splitter};
use crate::core::{Paragraph, count_words};
use crate::error::{Result, SplitError};

/// Line-grouping splitter bounded by word count.
///
/// # Examples
///
/// ```
/// use transchunk::chunking::{Splitter, WordBudgetSplitter};
///
/// let splitter = WordBudgetSplitter::with_max_words(4);
/// let chunks = splitter.split("a b c\nd e\nf\n", None).unwrap();
/// assert_eq!(chunks.len(), 2);
/// assert_eq!(chunks[0].content, "a b c\n");
/// assert_eq!(chunks[1].content, "d e\nf\n");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WordBudgetSplitter {
    /// Maximum words per chunk.
    max_words: usize,
}

impl Default for WordBudgetSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl WordBudgetSplitter {
    /// Creates a splitter with the default budget of 300 words.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_words: DEFAULT_MAX_WORDS,
        }
    }

    /// Creates a splitter with a custom budget.
    #[must_use]
    pub const fn with_max_words(max_words: usize) -> Self {
        Self { max_words }
    }

    /// Returns the configured budget.
    #[must_use]
    pub const fn max_words(&self) -> usize {
        self.max_words
    }
}

impl Splitter for WordBudgetSplitter {
    fn split(&self, text: &str, config: Option<&SplitConfig>) -> Result<Vec<Paragraph>> {
        self.validate(config)?;
        let max_words = config
            .and_then(|c| c.max_words)
            .unwrap_or(self.max_words);
        if max_words == 0 {
            return Err(SplitError::InvalidConfig {
                reason: "max_words must be > 0".to_string(),
            }
            .into());
        }

        let mut chunks = Vec::new();
        let mut in_code_block = false;
        let mut start = 0;
        let mut start_line = 0;
        let mut offset = 0;
        let mut word_count = 0;

        for (line_no, line) in text.split_inclusive('\n').enumerate() {
            let line_words = count_words(line);
            let fence = is_fence(line);

            // Opening fences are budget-checked, closing fences are not.
            let check_budget = !in_code_block;
            if fence {
                in_code_block = !in_code_block;
            }

            if check_budget && offset > start && word_count + line_words > max_words {
                let mut chunk = Paragraph::with_strategy(
                    text[start..offset].to_string(),
                    start..offset,
                    chunks.len(),
                    self.name(),
                );
                chunk.set_line_range(start_line, line_no);
                chunks.push(chunk);

                start = offset;
                start_line = line_no;
                word_count = 0;
            }

            word_count += line_words;
            offset += line.len();
        }

        if offset > start {
            let mut chunk = Paragraph::with_strategy(
                text[start..offset].to_string(),
                start..offset,
                chunks.len(),
                self.name(),
            );
            chunk.set_line_range(start_line, text.split_inclusive('\n').count());
            chunks.push(chunk);
        }

        if let Some(config) = config {
            config.apply_limit(&mut chunks);
        }

        tracing::debug!(
            strategy = self.name(),
            source = config.and_then(|c| c.source.as_deref()),
            max_words,
            chunks = chunks.len(),
            "split text"
        );

        Ok(chunks)
    }

    fn name(&self) -> &'static str {
        "words"
    }

    fn description(&self) -> &'static str {
        "Whole lines grouped up to a word budget; fenced code blocks kept whole"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(splitter: &WordBudgetSplitter, text: &str) -> Vec<String> {
        splitter
            .split(text, None)
            .unwrap()
            .into_iter()
            .map(|c| c.content)
            .collect()
    }

    #[test]
    fn test_default_budget() {
        assert_eq!(WordBudgetSplitter::new().max_words(), 300);
        assert_eq!(WordBudgetSplitter::default().max_words(), DEFAULT_MAX_WORDS);
    }

    #[test]
    fn test_empty_text() {
        let splitter = WordBudgetSplitter::new();
        assert!(splitter.split("", None).unwrap().is_empty());
    }

    #[test]
    fn test_small_text_single_chunk() {
        let splitter = WordBudgetSplitter::new();
        assert_eq!(contents(&splitter, "short text\nhere"), vec!["short text\nhere"]);
    }

    #[test]
    fn test_budget_boundary_is_inclusive() {
        let splitter = WordBudgetSplitter::with_max_words(4);
        assert_eq!(contents(&splitter, "a b\nc d\ne\n"), vec!["a b\nc d\n", "e\n"]);
    }

    #[test]
    fn test_oversized_first_line_not_preceded_by_empty_chunk() {
        let splitter = WordBudgetSplitter::with_max_words(2);
        assert_eq!(
            contents(&splitter, "one two three four\nfive\n"),
            vec!["one two three four\n", "five\n"]
        );
    }

    #[test]
    fn test_code_block_never_split() {
        let splitter = WordBudgetSplitter::with_max_words(3);
        let text = "intro words\n```\nlet a = 1;\nlet b = 2;\n```\nafter\n";
        let chunks = contents(&splitter, text);
        assert_eq!(
            chunks,
            vec!["intro words\n```\nlet a = 1;\nlet b = 2;\n```\n", "after\n"]
        );
    }

    #[test]
    fn test_lossless_and_indexed() {
        let splitter = WordBudgetSplitter::with_max_words(5);
        let text = "w ".repeat(40) + "\n" + &"x y z\n".repeat(10);
        let chunks = splitter.split(&text, None).unwrap();
        let joined: String = chunks.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(joined, text);
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.index, i);
            assert_eq!(&text[chunk.byte_range.clone()], chunk.content);
        }
    }

    #[test]
    fn test_config_overrides_budget() {
        let splitter = WordBudgetSplitter::new();
        let config = SplitConfig::with_max_words(1);
        let chunks = splitter.split("a\nb\nc", Some(&config)).unwrap();
        assert_eq!(chunks.len(), 3);
    }

    #[test]
    fn test_config_without_budget_keeps_own() {
        let splitter = WordBudgetSplitter::with_max_words(2);
        let config = SplitConfig::new().max_paragraphs(2);
        let chunks = splitter.split("a b\nc d\ne f\ng h\n", Some(&config)).unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].content, "a b\n");
        assert_eq!(chunks[1].content, "c d\n");
    }

    #[test]
    fn test_zero_budget_rejected() {
        let splitter = WordBudgetSplitter::with_max_words(0);
        assert!(splitter.split("text", None).is_err());

        let config = SplitConfig::with_max_words(0);
        assert!(WordBudgetSplitter::new().split("text", Some(&config)).is_err());
    }

    #[test]
    fn test_line_ranges() {
        let splitter = WordBudgetSplitter::with_max_words(2);
        let chunks = splitter.split("a b\nc d\ne", None).unwrap();
        assert_eq!(chunks[0].metadata.line_range, Some(0..1));
        assert_eq!(chunks[1].metadata.line_range, Some(1..2));
        assert_eq!(chunks[2].metadata.line_range, Some(2..3));
    }
}
