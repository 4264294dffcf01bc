//! Splitter trait definition.
//!
//! Defines the interface shared by all splitting strategies so callers
//! can pick one by name at runtime.

use crate::core::Paragraph;
use crate::error::Result;

/// Trait for cutting text into paragraphs.
///
/// Implementations must be `Send + Sync` so batches can be split in
/// parallel, and must be lossless: concatenating the returned contents
/// in order yields the input text.
///
/// # Examples
///
/// ```
/// use transchunk::chunking::{ParagraphSplitter, Splitter};
///
/// let splitter = ParagraphSplitter::new();
/// let paragraphs = splitter.split("First.\n\nSecond.", None).unwrap();
/// assert_eq!(paragraphs.len(), 2);
/// ```
pub trait Splitter: Send + Sync {
    /// Splits the input text.
    ///
    /// # Arguments
    ///
    /// * `text` - The input text.
    /// * `config` - Optional per-call configuration overriding the
    ///   splitter's own settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    fn split(&self, text: &str, config: Option<&SplitConfig>) -> Result<Vec<Paragraph>>;

    /// Returns the name of the strategy.
    fn name(&self) -> &'static str;

    /// Returns a description of the strategy.
    fn description(&self) -> &'static str {
        "No description available"
    }

    /// Validates configuration before splitting.
    ///
    /// # Errors
    ///
    /// Returns an error if the word budget is zero.
    fn validate(&self, config: Option<&SplitConfig>) -> Result<()> {
        if config.and_then(|c| c.max_words) == Some(0) {
            return Err(crate::error::SplitError::InvalidConfig {
                reason: "max_words must be > 0".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// Per-call splitting configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitConfig {
    /// Source file path, for logging.
    pub source: Option<String>,

    /// Word budget per chunk (word-budget strategy only). `None` keeps
    /// the splitter's own budget.
    pub max_words: Option<usize>,

    /// Maximum paragraphs to produce (0 = unlimited).
    pub max_paragraphs: usize,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SplitConfig {
    /// Creates a configuration that leaves the splitter's budget alone.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            source: None,
            max_words: None,
            max_paragraphs: 0,
        }
    }

    /// Creates a configuration with a custom word budget.
    #[must_use]
    pub const fn with_max_words(max_words: usize) -> Self {
        Self {
            source: None,
            max_words: Some(max_words),
            max_paragraphs: 0,
        }
    }

    /// Sets the source path.
    #[must_use]
    pub fn source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }

    /// Sets the maximum number of paragraphs.
    #[must_use]
    pub const fn max_paragraphs(mut self, max: usize) -> Self {
        self.max_paragraphs = max;
        self
    }

    /// Truncates `paragraphs` to the configured limit, if any.
    pub fn apply_limit(&self, paragraphs: &mut Vec<Paragraph>) {
        if self.max_paragraphs > 0 {
            paragraphs.truncate(self.max_paragraphs);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunking::{ParagraphSplitter, WordBudgetSplitter};

    #[test]
    fn test_split_config_defaults() {
        let config = SplitConfig::new();
        assert_eq!(config.max_words, None);
        assert_eq!(config.max_paragraphs, 0);
        assert!(config.source.is_none());
        assert_eq!(SplitConfig::default(), config);
    }

    #[test]
    fn test_split_config_builder() {
        let config = SplitConfig::with_max_words(50)
            .source("chapter1.md")
            .max_paragraphs(3);
        assert_eq!(config.max_words, Some(50));
        assert_eq!(config.source.as_deref(), Some("chapter1.md"));
        assert_eq!(config.max_paragraphs, 3);
    }

    #[test]
    fn test_apply_limit() {
        let mut paragraphs = vec![
            Paragraph::new("a".to_string(), 0..1, 0),
            Paragraph::new("b".to_string(), 1..2, 1),
        ];
        SplitConfig::new().apply_limit(&mut paragraphs);
        assert_eq!(paragraphs.len(), 2);

        SplitConfig::new().max_paragraphs(1).apply_limit(&mut paragraphs);
        assert_eq!(paragraphs.len(), 1);
    }

    #[test]
    fn test_validate_zero_budget() {
        let splitter = WordBudgetSplitter::new();
        let config = SplitConfig::with_max_words(0);
        assert!(splitter.validate(Some(&config)).is_err());
        assert!(splitter.validate(None).is_ok());
        assert!(splitter.validate(Some(&SplitConfig::new())).is_ok());
    }

    /// A splitter relying on every default trait method.
    struct WholeText;

    impl Splitter for WholeText {
        fn split(&self, text: &str, _config: Option<&SplitConfig>) -> Result<Vec<Paragraph>> {
            Ok(vec![Paragraph::new(text.to_string(), 0..text.len(), 0)])
        }

        fn name(&self) -> &'static str {
            "whole"
        }
    }

    #[test]
    fn test_default_description() {
        assert_eq!(WholeText.description(), "No description available");
        assert_ne!(
            ParagraphSplitter::new().description(),
            "No description available"
        );
    }
}
