//! Batch splitting.
//!
//! Splits many independent documents at once using rayon. Each document is
//! split on its own, so results match sequential splitting exactly.

use crate::chunking::traits::{SplitConfig, Splitter};
use crate::core::Paragraph;
use crate::error::Result;
use rayon::prelude::*;

/// Minimum batch size worth handing to the thread pool.
const MIN_PARALLEL_BATCH: usize = 2;

/// Splits every text in `texts` with `splitter`, preserving input order.
///
/// # Errors
///
/// Returns the first error produced by the splitter.
///
/// # Examples
///
/// ```
/// use transchunk::chunking::{ParagraphSplitter, split_batch};
///
/// let texts = ["a\n\nb", "c"];
/// let results = split_batch(&ParagraphSplitter::new(), &texts, None).unwrap();
/// assert_eq!(results[0].len(), 2);
/// assert_eq!(results[1].len(), 1);
/// ```
pub fn split_batch<S, T>(
    splitter: &S,
    texts: &[T],
    config: Option<&SplitConfig>,
) -> Result<Vec<Vec<Paragraph>>>
where
    S: Splitter + ?Sized,
    T: AsRef<str> + Sync,
{
    if texts.len() < MIN_PARALLEL_BATCH {
        return texts
            .iter()
            .map(|t| splitter.split(t.as_ref(), config))
            .collect();
    }

    tracing::debug!(
        strategy = splitter.name(),
        documents = texts.len(),
        threads = rayon::current_num_threads(),
        "splitting batch in parallel"
    );

    texts
        .par_iter()
        .map(|t| splitter.split(t.as_ref(), config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunking::{ParagraphSplitter, WordBudgetSplitter};

    #[test]
    fn test_split_batch_empty() {
        let texts: Vec<String> = Vec::new();
        let results = split_batch(&ParagraphSplitter::new(), &texts, None).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_split_batch_single() {
        let results = split_batch(&ParagraphSplitter::new(), &["x\n\ny"], None).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].len(), 2);
    }

    #[test]
    fn test_split_batch_matches_sequential() {
        let texts: Vec<String> = (0..16)
            .map(|i| format!("doc {i}\n\n```\ncode {i}\n```\nend {i}"))
            .collect();
        let splitter = ParagraphSplitter::new();

        let parallel = split_batch(&splitter, &texts, None).unwrap();
        for (text, paragraphs) in texts.iter().zip(&parallel) {
            let sequential = splitter.split(text, None).unwrap();
            assert_eq!(&sequential, paragraphs);
        }
    }

    #[test]
    fn test_split_batch_propagates_error() {
        let config = SplitConfig::with_max_words(0);
        let result = split_batch(&WordBudgetSplitter::new(), &["a", "b", "c"], Some(&config));
        assert!(result.is_err());
    }

    #[test]
    fn test_split_batch_trait_object() {
        let splitter: Box<dyn Splitter> = Box::new(WordBudgetSplitter::with_max_words(1));
        let results = split_batch(splitter.as_ref(), &["a\nb", "c\nd"], None).unwrap();
        assert_eq!(results[0].len(), 2);
        assert_eq!(results[1].len(), 2);
    }
}
