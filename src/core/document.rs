//! Translation documents.
//!
//! A document is the source text cut into word-budgeted chunks, each of
//! which eventually carries a final translation chosen or edited by the
//! user. Once every chunk is translated the document can be finalized
//! into a single text.

use crate::chunking::traits::Splitter;
use crate::chunking::WordBudgetSplitter;
use crate::diff::word_difference;
use crate::error::{DocumentError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Separator placed between chunk translations in the final text.
pub const FINAL_SEPARATOR: &str = "\n\n";

/// One translatable chunk of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentChunk {
    /// Position within the document (0-based).
    pub chunk_number: usize,

    /// Source text of the chunk.
    pub chunk_content: String,

    /// Final translation chosen for the chunk, if any.
    #[serde(default)]
    pub final_chunk_translation: Option<String>,
}

impl DocumentChunk {
    /// Creates an untranslated chunk.
    #[must_use]
    pub const fn new(chunk_number: usize, chunk_content: String) -> Self {
        Self {
            chunk_number,
            chunk_content,
            final_chunk_translation: None,
        }
    }

    /// Returns true if the chunk has a non-empty final translation.
    ///
    /// Whitespace counts as a translation.
    #[must_use]
    pub fn is_translated(&self) -> bool {
        self.final_chunk_translation
            .as_deref()
            .is_some_and(|t| !t.is_empty())
    }
}

/// A source document and its per-chunk translations.
///
/// # Examples
///
/// ```
/// use transchunk::core::TranslationDocument;
///
/// let mut doc = TranslationDocument::from_source("notes", "Hei maailma", 300).unwrap();
/// doc.chunks[0].final_chunk_translation = Some("Hello world".to_string());
/// assert!(doc.is_finished());
/// assert_eq!(doc.finalize().unwrap(), "Hello world");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TranslationDocument {
    /// Document title.
    pub title: String,

    /// Full source text.
    #[serde(default)]
    pub content: String,

    /// Ordered chunks.
    #[serde(default)]
    pub chunks: Vec<DocumentChunk>,

    /// Assembled translation, set by [`TranslationDocument::finalize`].
    #[serde(default)]
    pub final_translation: Option<String>,
}

/// Word-level edit summary for one chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkChange {
    /// 1-based chunk number, as shown to users.
    pub chunk_number: usize,

    /// Summary produced by [`word_difference`].
    pub difference: String,
}

impl TranslationDocument {
    /// Creates a document by cutting `content` into chunks of at most
    /// `max_words` words.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_words` is zero.
    pub fn from_source(title: &str, content: &str, max_words: usize) -> Result<Self> {
        let chunks = WordBudgetSplitter::with_max_words(max_words)
            .split(content, None)?
            .into_iter()
            .map(|p| DocumentChunk::new(p.index, p.content))
            .collect::<Vec<_>>();

        tracing::debug!(title, chunks = chunks.len(), "created translation document");

        Ok(Self {
            title: title.to_string(),
            content: content.to_string(),
            chunks,
            final_translation: None,
        })
    }

    /// Parses a document from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Serialization`] for malformed input.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of chunks without a final translation.
    #[must_use]
    pub fn untranslated_count(&self) -> usize {
        self.chunks.iter().filter(|c| !c.is_translated()).count()
    }

    /// Returns true if the document is already finalized or every chunk is
    /// translated.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        let finalized = self
            .final_translation
            .as_deref()
            .is_some_and(|t| !t.is_empty());
        finalized || self.chunks.iter().all(DocumentChunk::is_translated)
    }

    /// Joins the final chunk translations into the document's final text.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::NothingToFinalize`] if the document has no
    /// chunks, or [`DocumentError::Unfinished`] if any chunk is
    /// untranslated.
    pub fn finalize(&mut self) -> Result<String> {
        if self.chunks.is_empty() {
            return Err(DocumentError::NothingToFinalize.into());
        }
        let missing = self.untranslated_count();
        if missing > 0 {
            return Err(DocumentError::Unfinished {
                missing,
                total: self.chunks.len(),
            }
            .into());
        }
        Ok(self.join_translations())
    }

    /// Like [`finalize`](Self::finalize) but skips untranslated chunks.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::NothingToFinalize`] if no chunk has a
    /// translation.
    pub fn finalize_partial(&mut self) -> Result<String> {
        if !self.chunks.iter().any(DocumentChunk::is_translated) {
            return Err(DocumentError::NothingToFinalize.into());
        }
        Ok(self.join_translations())
    }

    fn join_translations(&mut self) -> String {
        let text = self
            .chunks
            .iter()
            .filter_map(|c| c.final_chunk_translation.as_deref())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(FINAL_SEPARATOR);
        self.final_translation = Some(text.clone());
        text
    }

    /// Summarizes how `edited` differs from the stored final translations.
    ///
    /// Only chunks whose trimmed text changed are compared; whitespace-only
    /// edits and edits with no word-level difference produce no entry.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::EditCountMismatch`] when `edited` does not
    /// have one entry per chunk.
    pub fn summarize_changes<S: AsRef<str>>(&self, edited: &[S]) -> Result<Vec<ChunkChange>> {
        self.check_edit_count(edited.len())?;

        let changes = self
            .chunks
            .iter()
            .zip(edited)
            .enumerate()
            .filter_map(|(i, (chunk, text))| {
                let original = chunk.final_chunk_translation.as_deref().unwrap_or("");
                let text = text.as_ref();
                if text.trim() == original.trim() {
                    return None;
                }
                let difference = word_difference(original, text);
                (!difference.is_empty()).then_some(ChunkChange {
                    chunk_number: i + 1,
                    difference,
                })
            })
            .collect();

        Ok(changes)
    }

    /// Stores `edited` as the final chunk translations.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::EditCountMismatch`] when `edited` does not
    /// have one entry per chunk.
    pub fn apply_edits<S: AsRef<str>>(&mut self, edited: &[S]) -> Result<()> {
        self.check_edit_count(edited.len())?;
        for (chunk, text) in self.chunks.iter_mut().zip(edited) {
            chunk.final_chunk_translation = Some(text.as_ref().to_string());
        }
        Ok(())
    }

    fn check_edit_count(&self, actual: usize) -> Result<()> {
        if actual == self.chunks.len() {
            Ok(())
        } else {
            Err(DocumentError::EditCountMismatch {
                expected: self.chunks.len(),
                actual,
            }
            .into())
        }
    }
}

/// Renders change summaries as `Chunk N: ...` lines.
#[must_use]
pub fn render_changes(changes: &[ChunkChange]) -> String {
    let mut output = String::new();
    for (i, change) in changes.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        let _ = write!(output, "Chunk {}: {}", change.chunk_number, change.difference);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn translated(texts: &[Option<&str>]) -> TranslationDocument {
        TranslationDocument {
            title: "doc".to_string(),
            content: String::new(),
            chunks: texts
                .iter()
                .enumerate()
                .map(|(i, t)| DocumentChunk {
                    chunk_number: i,
                    chunk_content: format!("source {i}"),
                    final_chunk_translation: t.map(String::from),
                })
                .collect(),
            final_translation: None,
        }
    }

    #[test]
    fn test_from_source_respects_word_budget() {
        let content = "one two three\nfour five six\nseven eight nine\n";
        let doc = TranslationDocument::from_source("t", content, 6).unwrap();
        assert_eq!(doc.chunks.len(), 2);
        assert_eq!(doc.chunks[0].chunk_content, "one two three\nfour five six\n");
        assert_eq!(doc.chunks[1].chunk_number, 1);

        let joined: String = doc.chunks.iter().map(|c| c.chunk_content.as_str()).collect();
        assert_eq!(joined, content);
    }

    #[test]
    fn test_from_source_zero_budget_rejected() {
        let result = TranslationDocument::from_source("t", "text", 0);
        assert!(matches!(result, Err(Error::Split(_))));
    }

    #[test]
    fn test_is_finished() {
        assert!(translated(&[Some("a"), Some("b")]).is_finished());
        assert!(!translated(&[Some("a"), None]).is_finished());
        assert!(!translated(&[Some("a"), Some("")]).is_finished());
        assert!(translated(&[Some("a"), Some("   ")]).is_finished());

        let mut doc = translated(&[None]);
        doc.final_translation = Some("done".to_string());
        assert!(doc.is_finished());
    }

    #[test]
    fn test_finalize_joins_with_blank_line() {
        let mut doc = translated(&[Some("First."), Some("Second."), Some("Third.")]);
        let text = doc.finalize().unwrap();
        assert_eq!(text, "First.\n\nSecond.\n\nThird.");
        assert_eq!(doc.final_translation.as_deref(), Some(text.as_str()));
    }

    #[test]
    fn test_finalize_rejects_untranslated_chunk() {
        let mut doc = translated(&[Some("One."), None, Some("Three.")]);
        let err = doc.finalize().unwrap_err();
        assert!(matches!(
            err,
            Error::Document(DocumentError::Unfinished {
                missing: 1,
                total: 3
            })
        ));
        assert!(doc.final_translation.is_none());
    }

    #[test]
    fn test_finalize_keeps_whitespace_translation() {
        let mut doc = translated(&[Some("One."), Some("  ")]);
        assert_eq!(doc.finalize().unwrap(), "One.\n\n  ");
    }

    #[test]
    fn test_finalize_without_chunks() {
        let mut doc = translated(&[]);
        assert!(matches!(
            doc.finalize(),
            Err(Error::Document(DocumentError::NothingToFinalize))
        ));
    }

    #[test]
    fn test_finalize_partial_skips_gaps() {
        let mut doc = translated(&[Some("One."), None, Some("Three.")]);
        assert_eq!(doc.finalize_partial().unwrap(), "One.\n\nThree.");
        assert_eq!(doc.final_translation.as_deref(), Some("One.\n\nThree."));
    }

    #[test]
    fn test_finalize_partial_nothing_translated() {
        let mut doc = translated(&[None, Some("")]);
        assert!(matches!(
            doc.finalize_partial(),
            Err(Error::Document(DocumentError::NothingToFinalize))
        ));
    }

    #[test]
    fn test_summarize_changes() {
        let doc = translated(&[Some("hello world"), Some("alpha beta"), Some("same")]);
        let changes = doc
            .summarize_changes(&["hello brave world", "alpha", " same "])
            .unwrap();

        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].chunk_number, 1);
        assert_eq!(changes[0].difference, "Added: \"brave\"");
        assert_eq!(changes[1].chunk_number, 2);
        assert_eq!(changes[1].difference, "Deleted: \"beta\"");

        assert_eq!(
            render_changes(&changes),
            "Chunk 1: Added: \"brave\"\nChunk 2: Deleted: \"beta\""
        );
    }

    #[test]
    fn test_summarize_changes_untranslated_chunk() {
        let doc = translated(&[None]);
        let changes = doc.summarize_changes(&["new text"]).unwrap();
        assert_eq!(changes[0].difference, "Added: \"new text\"");
    }

    #[test]
    fn test_summarize_changes_count_mismatch() {
        let doc = translated(&[Some("a")]);
        let result = doc.summarize_changes(&["a", "b"]);
        assert!(matches!(
            result,
            Err(Error::Document(DocumentError::EditCountMismatch {
                expected: 1,
                actual: 2
            }))
        ));
    }

    #[test]
    fn test_apply_edits() {
        let mut doc = translated(&[None, Some("old")]);
        doc.apply_edits(&["x", "y"]).unwrap();
        assert_eq!(doc.chunks[0].final_chunk_translation.as_deref(), Some("x"));
        assert_eq!(doc.chunks[1].final_chunk_translation.as_deref(), Some("y"));
        assert!(doc.is_finished());
    }

    #[test]
    fn test_from_json_defaults() {
        let json = r#"{"title":"t","chunks":[{"chunk_number":0,"chunk_content":"x"}]}"#;
        let doc = TranslationDocument::from_json(json).unwrap();
        assert_eq!(doc.chunks.len(), 1);
        assert!(doc.chunks[0].final_chunk_translation.is_none());
        assert!(doc.final_translation.is_none());
    }

    #[test]
    fn test_from_json_malformed() {
        let result = TranslationDocument::from_json("{not json");
        assert!(matches!(
            result,
            Err(Error::Document(DocumentError::Serialization(_)))
        ));
    }

    #[test]
    fn test_render_changes_empty() {
        assert_eq!(render_changes(&[]), "");
    }
}
