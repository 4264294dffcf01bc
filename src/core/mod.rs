//! Core domain models for transchunk.
//!
//! Paragraphs produced by the splitters and the translation documents
//! assembled from them. These are plain data types with no I/O.

pub mod document;
pub mod paragraph;

pub use document::{
    ChunkChange, DocumentChunk, FINAL_SEPARATOR, TranslationDocument, render_changes,
};
pub use paragraph::{Paragraph, ParagraphKind, ParagraphMetadata, count_words};
