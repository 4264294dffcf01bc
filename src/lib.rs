//! # transchunk
//!
//! Text utilities for a translation workbench.
//!
//! transchunk cuts documents into units a translator (human or model) can
//! work on one at a time, and summarizes how a translation was edited.
//!
//! ## Features
//!
//! - **Paragraph splitting**: blank-line separated prose, with fenced code
//!   blocks kept whole
//! - **Word budgets**: line groups of bounded word count for translation requests
//! - **Word diffs**: one-line `Added: "..." | Deleted: "..."` change summaries
//! - **Documents**: per-chunk translations joined into a final text
//!
//! ```
//! use transchunk::{split_into_paragraphs, word_difference};
//!
//! let chunks = split_into_paragraphs(Some("Intro.\n\n```\nlet x = 1;\n```\n"));
//! assert_eq!(chunks, vec!["Intro.\n\n", "```\nlet x = 1;\n```\n"]);
//!
//! assert_eq!(word_difference("a red car", "a blue car"), "Deleted: \"red\" | Added: \"blue\"");
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
// Note: unsafe is needed for memory-mapped I/O (memmap2)
#![warn(unsafe_code)]

pub mod chunking;
pub mod cli;
pub mod core;
pub mod diff;
pub mod error;
pub mod io;
pub mod logging;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use core::{ChunkChange, DocumentChunk, Paragraph, ParagraphKind, TranslationDocument};

// Re-export splitting types
pub use chunking::{
    ParagraphSplitter, SplitConfig, Splitter, WordBudgetSplitter, available_strategies,
    create_splitter, split_batch, split_into_paragraphs,
};

// Re-export diff types
pub use diff::{DiffSegment, diff_words, word_difference};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
