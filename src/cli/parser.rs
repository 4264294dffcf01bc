//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::chunking::DEFAULT_MAX_WORDS;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// transchunk: split documents for translation and track edits.
///
/// Cuts prose into paragraphs while keeping fenced code blocks whole,
/// groups text into word-budgeted chunks, and summarizes word-level
/// changes between two versions of a translation.
#[derive(Parser, Debug)]
#[command(name = "transchunk")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging on stderr (overridden by `RUST_LOG`).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json, ndjson).
    #[arg(long, default_value = "text", global = true, env = "TRANSCHUNK_FORMAT")]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split documents into chunks.
    ///
    /// Reads standard input when no file (or `-`) is given.
    Split {
        /// Input files.
        files: Vec<PathBuf>,

        /// Splitting strategy (paragraph, words).
        #[arg(short, long, default_value = "paragraph")]
        strategy: String,

        /// Word budget per chunk for the words strategy.
        #[arg(long, default_value_t = DEFAULT_MAX_WORDS, env = "TRANSCHUNK_MAX_WORDS")]
        max_words: usize,
    },

    /// Summarize word-level changes between two texts.
    Diff {
        /// Original text file.
        original: String,

        /// Modified text file.
        modified: String,

        /// Treat ORIGINAL and MODIFIED as literal text instead of paths.
        #[arg(short, long)]
        inline: bool,
    },

    /// Split a document and write each chunk to its own file.
    WriteChunks {
        /// Input file (`-` for stdin).
        file: PathBuf,

        /// Output directory.
        #[arg(short, long, default_value = "chunks")]
        out_dir: PathBuf,

        /// Filename prefix.
        #[arg(long, default_value = "chunk")]
        prefix: String,

        /// Splitting strategy (paragraph, words).
        #[arg(short, long, default_value = "paragraph")]
        strategy: String,

        /// Word budget per chunk for the words strategy.
        #[arg(long, default_value_t = DEFAULT_MAX_WORDS, env = "TRANSCHUNK_MAX_WORDS")]
        max_words: usize,
    },

    /// Create a translation document from a source file.
    Prepare {
        /// Source file (`-` for stdin).
        file: PathBuf,

        /// Document title (defaults to the file name).
        #[arg(short, long)]
        title: Option<String>,

        /// Word budget per chunk.
        #[arg(long, default_value_t = DEFAULT_MAX_WORDS, env = "TRANSCHUNK_MAX_WORDS")]
        max_words: usize,

        /// Write the document JSON here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Join a document's chunk translations into the final text.
    Finalize {
        /// Translation document (JSON).
        document: PathBuf,

        /// Skip untranslated chunks instead of failing.
        #[arg(long)]
        allow_partial: bool,

        /// Write the final text here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Summarize per-chunk edits against a document.
    Changes {
        /// Translation document (JSON).
        document: PathBuf,

        /// Edited chunk texts (JSON array of strings, one per chunk).
        edits: PathBuf,
    },

    /// List available splitting strategies.
    Strategies,
}
