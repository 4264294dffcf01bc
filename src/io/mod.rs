//! I/O utilities for transchunk.
//!
//! Source documents are read from files (memory mapped when large) or
//! standard input; chunks can be written out one file each.

pub mod reader;
pub mod unicode;

pub use reader::{FileReader, STDIN_PATH, read_file, read_input, write_chunks, write_file};
pub use unicode::{grapheme_count, single_line_preview, truncate_graphemes};
