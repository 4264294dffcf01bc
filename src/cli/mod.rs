//! CLI layer for transchunk.
//!
//! Provides the command-line interface using clap, with commands for
//! splitting documents, diffing translations, and assembling final text.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
