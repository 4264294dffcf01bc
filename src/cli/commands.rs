//! CLI command implementations.
//!
//! Contains the business logic for each CLI command. Every command returns
//! its rendered output; printing is left to the binary.

use crate::chunking::{SplitConfig, available_strategies, create_splitter, split_batch};
use crate::cli::output::{
    OutputFormat, SplitReport, format_changes, format_diff, format_finalized, format_prepared,
    format_split, format_strategies, format_write_chunks_result,
};
use crate::cli::parser::{Cli, Commands};
use crate::core::TranslationDocument;
use crate::diff::{diff_words, format_segments};
use crate::error::{CommandError, Result};
use crate::io::{STDIN_PATH, read_file, read_input, write_chunks, write_file};
use std::path::{Path, PathBuf};

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);

    match &cli.command {
        Commands::Split {
            files,
            strategy,
            max_words,
        } => cmd_split(files, strategy, *max_words, format),
        Commands::Diff {
            original,
            modified,
            inline,
        } => cmd_diff(original, modified, *inline, format),
        Commands::WriteChunks {
            file,
            out_dir,
            prefix,
            strategy,
            max_words,
        } => cmd_write_chunks(file, out_dir, prefix, strategy, *max_words, format),
        Commands::Prepare {
            file,
            title,
            max_words,
            output,
        } => cmd_prepare(file, title.as_deref(), *max_words, output.as_deref(), format),
        Commands::Finalize {
            document,
            allow_partial,
            output,
        } => cmd_finalize(document, *allow_partial, output.as_deref(), format),
        Commands::Changes { document, edits } => cmd_changes(document, edits, format),
        Commands::Strategies => Ok(cmd_strategies(format)),
    }
}

fn source_name(path: &Path) -> String {
    if path.as_os_str() == STDIN_PATH {
        STDIN_PATH.to_string()
    } else {
        path.display().to_string()
    }
}

fn cmd_split(
    files: &[PathBuf],
    strategy: &str,
    max_words: usize,
    format: OutputFormat,
) -> Result<String> {
    let splitter = create_splitter(strategy, max_words)?;
    let config = SplitConfig::with_max_words(max_words);

    let sources: Vec<String> = if files.is_empty() {
        vec![STDIN_PATH.to_string()]
    } else {
        files.iter().map(|f| source_name(f)).collect()
    };

    if sources.iter().filter(|s| *s == STDIN_PATH).count() > 1 {
        return Err(CommandError::InvalidArgument(
            "standard input can only be read once".to_string(),
        )
        .into());
    }

    let texts = sources
        .iter()
        .map(|s| read_input(Some(Path::new(s))))
        .collect::<Result<Vec<_>>>()?;

    tracing::info!(
        strategy = splitter.name(),
        documents = texts.len(),
        "splitting input"
    );

    let results = split_batch(splitter.as_ref(), &texts, Some(&config))?;

    let reports: Vec<SplitReport> = sources
        .into_iter()
        .zip(results)
        .map(|(source, paragraphs)| SplitReport {
            source,
            strategy: splitter.name().to_string(),
            paragraphs,
        })
        .collect();

    Ok(format_split(&reports, format))
}

fn cmd_diff(original: &str, modified: &str, inline: bool, format: OutputFormat) -> Result<String> {
    let (original, modified) = if inline {
        (original.to_string(), modified.to_string())
    } else {
        (read_file(original)?, read_file(modified)?)
    };

    let segments = diff_words(&original, &modified);
    let summary = format_segments(&segments);
    tracing::debug!(
        segments = segments.len(),
        changed = !summary.is_empty(),
        "computed word difference"
    );

    Ok(format_diff(&summary, &segments, format))
}

fn cmd_write_chunks(
    file: &Path,
    out_dir: &Path,
    prefix: &str,
    strategy: &str,
    max_words: usize,
    format: OutputFormat,
) -> Result<String> {
    if prefix.is_empty() || prefix.contains(['/', '\\']) {
        return Err(CommandError::InvalidArgument(format!(
            "invalid filename prefix: '{prefix}'"
        ))
        .into());
    }

    let content = read_input(Some(file))?;
    let splitter = create_splitter(strategy, max_words)?;
    let config = SplitConfig::with_max_words(max_words).source(&source_name(file));
    let paragraphs = splitter.split(&content, Some(&config))?;

    let paths = write_chunks(
        out_dir,
        paragraphs.iter().map(|p| (p.index, p.content.as_str())),
        prefix,
    )?;

    tracing::info!(
        chunks = paths.len(),
        out_dir = %out_dir.display(),
        "wrote chunks"
    );

    Ok(format_write_chunks_result(&paths, format))
}

fn cmd_prepare(
    file: &Path,
    title: Option<&str>,
    max_words: usize,
    output: Option<&Path>,
    format: OutputFormat,
) -> Result<String> {
    let content = read_input(Some(file))?;
    let title = title.map(String::from).unwrap_or_else(|| {
        file.file_stem()
            .and_then(|n| n.to_str())
            .filter(|n| *n != STDIN_PATH)
            .unwrap_or("untitled")
            .to_string()
    });

    let document = TranslationDocument::from_source(&title, &content, max_words)?;

    let written_to = if let Some(path) = output {
        let json = serde_json::to_string_pretty(&document)?;
        write_file(path, &json)?;
        Some(path.display().to_string())
    } else {
        None
    };

    Ok(format_prepared(&document, written_to.as_deref(), format))
}

fn load_document(path: &Path) -> Result<TranslationDocument> {
    let document = TranslationDocument::from_json(&read_file(path)?)?;
    tracing::debug!(
        title = %document.title,
        chunks = document.chunks.len(),
        "loaded document"
    );
    Ok(document)
}

fn cmd_finalize(
    document_path: &Path,
    allow_partial: bool,
    output: Option<&Path>,
    format: OutputFormat,
) -> Result<String> {
    let mut document = load_document(document_path)?;

    let text = if allow_partial {
        let missing = document.untranslated_count();
        if missing > 0 {
            tracing::warn!(
                missing,
                total = document.chunks.len(),
                "finalizing with untranslated chunks"
            );
        }
        document.finalize_partial()?
    } else {
        document.finalize()?
    };

    let written_to = if let Some(path) = output {
        write_file(path, &text)?;
        Some(path.display().to_string())
    } else {
        None
    };

    Ok(format_finalized(
        &document,
        &text,
        written_to.as_deref(),
        format,
    ))
}

fn cmd_changes(document_path: &Path, edits_path: &Path, format: OutputFormat) -> Result<String> {
    let document = load_document(document_path)?;
    let edits: Vec<String> = serde_json::from_str(&read_file(edits_path)?)?;

    let changes = document.summarize_changes(&edits)?;
    tracing::info!(
        changed = changes.len(),
        total = document.chunks.len(),
        "summarized chunk edits"
    );

    Ok(format_changes(&changes, format))
}

fn cmd_strategies(format: OutputFormat) -> String {
    let strategies: Vec<(&str, &str)> = available_strategies()
        .into_iter()
        .filter_map(|name| {
            create_splitter(name, crate::chunking::DEFAULT_MAX_WORDS)
                .ok()
                .map(|s| (name, s.description()))
        })
        .collect();

    format_strategies(&strategies, format)
}
