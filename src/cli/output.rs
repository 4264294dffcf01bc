//! Output formatting for CLI commands.
//!
//! Supports text, JSON, and newline-delimited JSON output formats.

use crate::core::{ChunkChange, Paragraph, TranslationDocument, render_changes};
use crate::diff::DiffSegment;
use crate::error::Error;
use serde::Serialize;
use std::fmt::Write;

/// Width of the preview column in chunk listings.
const PREVIEW_WIDTH: usize = 40;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Pretty-printed JSON output.
    Json,
    /// One compact JSON object per line.
    Ndjson,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "ndjson" | "jsonl" => Self::Ndjson,
            _ => Self::Text,
        }
    }
}

/// Paragraphs split from one input.
#[derive(Debug, Clone, Serialize)]
pub struct SplitReport {
    /// Input path, or `-` for stdin.
    pub source: String,
    /// Strategy that produced the paragraphs.
    pub strategy: String,
    /// The paragraphs, in order.
    pub paragraphs: Vec<Paragraph>,
}

/// Formats the result of `split`.
#[must_use]
pub fn format_split(reports: &[SplitReport], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_split_text(reports),
        OutputFormat::Json => format_json(&reports),
        OutputFormat::Ndjson => {
            #[derive(Serialize)]
            struct Line<'a> {
                source: &'a str,
                #[serde(flatten)]
                paragraph: &'a Paragraph,
            }
            format_ndjson(reports.iter().flat_map(|r| {
                r.paragraphs.iter().map(move |paragraph| Line {
                    source: &r.source,
                    paragraph,
                })
            }))
        }
    }
}

fn format_split_text(reports: &[SplitReport]) -> String {
    let mut output = String::new();

    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        let _ = writeln!(
            output,
            "{}: {} chunks ({})",
            report.source,
            report.paragraphs.len(),
            report.strategy
        );
        if report.paragraphs.is_empty() {
            continue;
        }
        let _ = writeln!(
            output,
            "{:<6} {:<5} {:<16} {:<6} Preview",
            "Index", "Kind", "Bytes", "Words"
        );
        output.push_str(&"-".repeat(70));
        output.push('\n');

        for p in &report.paragraphs {
            let kind = if p.is_code() { "code" } else { "text" };
            let _ = writeln!(
                output,
                "{:<6} {:<5} {:<16} {:<6} {}",
                p.index,
                kind,
                format!("{}..{}", p.start(), p.end()),
                p.word_count(),
                p.preview(PREVIEW_WIDTH)
            );
        }
    }

    output
}

/// Formats the result of `diff`.
#[must_use]
pub fn format_diff(summary: &str, segments: &[DiffSegment], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            if summary.is_empty() {
                "No word-level differences.\n".to_string()
            } else {
                format!("{summary}\n")
            }
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct DiffOutput<'a> {
                summary: &'a str,
                changed: bool,
                segments: &'a [DiffSegment],
            }
            format_json(&DiffOutput {
                summary,
                changed: !summary.is_empty(),
                segments,
            })
        }
        OutputFormat::Ndjson => format_ndjson(segments.iter().filter(|s| s.is_change())),
    }
}

/// Formats write chunks result.
#[must_use]
pub fn format_write_chunks_result(paths: &[String], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            let _ = writeln!(output, "Wrote {} chunks:", paths.len());
            for path in paths {
                let _ = writeln!(output, "  {path}");
            }
            output
        }
        OutputFormat::Json => format_json(&paths),
        OutputFormat::Ndjson => format_ndjson(paths.iter()),
    }
}

/// Formats a newly prepared document.
///
/// Without an output path the document itself is printed as JSON, since
/// it is the input to later commands.
#[must_use]
pub fn format_prepared(
    document: &TranslationDocument,
    written_to: Option<&str>,
    format: OutputFormat,
) -> String {
    let Some(path) = written_to else {
        return match format {
            OutputFormat::Ndjson => format_ndjson(std::iter::once(document)),
            OutputFormat::Text | OutputFormat::Json => format_json(document),
        };
    };

    match format {
        OutputFormat::Text => format!(
            "Prepared '{}' with {} chunks: {path}\n",
            document.title,
            document.chunks.len()
        ),
        OutputFormat::Json | OutputFormat::Ndjson => {
            let result = serde_json::json!({
                "title": document.title,
                "chunk_count": document.chunks.len(),
                "path": path,
            });
            if format == OutputFormat::Json {
                format_json(&result)
            } else {
                format_ndjson(std::iter::once(&result))
            }
        }
    }
}

/// Formats the result of `finalize`.
#[must_use]
pub fn format_finalized(
    document: &TranslationDocument,
    text: &str,
    written_to: Option<&str>,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Text => written_to.map_or_else(
            || {
                let mut output = text.to_string();
                if !output.ends_with('\n') {
                    output.push('\n');
                }
                output
            },
            |path| {
                format!(
                    "Finalized '{}' ({} of {} chunks translated): {path}\n",
                    document.title,
                    document.chunks.len() - document.untranslated_count(),
                    document.chunks.len()
                )
            },
        ),
        OutputFormat::Json | OutputFormat::Ndjson => {
            let result = serde_json::json!({
                "title": document.title,
                "chunk_count": document.chunks.len(),
                "untranslated": document.untranslated_count(),
                "path": written_to,
                "final_translation": text,
            });
            if format == OutputFormat::Json {
                format_json(&result)
            } else {
                format_ndjson(std::iter::once(&result))
            }
        }
    }
}

/// Formats the result of `changes`.
#[must_use]
pub fn format_changes(changes: &[ChunkChange], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            if changes.is_empty() {
                "No changes.\n".to_string()
            } else {
                render_changes(changes) + "\n"
            }
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ChangesOutput<'a> {
                summary: String,
                changes: &'a [ChunkChange],
            }
            format_json(&ChangesOutput {
                summary: render_changes(changes),
                changes,
            })
        }
        OutputFormat::Ndjson => format_ndjson(changes.iter()),
    }
}

/// Formats the strategy listing.
#[must_use]
pub fn format_strategies(strategies: &[(&str, &str)], format: OutputFormat) -> String {
    #[derive(Serialize)]
    struct Strategy<'a> {
        name: &'a str,
        description: &'a str,
    }
    let items = strategies
        .iter()
        .map(|(name, description)| Strategy { name, description });

    match format {
        OutputFormat::Text => {
            let mut output = String::from("Strategies:\n");
            for (name, description) in strategies {
                let _ = writeln!(output, "  {name:<10} {description}");
            }
            output
        }
        OutputFormat::Json => format_json(&items.collect::<Vec<_>>()),
        OutputFormat::Ndjson => format_ndjson(items),
    }
}

/// Formats an error for display.
///
/// Text errors are plain messages; JSON errors carry a stable `type` so
/// callers can branch on them.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    let kind = match error {
        Error::Split(_) => "split_error",
        Error::Io(_) => "io_error",
        Error::Command(_) => "command_error",
        Error::Document(_) => "document_error",
    };

    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json | OutputFormat::Ndjson => {
            let value = serde_json::json!({
                "error": {
                    "type": kind,
                    "message": error.to_string(),
                }
            });
            if format == OutputFormat::Json {
                format_json(&value)
            } else {
                format_ndjson(std::iter::once(&value))
            }
        }
    }
}

/// Formats a value as pretty JSON ending in a newline.
fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
    let mut output = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
    output.push('\n');
    output
}

/// Formats each item as one line of compact JSON.
fn format_ndjson<T: Serialize, I: IntoIterator<Item = T>>(items: I) -> String {
    let mut output = String::new();
    for item in items {
        if let Ok(line) = serde_json::to_string(&item) {
            output.push_str(&line);
            output.push('\n');
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunking::{ParagraphSplitter, Splitter};
    use crate::error::DocumentError;

    fn report(text: &str) -> SplitReport {
        SplitReport {
            source: "doc.md".to_string(),
            strategy: "paragraph".to_string(),
            paragraphs: ParagraphSplitter::new().split(text, None).unwrap(),
        }
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("ndjson"), OutputFormat::Ndjson);
        assert_eq!(OutputFormat::parse("jsonl"), OutputFormat::Ndjson);
        assert_eq!(OutputFormat::parse("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::parse("unknown"), OutputFormat::Text);
    }

    #[test]
    fn test_format_split_text() {
        let text = format_split(&[report("One.\n\n```\nx\n```\n")], OutputFormat::Text);
        assert!(text.starts_with("doc.md: 2 chunks (paragraph)"));
        assert!(text.contains("code"));
        assert!(text.contains("One.\\n\\n"));
    }

    #[test]
    fn test_format_split_ndjson() {
        let out = format_split(&[report("a\n\nb")], OutputFormat::Ndjson);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["source"], "doc.md");
        assert_eq!(first["content"], "a\n\n");
    }

    #[test]
    fn test_format_diff() {
        assert_eq!(
            format_diff("", &[], OutputFormat::Text),
            "No word-level differences.\n"
        );
        let segments = vec![DiffSegment::Added("x".to_string())];
        let json = format_diff("Added: \"x\"", &segments, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["changed"], true);
        assert_eq!(value["segments"][0]["op"], "added");
    }

    #[test]
    fn test_format_changes() {
        let changes = vec![ChunkChange {
            chunk_number: 2,
            difference: "Added: \"x\"".to_string(),
        }];
        assert_eq!(
            format_changes(&changes, OutputFormat::Text),
            "Chunk 2: Added: \"x\"\n"
        );
        assert_eq!(format_changes(&[], OutputFormat::Text), "No changes.\n");
        assert_eq!(format_changes(&changes, OutputFormat::Ndjson).lines().count(), 1);
    }

    #[test]
    fn test_format_strategies() {
        let list = [("paragraph", "Paragraphs"), ("words", "Word budget")];
        assert!(format_strategies(&list, OutputFormat::Text).contains("words"));
        let json = format_strategies(&list, OutputFormat::Json);
        assert!(json.contains("\"name\": \"paragraph\""));
    }

    #[test]
    fn test_format_error() {
        let err: Error = DocumentError::NothingToFinalize.into();
        let text = format_error(&err, OutputFormat::Text);
        assert!(text.contains("no translated chunks"));

        let json = format_error(&err, OutputFormat::Ndjson);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["error"]["type"], "document_error");
        assert_eq!(json.lines().count(), 1);
        assert!(json.ends_with('\n'));
    }

    #[test]
    fn test_json_output_ends_with_newline() {
        let err: Error = DocumentError::NothingToFinalize.into();
        let outputs = [
            format_split(&[report("a\n\nb")], OutputFormat::Json),
            format_diff("", &[], OutputFormat::Json),
            format_changes(&[], OutputFormat::Json),
            format_strategies(&[("words", "Word budget")], OutputFormat::Json),
            format_error(&err, OutputFormat::Json),
            format_prepared(&TranslationDocument::default(), None, OutputFormat::Json),
        ];
        for output in outputs {
            assert!(output.ends_with("}\n") || output.ends_with("]\n"), "{output:?}");
            assert!(!output.ends_with("\n\n"));
        }
    }
}
