//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats. JSON output carries the
//! chunking envelope (`chunks` + `total_chunks`) and errors as an
//! `{"error": ...}` payload for programmatic parsing.

use crate::core::ChunkSet;
use crate::error::Error;
use crate::io::truncate_graphemes;
use serde::Serialize;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string, defaulting to text.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Formats a chunking result.
#[must_use]
pub fn format_chunks(set: &ChunkSet, strategy: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_chunks_text(set, strategy),
        OutputFormat::Json => format_json(set),
    }
}

fn format_chunks_text(set: &ChunkSet, strategy: &str) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "{} chunks ({strategy} strategy):",
        set.total_chunks
    );
    let _ = writeln!(
        output,
        "{:<6} {:<10} {:<10} {:<8} Preview",
        "Index", "Start", "End", "Size"
    );
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for (index, chunk) in set.chunks.iter().enumerate() {
        let start = chunk
            .start
            .map_or_else(|| "-".to_string(), |s| s.to_string());
        let end = chunk.end.map_or_else(|| "-".to_string(), |e| e.to_string());
        let preview = truncate(&chunk.text.replace('\n', "\\n"), 30);
        let _ = writeln!(
            output,
            "{index:<6} {start:<10} {end:<10} {:<8} {preview}",
            chunk.size
        );
    }

    output
}

/// Formats the strategy listing.
#[must_use]
pub fn format_strategies(strategies: &[(&str, &str)], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            output.push_str("Available strategies:\n");
            for (name, description) in strategies {
                let _ = writeln!(output, "  {name:<12} {description}");
            }
            output
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct StrategyInfo<'a> {
                name: &'a str,
                description: &'a str,
            }
            let infos: Vec<StrategyInfo<'_>> = strategies
                .iter()
                .map(|(name, description)| StrategyInfo { name, description })
                .collect();
            format_json(&infos)
        }
    }
}

/// Formats an error for the chosen output format.
///
/// JSON mode produces the `{"error": "<message>"}` payload; text mode
/// produces the bare message.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorPayload {
                error: String,
            }
            format_json(&ErrorPayload {
                error: error.to_string(),
            })
        }
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Truncates a string to a grapheme-safe length with ellipsis.
fn truncate(s: &str, max_len: usize) -> String {
    let cut = truncate_graphemes(s, max_len);
    if cut.len() == s.len() {
        s.to_string()
    } else {
        format!("{cut}...")
    }
}
