//! Output formatting module

use anyhow::Result;
use evmatch_api::Report;
use std::io::Write;

/// Trait for report formatters
pub trait ReportFormatter: Send + Sync {
    /// Format and output one matching report
    fn format_report(&mut self, report: &Report) -> Result<()>;

    /// Finalize output (flush the writer)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text table
    Text,
    /// JSON summary (optionally with per-sample masks)
    Json,
    /// Markdown table
    Markdown,
}

impl OutputFormat {
    /// All formats, in listing order
    pub const ALL: [OutputFormat; 3] = [Self::Text, Self::Json, Self::Markdown];

    /// Name accepted by `--format`
    pub fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Markdown => "markdown",
        }
    }

    /// One-line description for `list formats`
    pub fn description(self) -> &'static str {
        match self {
            Self::Text => "Aligned table of per-type counts and F1 scores",
            Self::Json => "Machine-readable summary, optionally with per-sample masks",
            Self::Markdown => "Markdown table for reports and notebooks",
        }
    }
}

/// Options shared by the formatters
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Pretty print JSON
    pub pretty: bool,
    /// Include per-sample masks and IoU arrays in JSON
    pub include_masks: bool,
}

/// Create the formatter for `format` writing to `writer`
pub fn create_formatter<W>(
    format: OutputFormat,
    writer: W,
    options: FormatOptions,
) -> Box<dyn ReportFormatter>
where
    W: Write + Send + Sync + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, options)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

/// Width of the name column: the longest type name or "overall"
pub(crate) fn name_width(report: &Report) -> usize {
    report
        .names()
        .map(str::len)
        .chain([evmatch_api::config::defaults::OVERALL_KEY.len(), "type".len()])
        .max()
        .unwrap_or_default()
}
