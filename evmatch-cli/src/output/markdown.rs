//! Markdown output formatter

use super::ReportFormatter;
use anyhow::Result;
use evmatch_api::{config::defaults::OVERALL_KEY, MatchCounts, Report};
use std::io::Write;

/// Markdown formatter - outputs the report as a markdown table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_row(&mut self, name: &str, counts: &MatchCounts, f1: f64) -> Result<()> {
        writeln!(
            self.writer,
            "| {name} | {} | {} | {} | {} | {f1:.4} |",
            counts.hits, counts.false_alarms_overlap, counts.false_alarms_unmatched, counts.misses
        )?;
        Ok(())
    }
}

impl<W: Write + Send + Sync> ReportFormatter for MarkdownFormatter<W> {
    fn format_report(&mut self, report: &Report) -> Result<()> {
        writeln!(self.writer, "## Event-level matching")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Type | Hits | FA (overlap) | FA (unmatched) | Misses | F1 |")?;
        writeln!(self.writer, "|------|-----:|-------------:|---------------:|-------:|---:|")?;

        for entry in report {
            self.write_row(&entry.name, &entry.result.counts, entry.result.f1_score)?;
        }
        let overall = report.overall();
        self.write_row(&format!("**{OVERALL_KEY}**"), &overall.counts, overall.f1_score)?;

        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*IoU threshold: {}, samples: {}*",
            report.iou_threshold, report.samples
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
