//! Plain text output formatter

use super::{name_width, ReportFormatter};
use anyhow::Result;
use evmatch_api::{config::defaults::OVERALL_KEY, MatchCounts, Report};
use std::io::Write;

/// Plain text formatter - outputs an aligned table, one row per type
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_row(&mut self, width: usize, name: &str, counts: &MatchCounts, f1: f64) -> Result<()> {
        writeln!(
            self.writer,
            "{name:<width$}  {:>6}  {:>10}  {:>12}  {:>6}  {:>6.4}",
            counts.hits,
            counts.false_alarms_overlap,
            counts.false_alarms_unmatched,
            counts.misses,
            f1
        )?;
        Ok(())
    }
}

impl<W: Write + Send + Sync> ReportFormatter for TextFormatter<W> {
    fn format_report(&mut self, report: &Report) -> Result<()> {
        let width = name_width(report);

        writeln!(
            self.writer,
            "IoU threshold: {}  samples: {}",
            report.iou_threshold, report.samples
        )?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{:<width$}  {:>6}  {:>10}  {:>12}  {:>6}  {:>6}",
            "type", "hits", "fa_overlap", "fa_unmatched", "misses", "f1"
        )?;
        writeln!(self.writer, "{}", "-".repeat(width + 50))?;

        for entry in report {
            self.write_row(width, &entry.name, &entry.result.counts, entry.result.f1_score)?;
        }

        writeln!(self.writer, "{}", "-".repeat(width + 50))?;
        let overall = report.overall();
        self.write_row(width, OVERALL_KEY, &overall.counts, overall.f1_score)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
