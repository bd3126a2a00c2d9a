//! JSON output formatter

use super::{FormatOptions, ReportFormatter};
use anyhow::Result;
use evmatch_api::{MatchCounts, Report};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs a count summary, or the full report with masks
pub struct JsonFormatter<W: Write> {
    writer: W,
    options: FormatOptions,
}

/// Summary of one report
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportSummary {
    /// IoU threshold used
    pub iou_threshold: f64,
    /// Samples per sequence
    pub samples: usize,
    /// Per-type summaries in evaluation order
    pub types: Vec<TypeSummary>,
    /// Totals over all types
    pub overall: CountsSummary,
}

/// Summary of one evaluated type
#[derive(Debug, Serialize, Deserialize)]
pub struct TypeSummary {
    /// Display name
    pub name: String,
    /// Evaluated label
    pub label: i32,
    /// Event counts and scores
    #[serde(flatten)]
    pub counts: CountsSummary,
    /// Hit pairs as 1-based event ids
    pub matches: Vec<MatchData>,
}

/// Event counts and derived scores
#[derive(Debug, Serialize, Deserialize)]
pub struct CountsSummary {
    /// Matched ground-truth events
    pub hits: usize,
    /// All false alarms
    pub false_alarms: usize,
    /// Overlapping predictions at or below the threshold
    pub false_alarms_overlap: usize,
    /// Predictions with no qualifying overlap
    pub false_alarms_unmatched: usize,
    /// Unmatched ground-truth events
    pub misses: usize,
    /// Event-level precision
    pub precision: f64,
    /// Event-level recall
    pub recall: f64,
    /// Event-level F1
    pub f1_score: f64,
}

/// One hit pair
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchData {
    /// Ground-truth event id
    pub ground_truth: usize,
    /// Prediction event id
    pub prediction: usize,
    /// IoU of the pair
    pub iou: f64,
}

impl From<&MatchCounts> for CountsSummary {
    fn from(counts: &MatchCounts) -> Self {
        Self {
            hits: counts.hits,
            false_alarms: counts.false_alarms(),
            false_alarms_overlap: counts.false_alarms_overlap,
            false_alarms_unmatched: counts.false_alarms_unmatched,
            misses: counts.misses,
            precision: counts.precision(),
            recall: counts.recall(),
            f1_score: counts.f1_score(),
        }
    }
}

impl From<&Report> for ReportSummary {
    fn from(report: &Report) -> Self {
        let types = report
            .iter()
            .map(|entry| TypeSummary {
                name: entry.name.clone(),
                label: entry.label,
                counts: CountsSummary::from(&entry.result.counts),
                matches: entry
                    .result
                    .matches
                    .iter()
                    .map(|pair| MatchData {
                        ground_truth: pair.ground_truth.get(),
                        prediction: pair.prediction.get(),
                        iou: pair.iou,
                    })
                    .collect(),
            })
            .collect();

        Self {
            iou_threshold: report.iou_threshold,
            samples: report.samples,
            types,
            overall: CountsSummary::from(&report.overall().counts),
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self { writer, options }
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> Result<()> {
        if self.options.pretty {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write + Send + Sync> ReportFormatter for JsonFormatter<W> {
    fn format_report(&mut self, report: &Report) -> Result<()> {
        if self.options.include_masks {
            self.write_value(report)
        } else {
            self.write_value(&ReportSummary::from(report))
        }
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::reference_report;
    use super::*;
    use serde_json::Value;

    fn render(options: FormatOptions) -> Value {
        let mut formatter = JsonFormatter::new(Vec::new(), options);
        formatter.format_report(&reference_report()).unwrap();
        formatter.finish().unwrap();
        serde_json::from_slice(&formatter.writer).unwrap()
    }

    #[test]
    fn test_summary_fields() {
        let value = render(FormatOptions::default());

        assert_eq!(value["samples"], 35);
        assert_eq!(value["types"][2]["name"], "pso");
        assert_eq!(value["types"][2]["false_alarms_unmatched"], 1);
        assert_eq!(value["types"][3]["f1_score"], 1.0);
        assert_eq!(value["types"][3]["matches"][0]["ground_truth"], 5);
        assert_eq!(value["types"][3]["matches"][0]["prediction"], 4);
        assert_eq!(value["overall"]["hits"], 5);
        assert_eq!(value["overall"]["false_alarms"], 3);
        assert!(value["types"][0].get("masks").is_none());
    }

    #[test]
    fn test_masks_included_on_request() {
        let value = render(FormatOptions {
            pretty: true,
            include_masks: true,
        });

        let hit = value["types"][3]["result"]["masks"]["hit"].as_array().unwrap();
        assert_eq!(hit.len(), 35);
        assert_eq!(value["overall"]["counts"]["misses"], 5);
    }

    #[test]
    fn test_summary_deserializes() {
        let summary = ReportSummary::from(&reference_report());
        let json = serde_json::to_string(&summary).unwrap();
        let parsed: ReportSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.types.len(), 4);
        assert_eq!(parsed.overall.misses, 5);
    }
}
