//! Public API for event-level IoU matching
//!
//! This crate wraps the core matching algorithm in a small, stable surface:
//! validate the configuration once, feed it ground-truth and prediction
//! label sequences, and read back a [`Report`] keyed by label name.
//!
//! ```rust
//! use evmatch_api::{match_events, MatchConfig};
//!
//! let gt = [0, 0, 0, 1, 1, 1];
//! let alg = [0, 0, 0, 1, 1, 1];
//!
//! let config = MatchConfig::builder()
//!     .label_names(["fixation", "saccade"])
//!     .build()
//!     .unwrap();
//! let report = match_events(&gt, &alg, &config).unwrap();
//!
//! assert_eq!(report.get("saccade").unwrap().f1_score, 1.0);
//! assert_eq!(report.overall().counts.hits, 2);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod input;
pub mod report;

use evmatch_core::{aggregate, executor, Label, Matcher, SegmentedPair};

// Re-export key types
pub use config::{MatchConfig, MatchConfigBuilder};
pub use error::{ApiError, ErrorKind, Result};
pub use evmatch_core::{
    event_level_f1, EventId, EventMatch, EventSpan, ExecutionMode, IouThreshold, MatchCounts,
    OverallResult, SampleMasks, TypeResult,
};
pub use input::{parse_labels, Input};
pub use report::{Report, ReportEntry, TypeReport};

/// Reusable matcher holding a validated configuration
#[derive(Debug, Clone, Default)]
pub struct EventMatcher {
    config: MatchConfig,
}

impl EventMatcher {
    /// Create a matcher with default configuration (IoU > 0.5, all types)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a matcher with a specific configuration
    pub fn with_config(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Create a matcher with a specific IoU threshold
    pub fn with_threshold(threshold: f64) -> Result<Self> {
        let config = MatchConfig::builder().iou_threshold(threshold).build()?;
        Ok(Self::with_config(config))
    }

    /// Get the current configuration
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Match two in-memory label sequences
    pub fn process(&self, ground_truth: &[Label], prediction: &[Label]) -> Result<Report> {
        let pair = SegmentedPair::new(ground_truth, prediction)?;
        let types = self.config.resolve_types(pair.observed_labels())?;
        let labels: Vec<Label> = types.iter().map(|(label, _)| *label).collect();

        tracing::debug!(
            samples = pair.len(),
            types = labels.len(),
            iou_threshold = self.config.iou_threshold.value(),
            "matching events"
        );

        let matcher = Matcher::new(&pair, self.config.iou_threshold);
        let results = executor::run_types(&matcher, &labels, &self.config.executor)?;
        let overall = aggregate(pair.len(), &results);

        let types = types
            .into_iter()
            .zip(results)
            .map(|((label, name), result)| TypeReport {
                name,
                label,
                result,
            })
            .collect();

        Ok(Report {
            iou_threshold: self.config.iou_threshold.value(),
            samples: pair.len(),
            types,
            overall,
        })
    }

    /// Read both sequences from their sources, then match them
    pub fn process_inputs(&self, ground_truth: Input, prediction: Input) -> Result<Report> {
        let ground_truth = ground_truth.read_labels()?;
        let prediction = prediction.read_labels()?;
        self.process(&ground_truth, &prediction)
    }
}

// Convenience functions

/// Match two label sequences with a given configuration
pub fn match_events(
    ground_truth: &[Label],
    prediction: &[Label],
    config: &MatchConfig,
) -> Result<Report> {
    EventMatcher::with_config(config.clone()).process(ground_truth, prediction)
}

/// Match two label sequences with default configuration
pub fn match_with_defaults(ground_truth: &[Label], prediction: &[Label]) -> Result<Report> {
    EventMatcher::new().process(ground_truth, prediction)
}

/// Match two label files with a given configuration
pub fn match_files<P: AsRef<std::path::Path>>(
    ground_truth: P,
    prediction: P,
    config: &MatchConfig,
) -> Result<Report> {
    EventMatcher::with_config(config.clone()).process_inputs(
        Input::from_file(ground_truth.as_ref()),
        Input::from_file(prediction.as_ref()),
    )
}
