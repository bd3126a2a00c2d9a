//! Event-level matching of label sequences using Intersection over Union
//!
//! Two equal-length sample sequences of categorical labels (a ground-truth
//! annotation and an algorithm's prediction, e.g. classified eye-movement
//! states) are segmented into events. For each label type, ground-truth
//! events are paired with predicted events whose IoU strictly exceeds a
//! threshold; every event is consumed at most once. Unpaired ground-truth
//! events are misses, unpaired predictions are false alarms, and the counts
//! feed an event-level F1 score.
//!
//! # Architecture
//!
//! - [`segment`]: run-length encoding into an [`EventTable`]
//! - [`mask`]: per-type binarization
//! - [`matcher`]: the per-type matching pass
//! - [`aggregate`]: union of per-type results
//! - [`metric`]: event-level F1
//! - [`executor`]: sequential or parallel dispatch of type passes
//!
//! # Example
//!
//! ```rust
//! use evmatch_core::{evaluate, ExecutorConfig, IouThreshold};
//!
//! let gt = [0, 1, 1, 1, 0];
//! let pred = [0, 1, 1, 0, 0];
//!
//! let evaluation = evaluate(&gt, &pred, None, IouThreshold::DEFAULT, &ExecutorConfig::default())
//!     .unwrap();
//!
//! let saccades = &evaluation.results[1];
//! assert_eq!(saccades.counts.hits, 1);
//! assert!((saccades.matches[0].iou - 2.0 / 3.0).abs() < 1e-9);
//! ```

pub mod aggregate;
pub mod error;
pub mod executor;
pub mod mask;
pub mod matcher;
pub mod metric;
pub mod result;
pub mod segment;
pub mod types;

pub use aggregate::aggregate;
pub use error::{CoreError, Result};
pub use executor::{ExecutionMode, Executor, ExecutorConfig};
pub use mask::type_mask;
pub use matcher::{Matcher, SegmentedPair};
pub use metric::{event_level_f1, event_level_precision, event_level_recall};
pub use result::{EventMatch, MatchCounts, OverallResult, SampleMasks, TypeResult};
pub use segment::{segment, Event, EventTable};
pub use types::{EventId, EventSpan, IouThreshold, Label};

/// Per-type results plus their union
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// One result per evaluated label, in evaluation order
    pub results: Vec<TypeResult>,
    /// Union of all per-type results
    pub overall: OverallResult,
}

/// Segment, match, and aggregate in one call
///
/// `labels` defaults to the sorted union of labels present in either
/// sequence.
pub fn evaluate(
    ground_truth: &[Label],
    prediction: &[Label],
    labels: Option<&[Label]>,
    threshold: IouThreshold,
    executor: &ExecutorConfig,
) -> Result<Evaluation> {
    let pair = SegmentedPair::new(ground_truth, prediction)?;
    let labels = match labels {
        Some(labels) => labels.to_vec(),
        None => pair.observed_labels(),
    };

    let matcher = Matcher::new(&pair, threshold);
    let results = executor::run_types(&matcher, &labels, executor)?;
    let overall = aggregate(pair.len(), &results);

    Ok(Evaluation { results, overall })
}
