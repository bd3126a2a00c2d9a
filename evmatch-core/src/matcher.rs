//! IoU-based event matching for one label type at a time
//!
//! # Processing order
//!
//! Ground-truth events of the target type are visited in ascending event id.
//! For each one, the candidate prediction events (events of the prediction
//! that carry the target label on at least one sample inside the
//! ground-truth span) are tried in ascending event id:
//!
//! 1. a candidate consumed earlier in the pass is skipped;
//! 2. a candidate whose span IoU strictly exceeds the threshold is a hit,
//!    which consumes both events and ends the search for this ground-truth
//!    event;
//! 3. any other candidate becomes a type 1 false alarm and is consumed.
//!
//! A ground-truth event that ends without a hit is a miss. Prediction events
//! of the target type still unconsumed after every ground-truth event has
//! been visited are type 2 false alarms. Results depend on this order when
//! several candidates compete, so it must not change.

use crate::error::{CoreError, Result};
use crate::mask::type_mask;
use crate::result::{EventMatch, MatchCounts, SampleMasks, TypeResult};
use crate::segment::EventTable;
use crate::types::{EventId, EventSpan, IouThreshold, Label};
use smallvec::SmallVec;
use std::collections::BTreeSet;

/// Ground-truth and prediction sequences with their event tables
///
/// Validates the pair once; every per-type pass then reads the tables
/// without recomputing them.
#[derive(Debug, Clone)]
pub struct SegmentedPair<'a> {
    ground_truth: &'a [Label],
    prediction: &'a [Label],
    ground_truth_events: EventTable,
    prediction_events: EventTable,
}

impl<'a> SegmentedPair<'a> {
    /// Validate and segment both sequences
    pub fn new(ground_truth: &'a [Label], prediction: &'a [Label]) -> Result<Self> {
        if ground_truth.len() != prediction.len() {
            return Err(CoreError::LengthMismatch {
                ground_truth: ground_truth.len(),
                prediction: prediction.len(),
            });
        }

        Ok(Self {
            ground_truth,
            prediction,
            ground_truth_events: EventTable::from_labels(ground_truth)?,
            prediction_events: EventTable::from_labels(prediction)?,
        })
    }

    /// Number of samples in each sequence
    pub fn len(&self) -> usize {
        self.ground_truth.len()
    }

    /// Always false for a validated pair
    pub fn is_empty(&self) -> bool {
        self.ground_truth.is_empty()
    }

    pub fn ground_truth(&self) -> &'a [Label] {
        self.ground_truth
    }

    pub fn prediction(&self) -> &'a [Label] {
        self.prediction
    }

    pub fn ground_truth_events(&self) -> &EventTable {
        &self.ground_truth_events
    }

    pub fn prediction_events(&self) -> &EventTable {
        &self.prediction_events
    }

    /// Sorted union of the labels present in either sequence
    pub fn observed_labels(&self) -> Vec<Label> {
        let mut labels: BTreeSet<Label> = self.ground_truth_events.distinct_labels();
        labels.extend(self.prediction_events.distinct_labels());
        labels.into_iter().collect()
    }
}

/// Terminal state of a prediction event within one type pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PredictionState {
    Pending,
    Hit,
    FalseAlarmOverlap,
    FalseAlarmUnmatched,
}

/// Event matcher over one segmented pair
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'p, 'a> {
    pair: &'p SegmentedPair<'a>,
    threshold: IouThreshold,
}

impl<'p, 'a> Matcher<'p, 'a> {
    pub fn new(pair: &'p SegmentedPair<'a>, threshold: IouThreshold) -> Self {
        Self { pair, threshold }
    }

    pub fn pair(&self) -> &'p SegmentedPair<'a> {
        self.pair
    }

    pub fn threshold(&self) -> IouThreshold {
        self.threshold
    }

    /// Run one matching pass for `label`
    ///
    /// Consumption state lives only for the duration of this call, so passes
    /// for different labels are independent.
    pub fn match_type(&self, label: Label) -> TypeResult {
        let samples = self.pair.len();
        let gt_events = self.pair.ground_truth_events();
        let pred_events = self.pair.prediction_events();
        let gt_mask = type_mask(self.pair.ground_truth(), label);
        let pred_mask = type_mask(self.pair.prediction(), label);

        let mut consumed = vec![PredictionState::Pending; pred_events.len()];
        let mut masks = SampleMasks::new(samples);
        let mut iou = vec![0.0; samples];
        let mut counts = MatchCounts::default();
        let mut matches = Vec::new();

        for gt_event in gt_events.events().filter(|e| gt_mask[e.span.start]) {
            let mut hit = None;

            for candidate in candidates(gt_event.span, &pred_mask, pred_events) {
                let state = &mut consumed[candidate.index()];
                if *state != PredictionState::Pending {
                    tracing::trace!(
                        label,
                        ground_truth = gt_event.id.get(),
                        prediction = candidate.get(),
                        "skipping consumed candidate"
                    );
                    continue;
                }

                let candidate_span = pred_events.span(candidate);
                let value = gt_event.span.iou(&candidate_span);
                if self.threshold.is_exceeded_by(value) {
                    *state = PredictionState::Hit;
                    hit = Some(EventMatch {
                        ground_truth: gt_event.id,
                        prediction: candidate,
                        iou: value,
                    });
                    break;
                }

                *state = PredictionState::FalseAlarmOverlap;
                counts.false_alarms_overlap += 1;
                mark(&mut masks.false_alarm_overlap, candidate_span);
                tracing::trace!(
                    label,
                    ground_truth = gt_event.id.get(),
                    prediction = candidate.get(),
                    iou = value,
                    "overlap below threshold"
                );
            }

            match hit {
                Some(pair) => {
                    counts.hits += 1;
                    mark(&mut masks.hit, gt_event.span);
                    iou[gt_event.span.indices()].fill(pair.iou);
                    tracing::trace!(
                        label,
                        ground_truth = gt_event.id.get(),
                        prediction = pair.prediction.get(),
                        iou = pair.iou,
                        "hit"
                    );
                    matches.push(pair);
                }
                None => {
                    counts.misses += 1;
                    mark(&mut masks.miss, gt_event.span);
                }
            }
        }

        for pred_event in pred_events.events().filter(|e| pred_mask[e.span.start]) {
            let state = &mut consumed[pred_event.id.index()];
            if *state != PredictionState::Pending {
                continue;
            }
            *state = PredictionState::FalseAlarmUnmatched;
            counts.false_alarms_unmatched += 1;

            let range = pred_event.span.indices();
            masks.false_alarm_unmatched[range.clone()].fill(true);
            masks.hit[range.clone()].fill(false);
            iou[range].fill(0.0);
        }

        debug_assert!(pred_events
            .events()
            .filter(|e| pred_mask[e.span.start])
            .all(|e| consumed[e.id.index()] != PredictionState::Pending));

        tracing::debug!(
            label,
            hits = counts.hits,
            false_alarms = counts.false_alarms(),
            misses = counts.misses,
            "matched label type"
        );

        TypeResult::new(label, masks, counts, iou, matches)
    }
}

/// Prediction events carrying the target label somewhere inside `span`,
/// in ascending id order
fn candidates(
    span: EventSpan,
    pred_mask: &[bool],
    pred_events: &EventTable,
) -> SmallVec<[EventId; 4]> {
    let mut found: SmallVec<[EventId; 4]> = SmallVec::new();
    for sample in span.indices().filter(|&i| pred_mask[i]) {
        let id = pred_events.event_at(sample);
        // ids are monotonic in sample order, so checking the tail dedups
        if found.last() != Some(&id) {
            found.push(id);
        }
    }
    found
}

fn mark(mask: &mut [bool], span: EventSpan) {
    mask[span.indices()].fill(true);
}
