//! Per-type and overall matching results

use crate::metric::{event_level_f1, event_level_precision, event_level_recall};
use crate::types::{EventId, Label};
use std::ops::{Add, AddAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sample-level classification masks
///
/// `hit` and `miss` cover ground-truth event spans; the two false-alarm
/// masks cover prediction event spans.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SampleMasks {
    /// Samples of ground-truth events that were matched
    #[cfg_attr(feature = "serde", serde(with = "mask_serde"))]
    pub hit: Vec<bool>,
    /// Samples of prediction events that overlapped a ground-truth event
    /// of the same type without passing the threshold (type 1)
    #[cfg_attr(feature = "serde", serde(with = "mask_serde"))]
    pub false_alarm_overlap: Vec<bool>,
    /// Samples of prediction events with no ground-truth counterpart (type 2)
    #[cfg_attr(feature = "serde", serde(with = "mask_serde"))]
    pub false_alarm_unmatched: Vec<bool>,
    /// Samples of ground-truth events that were not matched
    #[cfg_attr(feature = "serde", serde(with = "mask_serde"))]
    pub miss: Vec<bool>,
}

impl SampleMasks {
    /// All-false masks over `samples` samples
    pub fn new(samples: usize) -> Self {
        Self {
            hit: vec![false; samples],
            false_alarm_overlap: vec![false; samples],
            false_alarm_unmatched: vec![false; samples],
            miss: vec![false; samples],
        }
    }

    /// Number of samples covered
    pub fn len(&self) -> usize {
        self.hit.len()
    }

    /// Whether the masks cover no samples
    pub fn is_empty(&self) -> bool {
        self.hit.is_empty()
    }

    /// Logical OR of `other` into `self`, sample by sample
    pub fn union_with(&mut self, other: &SampleMasks) {
        or_into(&mut self.hit, &other.hit);
        or_into(&mut self.false_alarm_overlap, &other.false_alarm_overlap);
        or_into(&mut self.false_alarm_unmatched, &other.false_alarm_unmatched);
        or_into(&mut self.miss, &other.miss);
    }
}

fn or_into(target: &mut [bool], source: &[bool]) {
    for (t, &s) in target.iter_mut().zip(source) {
        *t |= s;
    }
}

/// Event counts for one type or for the overall result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatchCounts {
    /// Ground-truth events matched to a prediction event
    pub hits: usize,
    /// Type 1 false alarms (overlap below threshold)
    pub false_alarms_overlap: usize,
    /// Type 2 false alarms (no ground-truth counterpart)
    pub false_alarms_unmatched: usize,
    /// Ground-truth events without a qualifying match
    pub misses: usize,
}

impl MatchCounts {
    /// Combined false alarms of both types
    pub fn false_alarms(&self) -> usize {
        self.false_alarms_overlap + self.false_alarms_unmatched
    }

    /// Event-level F1 over these counts
    pub fn f1_score(&self) -> f64 {
        event_level_f1(self.hits, self.false_alarms(), self.misses)
    }

    /// Event-level precision over these counts
    pub fn precision(&self) -> f64 {
        event_level_precision(self.hits, self.false_alarms())
    }

    /// Event-level recall over these counts
    pub fn recall(&self) -> f64 {
        event_level_recall(self.hits, self.misses)
    }
}

impl Add for MatchCounts {
    type Output = MatchCounts;

    fn add(mut self, rhs: MatchCounts) -> MatchCounts {
        self += rhs;
        self
    }
}

impl AddAssign for MatchCounts {
    fn add_assign(&mut self, rhs: MatchCounts) {
        self.hits += rhs.hits;
        self.false_alarms_overlap += rhs.false_alarms_overlap;
        self.false_alarms_unmatched += rhs.false_alarms_unmatched;
        self.misses += rhs.misses;
    }
}

/// A ground-truth event paired with the prediction event that hit it
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EventMatch {
    /// Ground-truth event id
    pub ground_truth: EventId,
    /// Prediction event id
    pub prediction: EventId,
    /// IoU of the two spans
    pub iou: f64,
}

/// Matching result for a single label type
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypeResult {
    /// Evaluated label
    pub label: Label,
    /// Sample-level classification masks
    pub masks: SampleMasks,
    /// Event counts
    pub counts: MatchCounts,
    /// IoU of the matched pair on every hit sample, 0 elsewhere
    pub iou: Vec<f64>,
    /// Hit pairs in ground-truth id order
    pub matches: Vec<EventMatch>,
    /// Event-level F1 score
    pub f1_score: f64,
}

impl TypeResult {
    pub(crate) fn new(
        label: Label,
        masks: SampleMasks,
        counts: MatchCounts,
        iou: Vec<f64>,
        matches: Vec<EventMatch>,
    ) -> Self {
        Self {
            label,
            masks,
            counts,
            iou,
            matches,
            f1_score: counts.f1_score(),
        }
    }
}

/// Union of all per-type results
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OverallResult {
    /// Per-sample OR of every type's masks
    pub masks: SampleMasks,
    /// Summed counts
    pub counts: MatchCounts,
    /// Per-sample sum of every type's IoU array
    pub iou: Vec<f64>,
    /// Event-level F1 over the summed counts
    pub f1_score: f64,
}

#[cfg(feature = "serde")]
mod mask_serde {
    //! Masks travel as 0/1 arrays

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(mask: &[bool], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(mask.iter().map(|&set| u8::from(set)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<bool>, D::Error> {
        let raw = Vec::<u8>::deserialize(deserializer)?;
        Ok(raw.into_iter().map(|value| value != 0).collect())
    }
}
