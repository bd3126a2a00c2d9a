//! Type definitions shared by the segmenter and the matcher
//!
//! Events are addressed by 1-based [`EventId`]s and cover inclusive
//! [`EventSpan`]s of sample indices.

use crate::error::{CoreError, Result};
use std::fmt;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A categorical sample label (e.g. fixation = 0, saccade = 1)
pub type Label = i32;

// ============================================================================
// Event identifiers and spans
// ============================================================================

/// 1-based identifier of an event within one sequence
///
/// Ids are assigned in left-to-right encounter order, so comparing ids
/// compares event start positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct EventId(usize);

impl EventId {
    /// Create an id from its 1-based value, rejecting zero
    pub fn new(id: usize) -> Option<Self> {
        (id > 0).then_some(Self(id))
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    /// The 1-based id value
    pub fn get(self) -> usize {
        self.0
    }

    /// Zero-based position of this event in its event table
    pub fn index(self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Inclusive range of sample indices `[start, end]` covered by an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EventSpan {
    /// First sample index of the event
    pub start: usize,
    /// Last sample index of the event (inclusive)
    pub end: usize,
}

impl EventSpan {
    /// Creates a span covering `start..=end`
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed its end");
        Self { start, end }
    }

    /// Number of samples in the span (never zero)
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Spans always hold at least one sample
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `index` lies inside the span
    pub fn contains(&self, index: usize) -> bool {
        (self.start..=self.end).contains(&index)
    }

    /// Sample indices as a half-open range, for slicing and iteration
    pub fn indices(&self) -> Range<usize> {
        self.start..self.end + 1
    }

    /// Number of samples shared with `other`
    pub fn intersection_len(&self, other: &EventSpan) -> usize {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if start > end {
            0
        } else {
            end - start + 1
        }
    }

    /// Number of samples covered by either span
    pub fn union_len(&self, other: &EventSpan) -> usize {
        self.len() + other.len() - self.intersection_len(other)
    }

    /// Intersection over union of the two sample sets
    pub fn iou(&self, other: &EventSpan) -> f64 {
        self.intersection_len(other) as f64 / self.union_len(other) as f64
    }
}

impl fmt::Display for EventSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

// ============================================================================
// Threshold
// ============================================================================

/// IoU threshold a match must strictly exceed, validated to lie in (0, 1]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "f64", into = "f64"))]
pub struct IouThreshold(f64);

impl IouThreshold {
    /// Threshold used when the caller does not pick one
    pub const DEFAULT: Self = Self(0.5);

    /// Validate and wrap a threshold value
    pub fn new(value: f64) -> Result<Self> {
        // NaN fails both comparisons
        if value > 0.0 && value <= 1.0 {
            Ok(Self(value))
        } else {
            Err(CoreError::InvalidThreshold(value))
        }
    }

    /// The raw threshold value
    pub fn value(self) -> f64 {
        self.0
    }

    /// Strict comparison: an IoU equal to the threshold does not qualify
    pub fn is_exceeded_by(self, iou: f64) -> bool {
        iou > self.0
    }
}

impl Default for IouThreshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for IouThreshold {
    type Error = CoreError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<IouThreshold> for f64 {
    fn from(threshold: IouThreshold) -> Self {
        threshold.0
    }
}

impl fmt::Display for IouThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
