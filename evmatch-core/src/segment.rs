//! Run-length segmentation of label sequences into events
//!
//! A new event starts at index 0 and at every index whose label differs from
//! the previous sample. The resulting [`EventTable`] partitions `[0, N)`:
//! every sample maps to exactly one event id, and ids grow with `start`.

use crate::error::{CoreError, Result};
use crate::types::{EventId, EventSpan, Label};
use std::collections::BTreeSet;

/// One event of a segmented sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    /// 1-based event id
    pub id: EventId,
    /// Samples covered by the event
    pub span: EventSpan,
    /// Label shared by every sample of the event
    pub label: Label,
}

/// Precomputed event ids and spans for one label sequence
///
/// Built once per sequence and shared read-only by every per-type
/// matching pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventTable {
    /// Event id of every sample
    ids: Vec<EventId>,
    /// Span of every event, indexed by `EventId::index`
    spans: Vec<EventSpan>,
    /// Label of every event, indexed by `EventId::index`
    labels: Vec<Label>,
}

impl EventTable {
    /// Segment a label sequence into maximal runs of equal labels
    pub fn from_labels(labels: &[Label]) -> Result<Self> {
        if labels.is_empty() {
            return Err(CoreError::EmptySequence);
        }

        let mut ids = Vec::with_capacity(labels.len());
        let mut spans: Vec<EventSpan> = Vec::new();
        let mut event_labels: Vec<Label> = Vec::new();

        for (i, &label) in labels.iter().enumerate() {
            match spans.last_mut() {
                Some(span) if event_labels.last() == Some(&label) => span.end = i,
                _ => {
                    spans.push(EventSpan::new(i, i));
                    event_labels.push(label);
                }
            }
            ids.push(EventId::from_index(spans.len() - 1));
        }

        tracing::debug!(
            samples = labels.len(),
            events = spans.len(),
            "segmented label sequence"
        );

        Ok(Self {
            ids,
            spans,
            labels: event_labels,
        })
    }

    /// Number of events
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// A table built from a valid sequence always holds an event
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Number of samples in the segmented sequence
    pub fn sample_count(&self) -> usize {
        self.ids.len()
    }

    /// Event id covering `sample`
    ///
    /// # Panics
    /// Panics if `sample` is outside the sequence.
    pub fn event_at(&self, sample: usize) -> EventId {
        self.ids[sample]
    }

    /// Span of event `id`
    pub fn span(&self, id: EventId) -> EventSpan {
        self.spans[id.index()]
    }

    /// Label of event `id`
    pub fn label(&self, id: EventId) -> Label {
        self.labels[id.index()]
    }

    /// Per-sample event ids
    pub fn ids(&self) -> &[EventId] {
        &self.ids
    }

    /// Event spans in id order
    pub fn spans(&self) -> &[EventSpan] {
        &self.spans
    }

    /// Full event records in ascending id order
    pub fn events(&self) -> impl Iterator<Item = Event> + '_ {
        self.spans
            .iter()
            .zip(&self.labels)
            .enumerate()
            .map(|(index, (&span, &label))| Event {
                id: EventId::from_index(index),
                span,
                label,
            })
    }

    /// Events carrying `label`, in ascending id order
    pub fn events_of(&self, label: Label) -> impl Iterator<Item = Event> + '_ {
        self.events().filter(move |event| event.label == label)
    }

    /// Distinct labels present in the sequence
    pub fn distinct_labels(&self) -> BTreeSet<Label> {
        self.labels.iter().copied().collect()
    }
}

/// Segment `labels` into an [`EventTable`]
pub fn segment(labels: &[Label]) -> Result<EventTable> {
    EventTable::from_labels(labels)
}
