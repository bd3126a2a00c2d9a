//! Name-keyed matching report

use crate::config::defaults::OVERALL_KEY;
use evmatch_core::{Label, OverallResult, TypeResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result for one evaluated label type, with its display name
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypeReport {
    /// Display name (the label itself unless names were configured)
    pub name: String,
    /// Evaluated label
    pub label: Label,
    /// Matching result
    pub result: TypeResult,
}

/// Entry looked up by key: either one type or the reserved overall key
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReportEntry<'r> {
    /// A per-type result
    Type(&'r TypeReport),
    /// The overall result
    Overall(&'r OverallResult),
}

/// Complete report of one matching run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Report {
    /// IoU threshold used
    pub iou_threshold: f64,
    /// Samples per sequence
    pub samples: usize,
    /// Per-type results in evaluation order
    pub types: Vec<TypeReport>,
    /// Union of all per-type results
    pub overall: OverallResult,
}

impl Report {
    /// Result for the type named `name`
    pub fn get(&self, name: &str) -> Option<&TypeResult> {
        self.types
            .iter()
            .find(|report| report.name == name)
            .map(|report| &report.result)
    }

    /// Result for `label`
    pub fn get_label(&self, label: Label) -> Option<&TypeResult> {
        self.types
            .iter()
            .find(|report| report.label == label)
            .map(|report| &report.result)
    }

    /// Look up any key, including the reserved overall key
    pub fn entry(&self, key: &str) -> Option<ReportEntry<'_>> {
        if key == OVERALL_KEY {
            return Some(ReportEntry::Overall(&self.overall));
        }
        self.types
            .iter()
            .find(|report| report.name == key)
            .map(ReportEntry::Type)
    }

    /// The overall result
    pub fn overall(&self) -> &OverallResult {
        &self.overall
    }

    /// Display names in evaluation order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|report| report.name.as_str())
    }

    /// Per-type reports in evaluation order
    pub fn iter(&self) -> std::slice::Iter<'_, TypeReport> {
        self.types.iter()
    }

    /// Number of evaluated types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether no types were evaluated
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Overall event-level F1
    pub fn f1_score(&self) -> f64 {
        self.overall.f1_score
    }

    /// Serialize the full report, masks included, as JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self, pretty: bool) -> crate::error::Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

impl<'r> IntoIterator for &'r Report {
    type Item = &'r TypeReport;
    type IntoIter = std::slice::Iter<'r, TypeReport>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.iter()
    }
}
