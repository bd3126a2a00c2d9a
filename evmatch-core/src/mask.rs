//! Binarization of a label sequence against one target label

use crate::types::Label;

/// Returns `true` at every sample whose label equals `target`
pub fn type_mask(labels: &[Label], target: Label) -> Vec<bool> {
    labels.iter().map(|&label| label == target).collect()
}
