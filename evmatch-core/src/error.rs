//! Error types for the core matching algorithm

use thiserror::Error;

/// Core algorithm errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A label sequence with no samples cannot be segmented into events
    #[error("label sequence is empty")]
    EmptySequence,

    /// Ground truth and prediction must cover the same samples
    #[error(
        "sequence length mismatch: ground truth has {ground_truth} samples, prediction has {prediction}"
    )]
    LengthMismatch {
        /// Number of ground-truth samples
        ground_truth: usize,
        /// Number of prediction samples
        prediction: usize,
    },

    /// IoU threshold outside the half-open interval (0, 1]
    #[error("IoU threshold {0} is outside (0, 1]")]
    InvalidThreshold(f64),

    /// Worker pool for parallel type passes could not be built
    #[error("thread pool construction failed: {0}")]
    ThreadPool(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_display() {
        let err = CoreError::LengthMismatch {
            ground_truth: 10,
            prediction: 9,
        };
        assert_eq!(
            err.to_string(),
            "sequence length mismatch: ground truth has 10 samples, prediction has 9"
        );
    }

    #[test]
    fn test_threshold_display() {
        assert_eq!(
            CoreError::InvalidThreshold(1.5).to_string(),
            "IoU threshold 1.5 is outside (0, 1]"
        );
    }
}
