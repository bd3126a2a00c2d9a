//! Folding per-type results into the overall result

use crate::result::{MatchCounts, OverallResult, SampleMasks, TypeResult};

/// Combine per-type results over `samples` samples
///
/// Masks are OR-ed, counts and IoU arrays are summed. A sample belongs to one
/// label per sequence, so per-type IoU arrays never overlap and the sum does
/// not double count. The fold is order-insensitive.
pub fn aggregate<'r, I>(samples: usize, results: I) -> OverallResult
where
    I: IntoIterator<Item = &'r TypeResult>,
{
    let mut masks = SampleMasks::new(samples);
    let mut counts = MatchCounts::default();
    let mut iou = vec![0.0; samples];

    for result in results {
        debug_assert_eq!(result.masks.len(), samples);
        masks.union_with(&result.masks);
        counts += result.counts;
        for (total, &value) in iou.iter_mut().zip(&result.iou) {
            *total += value;
        }
    }

    OverallResult {
        masks,
        counts,
        iou,
        f1_score: counts.f1_score(),
    }
}
