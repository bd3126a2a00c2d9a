//! Event-level F1 score

/// Event-level F1 score: `2*hits / (2*hits + misses + false_alarms)`
///
/// Type 1 and type 2 false alarms are counted together. Returns 0 when there
/// are no events at all, so a type absent from both sequences scores zero
/// rather than failing.
///
/// # Example
/// ```
/// use evmatch_core::event_level_f1;
///
/// assert_eq!(event_level_f1(1, 0, 0), 1.0);
/// assert_eq!(event_level_f1(0, 0, 0), 0.0);
/// ```
pub fn event_level_f1(hits: usize, false_alarms: usize, misses: usize) -> f64 {
    let doubled_hits = 2.0 * hits as f64;
    let denominator = doubled_hits + misses as f64 + false_alarms as f64;
    if denominator == 0.0 {
        return 0.0;
    }
    doubled_hits / denominator
}

/// Fraction of predicted events that were hits
pub fn event_level_precision(hits: usize, false_alarms: usize) -> f64 {
    ratio(hits, false_alarms)
}

/// Fraction of ground-truth events that were hits
pub fn event_level_recall(hits: usize, misses: usize) -> f64 {
    ratio(hits, misses)
}

fn ratio(numerator: usize, rest: usize) -> f64 {
    let denominator = numerator as f64 + rest as f64;
    if denominator == 0.0 {
        0.0
    } else {
        numerator as f64 / denominator
    }
}
