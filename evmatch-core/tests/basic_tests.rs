//! Basic tests for evmatch-core

use evmatch_core::*;

/// Reference sequences with four label types (0 = fixation, 1 = saccade,
/// 2 = post-saccadic oscillation, 3 = smooth pursuit)
const REFERENCE_GT: [Label; 35] = [
    0, 0, 0, 1, 1, 1, 1, 1, 1, 0, 0, 0, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 1, 1, 1, 1, 0, 0, 0, 0, 1, 1,
    1, 0, 1,
];
const REFERENCE_ALG: [Label; 35] = [
    0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 1, 1, 1, 1, 0, 0, 0, 2, 1, 1,
    1, 1, 1,
];

fn bits(mask: &[bool]) -> String {
    mask.iter().map(|&b| if b { '1' } else { '0' }).collect()
}

fn run(gt: &[Label], pred: &[Label], labels: Option<&[Label]>) -> Evaluation {
    evaluate(
        gt,
        pred,
        labels,
        IouThreshold::DEFAULT,
        &ExecutorConfig::sequential(),
    )
    .unwrap()
}

#[test]
fn test_scenario_identical_sequences() {
    let evaluation = run(&[0, 0, 0, 1, 1, 1], &[0, 0, 0, 1, 1, 1], None);
    let saccade = &evaluation.results[1];
    assert_eq!(saccade.label, 1);
    assert_eq!(saccade.counts.hits, 1);
    assert_eq!(saccade.matches[0].iou, 1.0);
    assert_eq!(saccade.f1_score, 1.0);
    assert_eq!(evaluation.overall.f1_score, 1.0);
}

#[test]
fn test_scenario_missing_type() {
    let evaluation = run(&[0, 0, 0, 1, 1, 1], &[0, 0, 0, 0, 0, 0], None);
    let saccade = &evaluation.results[1];
    assert_eq!(saccade.counts.hits, 0);
    assert_eq!(saccade.counts.misses, 1);
    assert_eq!(saccade.f1_score, 0.0);
}

#[test]
fn test_scenario_partial_overlap() {
    let evaluation = run(&[0, 1, 1, 1, 0], &[0, 1, 1, 0, 0], None);
    let saccade = &evaluation.results[1];
    assert_eq!(saccade.counts.hits, 1);
    assert!((saccade.iou[1] - 2.0 / 3.0).abs() < 1e-12);
    assert_eq!(bits(&saccade.masks.hit), "01110");
}

#[test]
fn test_reference_overall_counts() {
    let evaluation = run(&REFERENCE_GT, &REFERENCE_ALG, None);
    let overall = &evaluation.overall;

    assert_eq!(overall.counts.hits, 5);
    assert_eq!(overall.counts.false_alarms(), 3);
    assert_eq!(overall.counts.false_alarms_overlap, 2);
    assert_eq!(overall.counts.false_alarms_unmatched, 1);
    assert_eq!(overall.counts.misses, 5);
    assert!((overall.f1_score - 10.0 / 18.0).abs() < 1e-12);
}

#[test]
fn test_reference_per_type_counts() {
    let evaluation = run(&REFERENCE_GT, &REFERENCE_ALG, None);
    let summary: Vec<(Label, usize, usize, usize)> = evaluation
        .results
        .iter()
        .map(|r| (r.label, r.counts.hits, r.counts.false_alarms(), r.counts.misses))
        .collect();

    assert_eq!(
        summary,
        vec![(0, 1, 1, 3), (1, 2, 1, 2), (2, 1, 1, 0), (3, 1, 0, 0)]
    );
    assert!((evaluation.results[0].f1_score - 1.0 / 3.0).abs() < 1e-12);
    assert!((evaluation.results[1].f1_score - 4.0 / 7.0).abs() < 1e-12);
    assert!((evaluation.results[2].f1_score - 2.0 / 3.0).abs() < 1e-12);
    assert_eq!(evaluation.results[3].f1_score, 1.0);
}

#[test]
fn test_reference_masks() {
    let evaluation = run(&REFERENCE_GT, &REFERENCE_ALG, None);

    let fixation = &evaluation.results[0];
    assert_eq!(bits(&fixation.masks.hit), "00000000000000000000000000111100000");
    assert_eq!(
        bits(&fixation.masks.false_alarm_overlap),
        "11111100000000000000000000000000000"
    );
    assert_eq!(bits(&fixation.masks.miss), "11100000011100000000000000000000010");

    let saccade = &evaluation.results[1];
    assert_eq!(bits(&saccade.masks.hit), "00000000000000000000001111000011100");
    assert_eq!(bits(&saccade.masks.miss), "00011111100000000000000000000000001");
    assert!((saccade.iou[30] - 0.6).abs() < 1e-12);

    let pso = &evaluation.results[2];
    assert_eq!(
        bits(&pso.masks.false_alarm_unmatched),
        "00000000000000000000000000000100000"
    );

    let overall = &evaluation.overall;
    assert_eq!(bits(&overall.masks.hit), "00000000000011111111111111111111100");
    assert!((overall.iou[26] - 0.75).abs() < 1e-12);
    assert_eq!(overall.iou[0], 0.0);
}

#[test]
fn test_reference_restricted_types() {
    let evaluation = run(&REFERENCE_GT, &REFERENCE_ALG, Some(&[0, 3][..]));
    let counts = evaluation.overall.counts;
    assert_eq!((counts.hits, counts.false_alarms(), counts.misses), (2, 1, 3));
    assert_eq!(evaluation.overall.f1_score, 0.5);

    let evaluation = run(&REFERENCE_GT, &REFERENCE_ALG, Some(&[0, 3, 2][..]));
    let labels: Vec<Label> = evaluation.results.iter().map(|r| r.label).collect();
    assert_eq!(labels, vec![0, 3, 2]);
    let counts = evaluation.overall.counts;
    assert_eq!((counts.hits, counts.false_alarms(), counts.misses), (3, 2, 3));
    assert!((evaluation.overall.f1_score - 6.0 / 11.0).abs() < 1e-12);
}

#[test]
fn test_threshold_changes_outcome() {
    let strict = evaluate(
        &[0, 1, 1, 1, 0],
        &[0, 1, 1, 0, 0],
        Some(&[1][..]),
        IouThreshold::new(0.7).unwrap(),
        &ExecutorConfig::default(),
    )
    .unwrap();
    assert_eq!(strict.results[0].counts.hits, 0);
    assert_eq!(strict.results[0].counts.false_alarms_overlap, 1);
    assert_eq!(strict.results[0].counts.misses, 1);
}

#[test]
fn test_length_mismatch_rejected() {
    let err = evaluate(
        &[0, 1],
        &[0, 1, 1],
        None,
        IouThreshold::DEFAULT,
        &ExecutorConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, CoreError::LengthMismatch { .. }));
}

#[test]
fn test_unobserved_type_scores_zero() {
    let evaluation = run(&[0, 0, 1], &[0, 0, 1], Some(&[9][..]));
    assert_eq!(evaluation.results[0].counts, MatchCounts::default());
    assert_eq!(evaluation.results[0].f1_score, 0.0);
    assert_eq!(evaluation.overall.f1_score, 0.0);
}

#[cfg(feature = "parallel")]
#[test]
fn test_modes_agree_on_reference() {
    let sequential = run(&REFERENCE_GT, &REFERENCE_ALG, None);
    for config in [
        ExecutorConfig::parallel(None),
        ExecutorConfig::parallel(Some(3)),
        ExecutorConfig {
            adaptive_threshold: 0,
            ..ExecutorConfig::default()
        },
    ] {
        let other = evaluate(
            &REFERENCE_GT,
            &REFERENCE_ALG,
            None,
            IouThreshold::DEFAULT,
            &config,
        )
        .unwrap();
        assert_eq!(sequential, other);
    }
}
