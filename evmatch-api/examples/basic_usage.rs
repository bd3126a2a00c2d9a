//! Basic usage of the evmatch API

use evmatch_api::{match_with_defaults, EventMatcher, Input, MatchConfig, ReportEntry};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let ground_truth = [0, 0, 0, 1, 1, 1, 1, 0, 0, 2, 2, 0];
    let prediction = [0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 2, 2];

    // Method 1: Default configuration
    println!("=== Method 1: Defaults ===");
    let report = match_with_defaults(&ground_truth, &prediction)?;
    for entry in &report {
        let counts = entry.result.counts;
        println!(
            "  type {}: hits={} false_alarms={} misses={} f1={:.3}",
            entry.name,
            counts.hits,
            counts.false_alarms(),
            counts.misses,
            entry.result.f1_score
        );
    }
    println!("  overall f1={:.3}\n", report.f1_score());

    // Method 2: Named and restricted types
    println!("=== Method 2: Named Types ===");
    let config = MatchConfig::builder()
        .iou_threshold(0.4)
        .event_types([1, 2])
        .label_names(["saccade", "pso"])
        .build()?;
    let matcher = EventMatcher::with_config(config);
    let report = matcher.process(&ground_truth, &prediction)?;

    for key in ["saccade", "pso", "overall"] {
        match report.entry(key) {
            Some(ReportEntry::Type(entry)) => {
                println!("  {key}: f1={:.3}", entry.result.f1_score);
                for pair in &entry.result.matches {
                    println!(
                        "    {} -> {} (iou {:.2})",
                        pair.ground_truth, pair.prediction, pair.iou
                    );
                }
            }
            Some(ReportEntry::Overall(overall)) => println!("  {key}: f1={:.3}", overall.f1_score),
            None => println!("  {key}: not evaluated"),
        }
    }

    // Method 3: Label text input
    println!("\n=== Method 3: Text Input ===");
    let report = EventMatcher::new().process_inputs(
        Input::from_text("0 0 1 1 1 0"),
        Input::from_text("[0, 1, 1, 1, 0, 0]"),
    )?;
    println!("  {} samples, overall f1={:.3}", report.samples, report.f1_score());

    Ok(())
}
