//! Integration tests for the evmatch CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn compare() -> Command {
    let mut cmd = Command::cargo_bin("evmatch").unwrap();
    cmd.env_remove("EVMATCH_CONFIG")
        .arg("compare")
        .arg("-g")
        .arg(fixture_path("reference_gt.txt"))
        .arg("-a")
        .arg(fixture_path("reference_alg.csv"));
    cmd
}

#[test]
fn test_compare_text_output() {
    compare()
        .assert()
        .success()
        .stdout(predicate::str::contains("IoU threshold: 0.5  samples: 35"))
        .stdout(predicate::str::contains("0.5714"))
        .stdout(predicate::str::contains("overall"))
        .stdout(predicate::str::contains("0.5556"));
}

#[test]
fn test_compare_json_output() {
    let output = compare().arg("-f").arg("json").output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["overall"]["hits"], 5);
    assert_eq!(value["overall"]["false_alarms"], 3);
    assert_eq!(value["overall"]["misses"], 5);
    assert_eq!(value["types"][2]["false_alarms_unmatched"], 1);
}

#[test]
fn test_json_array_input() {
    let mut cmd = Command::cargo_bin("evmatch").unwrap();
    cmd.arg("compare")
        .arg("-g")
        .arg(fixture_path("reference_gt.txt"))
        .arg("--alg")
        .arg(fixture_path("reference_alg.json"))
        .arg("--types")
        .arg("0,3");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("0.5000"))
        .stdout(predicate::str::contains("saccade").not());
}

#[test]
fn test_config_file_names_and_format() {
    compare()
        .arg("-c")
        .arg(fixture_path("named.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("| Type | Hits |"))
        .stdout(predicate::str::contains("| pso | 1 | 0 | 1 | 0 | 0.6667 |"))
        .stdout(predicate::str::contains("| **overall** | 5 | 2 | 1 | 5 | 0.5556 |"));
}

#[test]
fn test_flag_overrides_config_format() {
    compare()
        .arg("-c")
        .arg(fixture_path("named.toml"))
        .arg("-f")
        .arg("text")
        .assert()
        .success()
        .stdout(predicate::str::contains("fixation"))
        .stdout(predicate::str::contains("| Type |").not());
}

#[test]
fn test_stricter_threshold() {
    // Only the pso and pursuit pairs (IoU 1) clear 0.9
    let output = compare()
        .arg("-t")
        .arg("0.9")
        .arg("-f")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["iou_threshold"], 0.9);
    assert_eq!(value["types"][2]["hits"], 1);
    assert_eq!(value["types"][3]["hits"], 1);
}

#[test]
fn test_parallel_matches_sequential() {
    let sequential = compare().arg("-f").arg("json").output().unwrap();
    let parallel = compare()
        .arg("-f")
        .arg("json")
        .arg("--parallel")
        .arg("--threads")
        .arg("2")
        .output()
        .unwrap();

    assert!(parallel.status.success());
    assert_eq!(sequential.stdout, parallel.stdout);
}

#[test]
fn test_output_file_with_masks() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("report.json");

    compare()
        .arg("-f")
        .arg("json")
        .arg("--masks")
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
    let hit = value["overall"]["masks"]["hit"].as_array().unwrap();
    assert_eq!(hit.len(), 35);
}

#[test]
fn test_stdin_input() {
    let prediction = fs::read_to_string(fixture_path("reference_alg.csv")).unwrap();

    let mut cmd = Command::cargo_bin("evmatch").unwrap();
    cmd.arg("compare")
        .arg("-g")
        .arg(fixture_path("reference_gt.txt"))
        .arg("-a")
        .arg("-")
        .write_stdin(prediction);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("0.5556"));
}

#[test]
fn test_length_mismatch_fails() {
    let mut cmd = Command::cargo_bin("evmatch").unwrap();
    cmd.arg("compare")
        .arg("-g")
        .arg(fixture_path("reference_gt.txt"))
        .arg("-a")
        .arg(fixture_path("short_alg.txt"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Input error"))
        .stderr(predicate::str::contains("length mismatch"));
}

#[test]
fn test_invalid_threshold_fails() {
    compare()
        .arg("-t")
        .arg("1.5")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_reserved_name_fails() {
    compare()
        .arg("--names")
        .arg("fixation,saccade,pso,overall")
        .assert()
        .failure()
        .stderr(predicate::str::contains("reserved"));
}

#[test]
fn test_missing_file_fails() {
    let mut cmd = Command::cargo_bin("evmatch").unwrap();
    cmd.arg("compare")
        .arg("-g")
        .arg("nonexistent.txt")
        .arg("-a")
        .arg(fixture_path("reference_alg.csv"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("File not found: nonexistent.txt"));
}

#[test]
fn test_list_formats() {
    let mut cmd = Command::cargo_bin("evmatch").unwrap();
    cmd.arg("list").arg("formats");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn test_generate_then_validate() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("evmatch.toml");

    let mut cmd = Command::cargo_bin("evmatch").unwrap();
    cmd.arg("generate-config").arg("-o").arg(&config_path);
    cmd.assert().success();

    let mut cmd = Command::cargo_bin("evmatch").unwrap();
    cmd.arg("validate").arg("-c").arg(&config_path);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_validate_invalid_config() {
    let mut cmd = Command::cargo_bin("evmatch").unwrap();
    cmd.arg("validate").arg("-c").arg(fixture_path("invalid.toml"));

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Configuration is invalid"));
}

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("evmatch").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("compare"))
        .stdout(predicate::str::contains("generate-config"))
        .stdout(predicate::str::contains("validate"));
}
