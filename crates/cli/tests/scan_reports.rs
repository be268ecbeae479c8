use std::fs;
use std::path::{Path, PathBuf};

use predicates::prelude::*;
use tempfile::tempdir;

/// Same fixture as cli_commands: a Sum32 field at [100, 104) guarding
/// [0, 100).
fn write_fixture_image(dir: &Path) -> PathBuf {
    let mut bytes = vec![0x11u8; 35];
    bytes.extend(vec![0x00; 65]);
    bytes.extend_from_slice(&(35u32 * 0x11).to_le_bytes());
    bytes.extend(vec![0x55; 96]);

    let path = dir.join("image.bin");
    fs::write(&path, bytes).expect("write fixture");
    path
}

#[test]
fn scan_prints_the_stored_checksum_finding() {
    let dir = tempdir().expect("tempdir");
    let image = write_fixture_image(dir.path());

    assert_cmd::cargo::cargo_bin_cmd!("checksum-hunter")
        .arg("scan")
        .arg("--image")
        .arg(&image)
        .arg("--algorithms")
        .arg("sum32")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "sum32 over [0x00000000, 0x00000064) = 53020000 stored at 0x00000064",
        ));
}

#[test]
fn scan_verbose_prints_stats() {
    let dir = tempdir().expect("tempdir");
    let image = write_fixture_image(dir.path());

    assert_cmd::cargo::cargo_bin_cmd!("checksum-hunter")
        .arg("scan")
        .arg("--image")
        .arg(&image)
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("Candidates discovered: 2"))
        .stdout(predicate::str::contains("Pairs checked:"));
}

#[test]
fn scan_json_emits_parseable_findings() {
    let dir = tempdir().expect("tempdir");
    let image = write_fixture_image(dir.path());

    let output = assert_cmd::cargo::cargo_bin_cmd!("checksum-hunter")
        .arg("scan")
        .arg("--image")
        .arg(&image)
        .arg("--algorithms")
        .arg("sum32")
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let findings: Vec<serde_json::Value> = serde_json::from_slice(&output).expect("json");
    assert!(findings
        .iter()
        .any(|f| f["start"] == 0 && f["end"] == 100 && f["found_at"] == 100));
}

#[test]
fn scan_honors_max_findings() {
    let dir = tempdir().expect("tempdir");
    let image = write_fixture_image(dir.path());

    let output = assert_cmd::cargo::cargo_bin_cmd!("checksum-hunter")
        .arg("scan")
        .arg("--image")
        .arg(&image)
        .arg("--algorithms")
        .arg("sum32")
        .arg("--max-findings")
        .arg("1")
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let findings: Vec<serde_json::Value> = serde_json::from_slice(&output).expect("json");
    assert_eq!(findings.len(), 1);
}

#[test]
fn scan_rejects_reserved_algorithm_in_list() {
    let dir = tempdir().expect("tempdir");
    let image = write_fixture_image(dir.path());

    assert_cmd::cargo::cargo_bin_cmd!("checksum-hunter")
        .arg("scan")
        .arg("--image")
        .arg(&image)
        .arg("--algorithms")
        .arg("sum32,crc32")
        .assert()
        .failure();
}

#[test]
fn scan_writes_a_full_report() {
    let dir = tempdir().expect("tempdir");
    let image = write_fixture_image(dir.path());
    let report_path = dir.path().join("report.json");

    assert_cmd::cargo::cargo_bin_cmd!("checksum-hunter")
        .arg("scan")
        .arg("--image")
        .arg(&image)
        .arg("--algorithms")
        .arg("sum32")
        .arg("--report")
        .arg(&report_path)
        .assert()
        .success();

    let body = fs::read_to_string(&report_path).expect("report file");
    let report: serde_json::Value = serde_json::from_str(&body).expect("report json");

    assert_eq!(report["image_size"], 200);
    assert_eq!(report["image_sha256"].as_str().expect("hash").len(), 64);
    assert_eq!(report["config"]["seq_threshold"], 64);
    assert_eq!(report["stats"]["candidates_discovered"], 2);
    assert!(!report["findings"].as_array().expect("findings").is_empty());
    assert!(report["started_at"].as_str().is_some());
}

#[test]
fn scan_loads_config_file_with_cli_overrides() {
    let dir = tempdir().expect("tempdir");
    let image = write_fixture_image(dir.path());
    let config_path = dir.path().join("scan.json");
    fs::write(&config_path, r#"{ "algorithms": ["sum32"], "seq_threshold": 64 }"#)
        .expect("write config");

    // The config file picks sum32; the flag caps the findings.
    let output = assert_cmd::cargo::cargo_bin_cmd!("checksum-hunter")
        .arg("scan")
        .arg("--image")
        .arg(&image)
        .arg("--config")
        .arg(&config_path)
        .arg("--max-findings")
        .arg("2")
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let findings: Vec<serde_json::Value> = serde_json::from_slice(&output).expect("json");
    assert_eq!(findings.len(), 2);
}
