// extractguard/tests/cli_integration_tests.rs
//! Command-line integration tests for the `extractguard` binary.
//!
//! These tests run the compiled binary with `assert_cmd`, feeding inputs through
//! temporary files (`tempfile`) or stdin, and assert on exit status and output.
//! Output is passed through `strip_ansi_escapes` before comparison in case the
//! binary decides to color it.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::io::Write;
use tempfile::NamedTempFile;

use strip_ansi_escapes::strip as strip_ansi_escapes_fn;

const REPORT: &str = "Discharge summary for John Smith (ID X1), born 01.02.1960, \
    Baker Street 12, 80331 Munich. Diagnosis: seasonal influenza.";

const RESPONSE: &str = r#"{
    "patientName": "John Smith",
    "patientID": "X1",
    "patientBirthDate": "01.02.1960",
    "patientStreet": "Baker Street 12",
    "patientPostalCode": "80331",
    "patientCity": "Munich",
    "diagnosis": "null"
}"#;

fn temp_file(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

fn extractguard() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("extractguard"));
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("EXTRACTGUARD_CONFIG");
    cmd.env_remove("EXTRACTGUARD_ALLOW_DEBUG_PII");
    cmd
}

fn plain(bytes: &[u8]) -> String {
    String::from_utf8_lossy(&strip_ansi_escapes_fn(bytes)).to_string()
}

#[test]
fn test_score_prints_human_report() -> Result<()> {
    let text = temp_file(REPORT)?;
    let response = temp_file(RESPONSE)?;

    let output = extractguard()
        .arg("score")
        .arg("--text")
        .arg(text.path())
        .arg("--response")
        .arg(response.path())
        .output()?;

    assert!(output.status.success());
    let stdout = plain(&output.stdout);
    assert!(stdout.contains("Extraction Confidence Report"));
    assert!(stdout.contains("patientBirthDate"));
    assert!(stdout.contains("Identifiers detected:      6/8"));
    assert!(stdout.contains("Re-identification risk:    High"));
    assert!(stdout.contains("Overall confidence: 0.76"));
    Ok(())
}

#[test]
fn test_score_reads_response_from_stdin_as_json() -> Result<()> {
    let text = temp_file(REPORT)?;

    let output = extractguard()
        .args(["score", "--json", "--text"])
        .arg(text.path())
        .write_stdin(RESPONSE)
        .output()?;

    assert!(output.status.success());
    let result: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(result["confidence"]["patientID"], 0.7);
    assert_eq!(result["confidence"]["diagnosis"], 0.0);
    assert_eq!(result["privacy_risk"]["risk_before_anonymization"], 75.0);
    assert_eq!(result["privacy_risk"]["k_anonymity_estimate"], 15);
    assert_eq!(result["privacy_risk"]["reidentification_risk"], "High");
    assert_eq!(result["data"], serde_json::from_str::<Value>(RESPONSE)?);
    Ok(())
}

#[test]
fn test_score_writes_json_file() -> Result<()> {
    let text = temp_file(REPORT)?;
    let out_dir = tempfile::tempdir()?;
    let json_path = out_dir.path().join("result.json");

    extractguard()
        .args(["score", "--quiet", "--text"])
        .arg(text.path())
        .arg("--json-file")
        .arg(&json_path)
        .write_stdin(RESPONSE)
        .assert()
        .success();

    let written: Value = serde_json::from_str(&std::fs::read_to_string(&json_path)?)?;
    assert_eq!(written["overall_confidence"], 0.76);
    Ok(())
}

#[test]
fn test_score_json_file_is_announced_on_stderr() -> Result<()> {
    let text = temp_file(REPORT)?;
    let out_dir = tempfile::tempdir()?;
    let json_path = out_dir.path().join("result.json");

    extractguard()
        .args(["score", "--text"])
        .arg(text.path())
        .arg("--json-file")
        .arg(&json_path)
        .write_stdin(RESPONSE)
        .assert()
        .success()
        .stdout(predicate::str::contains("Extraction Confidence Report"))
        .stderr(predicate::str::contains("JSON result written to"));
    Ok(())
}

#[test]
fn test_score_fail_over_risk_exits_with_two() -> Result<()> {
    let text = temp_file(REPORT)?;

    extractguard()
        .args(["score", "--fail-over-risk", "50", "--text"])
        .arg(text.path())
        .write_stdin(RESPONSE)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("exceeds the allowed threshold"));
    Ok(())
}

#[test]
fn test_score_rejects_malformed_response() -> Result<()> {
    let text = temp_file(REPORT)?;

    extractguard()
        .args(["score", "--text"])
        .arg(text.path())
        .write_stdin("{\"patientName\": ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Failed to process model response"));
    Ok(())
}

#[test]
fn test_score_missing_text_file() {
    extractguard()
        .args(["score", "--text", "/no/such/report.txt"])
        .write_stdin(RESPONSE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read document text"));
}

#[test]
fn test_debug_logs_redact_extracted_values() -> Result<()> {
    let text = temp_file(REPORT)?;

    let output = extractguard()
        .args(["score", "--debug", "--json", "--text"])
        .arg(text.path())
        .write_stdin(RESPONSE)
        .output()?;

    assert!(output.status.success());
    let stderr = plain(&output.stderr);
    assert!(stderr.contains("Scored field 'patientStreet' (value: '[REDACTED: 15 chars]')"));
    assert!(!stderr.contains("Baker Street 12"));
    Ok(())
}

#[test]
fn test_debug_logs_show_values_when_allowed() -> Result<()> {
    let text = temp_file(REPORT)?;

    let output = extractguard()
        .env("EXTRACTGUARD_ALLOW_DEBUG_PII", "true")
        .args(["score", "--debug", "--json", "--text"])
        .arg(text.path())
        .write_stdin(RESPONSE)
        .output()?;

    assert!(output.status.success());
    let stderr = plain(&output.stderr);
    assert!(stderr.contains("Scored field 'patientStreet' (value: 'Baker Street 12')"));
    Ok(())
}

#[test]
fn test_config_override_changes_scores() -> Result<()> {
    let text = temp_file(REPORT)?;
    let config = temp_file("exact_match_score: 0.8\n")?;

    let output = extractguard()
        .args(["score", "--json", "--text"])
        .arg(text.path())
        .arg("--config")
        .arg(config.path())
        .write_stdin(r#"{"patientName": "John Smith"}"#)
        .output()?;

    assert!(output.status.success());
    let result: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(result["confidence"]["patientName"], 0.8);
    Ok(())
}

#[test]
fn test_invalid_config_is_reported() -> Result<()> {
    let config = temp_file("detection_threshold: 2.0\n")?;

    extractguard()
        .args(["config", "show", "--config"])
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("detection_threshold"));
    Ok(())
}

#[test]
fn test_config_show_yaml() {
    extractguard()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("exact_match_score: 0.9"))
        .stdout(predicate::str::contains("- patientPostalCode"));
}

#[test]
fn test_stats_from_json_array() -> Result<()> {
    let records = r#"[
        {"data": {"patientID": "A-1", "patientName": "Jane"}, "confidence": {"patientID": 0.8, "patientName": 0.9}},
        {"data": {"patientName": "John", "patientID": "null"}, "confidence": {"patientName": 0.7}}
    ]"#;

    let output = extractguard().args(["stats", "--json"]).write_stdin(records).output()?;

    assert!(output.status.success());
    let stats: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(stats["total_documents"], 2);
    assert_eq!(stats["entity_counts"]["patientName"], 2);
    assert_eq!(stats["entity_counts"]["patientID"], 1);
    assert_eq!(stats["average_confidence"]["patientID"], 0.8);
    assert_eq!(stats["average_confidence"]["patientName"], 0.8);
    Ok(())
}

#[test]
fn test_stats_table_from_json_lines_file() -> Result<()> {
    let input = temp_file(
        "{\"data\": {\"patientCity\": \"Leeds\"}, \"confidence\": {\"patientCity\": 0.9}}\n\
         {\"data\": {\"patientCity\": \"York\"}, \"confidence\": {\"patientCity\": 0.5}}\n",
    )?;

    let output = extractguard().arg("stats").arg("--input").arg(input.path()).output()?;

    assert!(output.status.success());
    let stdout = plain(&output.stdout);
    assert!(stdout.contains("Documents processed: 2"));
    assert!(stdout.contains("patientCity"));
    assert!(stdout.contains("0.70"));
    Ok(())
}

#[test]
fn test_score_json_output_feeds_stats() -> Result<()> {
    let text = temp_file(REPORT)?;

    let scored = extractguard()
        .args(["score", "--json", "--text"])
        .arg(text.path())
        .write_stdin(RESPONSE)
        .output()?;
    assert!(scored.status.success());

    // Two pretty-printed results back to back.
    let mut batch = scored.stdout.clone();
    batch.extend_from_slice(&scored.stdout);

    let output = extractguard().args(["stats", "--json"]).write_stdin(batch).output()?;

    assert!(output.status.success());
    let stats: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(stats["total_documents"], 2);
    assert_eq!(stats["entity_counts"]["patientID"], 2);
    assert_eq!(stats["average_confidence"]["patientID"], 0.7);
    assert!(stats["entity_counts"].get("diagnosis").is_none());
    Ok(())
}

#[test]
fn test_invalid_theme_color_is_rejected() -> Result<()> {
    let theme = temp_file("risk_high:\n  fg: purple\n")?;

    extractguard()
        .args(["config", "show", "--theme"])
        .arg(theme.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse theme file"));
    Ok(())
}

#[test]
fn test_no_arguments_prints_help() {
    extractguard()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
