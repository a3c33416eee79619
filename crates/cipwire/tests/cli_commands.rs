#![cfg(feature = "cli")]

use std::process::{Command, Output};

fn cipwire(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cipwire"))
        .arg("--log-level")
        .arg("off")
        .arg("--format")
        .arg("json")
        .args(args)
        .output()
        .expect("cipwire should run")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(stdout.trim()).expect("stdout should be JSON")
}

#[test]
fn decode_dint_from_hex() {
    let output = cipwire(&["decode", "DINT", "01 00 00 00"]);
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["label"], "0xC4 - DINT");
    assert_eq!(json["units"][0]["value"], 1);
    assert_eq!(json["bytes_consumed"], 4);
    assert_eq!(json["faults"], 0);
}

#[test]
fn decode_real_by_code() {
    let output = cipwire(&["decode", "0xCA", "00", "00", "80", "3F"]);
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["units"][0]["value"], 1.0);
    assert_eq!(json["units"][0]["kind"], "f32");
}

#[test]
fn decode_short_input_records_fault_and_succeeds() {
    let output = cipwire(&["decode", "LINT", "01 02"]);
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["faults"], 1);
    assert_eq!(json["units"][0]["value"], 0);
    assert!(json["units"][0]["fault"]
        .as_str()
        .expect("fault should be a string")
        .contains("0xC5 - LINT"));
}

#[test]
fn decode_short_input_strict_returns_60() {
    let output = cipwire(&["decode", "LINT", "01 02", "--strict"]);
    assert_eq!(output.status.code(), Some(60));
}

#[test]
fn decode_oversized_count_stops_at_end_of_input() {
    let output = cipwire(&["decode", "DINT", "01000000", "-n", "18446744073709551615"]);
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["units"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["units"][0]["value"], 1);
    assert_eq!(json["faults"], 1);
    assert_eq!(json["bytes_consumed"], 4);
}

#[test]
fn decode_struct_returns_usage() {
    let output = cipwire(&["decode", "Struct", "00"]);
    assert_eq!(output.status.code(), Some(64));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("0xA0 - Struct"));
}

#[test]
fn decode_unknown_tag_name_returns_usage() {
    let output = cipwire(&["decode", "QWORD", "00"]);
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn decode_from_file() {
    let path = std::env::temp_dir().join(format!("cipwire-units-{}.bin", std::process::id()));
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&7u16.to_le_bytes());
    bytes.extend_from_slice(&9u16.to_le_bytes());
    std::fs::write(&path, &bytes).expect("fixture should be writable");

    let output = cipwire(&["decode", "UINT", "--file", path.to_str().unwrap()]);
    let _ = std::fs::remove_file(&path);

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["units"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["units"][1]["value"], 9);
}

#[test]
fn types_lists_full_table() {
    let output = cipwire(&["types"]);
    assert!(output.status.success());

    let json = stdout_json(&output);
    let rows = json.as_array().expect("types output should be an array");
    assert_eq!(rows.len(), 17);
    assert_eq!(rows[1]["label"], "0xA0 - Struct");
    assert_eq!(rows[1]["size"], 88);
}

#[test]
fn classify_text_maps_to_struct() {
    let output = cipwire(&["classify", "text"]);
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["label"], "0xA0 - Struct");
    assert_eq!(json["mapped"], true);
}

#[test]
fn classify_usize_is_unmapped() {
    let output = cipwire(&["classify", "usize"]);
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["tag"], "Unknown");
    assert_eq!(json["mapped"], false);
}
