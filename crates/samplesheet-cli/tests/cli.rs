//! End-to-end tests driving the `samplesheet` binary.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const FULL_HEADER: &str = "Sample ID,Submitter Library Name,Index 1 ID,\
                           Index 1 (i7) Sequence in 5' to 3' orientation,\
                           Index 2 ID,Index 2 (i5) Sequence in 5' to 3' orientation,Index ID,Index Tag";

const ROWS: &str = "A35376,BC003BRHSC1,HSC_A1,TAAGGCGA,HSC_A1,CTCTCTAT,HSC_A1,TAAGGCGA-CTCTCTAT\n\
                    A35377,BC003BRHSC2,HSC_B1,CGTACTAG,HSC_B1,TATCCTCT,HSC_B1,CGTACTAG-TATCCTCT\n";

fn write_sheet(dir: &Path, header: &str, rows: &str) -> PathBuf {
    let path = dir.join("SampleSheet.csv");
    std::fs::write(&path, format!("{header}\n{rows}")).expect("write sheet");
    path
}

fn run(args: &[&OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_samplesheet"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run samplesheet")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn valid_sheet_exits_zero_with_confirmation() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_sheet(dir.path(), FULL_HEADER, ROWS);

    let output = run(&[path.as_os_str()]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "All good!  :)\n");
}

#[test]
fn missing_required_header_exits_two() {
    let dir = tempfile::tempdir().expect("temp dir");
    let header = FULL_HEADER.replacen("Index 1 ID,", "", 1);
    let path = write_sheet(dir.path(), &header, ROWS);

    let output = run(&[path.as_os_str()]);
    assert_eq!(output.status.code(), Some(2));
    let out = stdout(&output);
    assert!(out.starts_with("Missing required header: Index 1 ID\n"));
    assert!(!out.contains("All good!"));
}

#[test]
fn every_failure_is_printed() {
    let dir = tempfile::tempdir().expect("temp dir");
    let rows = "S1,Lib1,I1,ACGT,,,,\n\
                S1,Lib1,I2,TGCA,,,,\n\
                S2,Lib2,I3,TTTT,I5,GGGG,ID,TTTT-CCCC\n";
    let path = write_sheet(dir.path(), FULL_HEADER, rows);

    let output = run(&[path.as_os_str()]);
    assert_eq!(output.status.code(), Some(2));
    let out = stdout(&output);
    assert!(out.contains("'Sample ID' and 'Submitter Library Name' not unique"));
    assert!(out.contains("Expected and actual index tags do not match on row 4\n"));
    assert!(out.contains("Expected: TTTT-GGGG\nActual  : TTTT-CCCC\n"));
}

#[test]
fn malformed_line_is_fatal() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_sheet(dir.path(), FULL_HEADER, "S1,Lib1\n");

    let output = run(&[path.as_os_str()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("error: read sample sheet"));
    assert!(err.contains("expected at least 4 fields, found 2"));
}

#[test]
fn missing_file_is_fatal() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.csv");

    let output = run(&[path.as_os_str()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("sample sheet not found"));
}

#[test]
fn json_format_keeps_exit_code() {
    let dir = tempfile::tempdir().expect("temp dir");
    let header = FULL_HEADER.replacen("Sample ID,", "", 1);
    let path = write_sheet(dir.path(), &header, ROWS);

    let output = run(&[OsStr::new("--format"), OsStr::new("json"), path.as_os_str()]);
    assert_eq!(output.status.code(), Some(2));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json output");
    assert_eq!(json["passed"], false);
    assert_eq!(json["issues"][0]["header"], "Sample ID");
}

#[test]
fn blank_data_line_is_fatal() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_sheet(dir.path(), FULL_HEADER, "\nS1,L1,I1,ACGT,I5,GGGG,ID,WRONG\n");

    let output = run(&[path.as_os_str()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("line 2: expected at least 4 fields, found 1"));
}
