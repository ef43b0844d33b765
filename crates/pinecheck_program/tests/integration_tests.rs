//! Program integration tests.
//!
//! End-to-end checks of discovery, loading, parallel scanning and the
//! ordering of merged results.

use pinecheck_options::CheckOptions;
use pinecheck_program::{ExitStatus, Program};
use std::fs;
use std::path::PathBuf;

/// Helper: build a program from in-memory sources and check it.
fn check_sources(sources: &[(&str, &str)]) -> pinecheck_program::CheckReport {
    let mut program = Program::new(CheckOptions::default());
    for (path, text) in sources {
        program.add_source(*path, *text);
    }
    program.check().expect("check should run")
}

fn rendered(report: &pinecheck_program::CheckReport) -> Vec<String> {
    report.diagnostics.iter().map(|d| d.to_string()).collect()
}

#[test]
fn test_clean_program() {
    let report = check_sources(&[("a.pine", "plot(close[1])\n")]);
    assert!(report.diagnostics.is_empty());
    assert_eq!(report.files_checked, 1);
    assert_eq!(report.exit_status(), ExitStatus::Success);
    assert!(!report.has_errors());
}

#[test]
fn test_diagnostics_follow_file_order() {
    let report = check_sources(&[
        ("z.pine", ")"),
        ("a.pine", "("),
        ("m.pine", "ok = 1"),
        ("b.pine", "'x"),
    ]);
    assert_eq!(
        rendered(&report),
        vec![
            "z.pine:1:1: error: Unmatched closing ')'",
            "a.pine:1:1: error: Unclosed '(', expected ')'",
            "b.pine:1:2: error: Unterminated string literal at EOF",
        ]
    );
    assert_eq!(report.exit_status(), ExitStatus::Failure);
}

#[test]
fn test_files_do_not_share_state() {
    // An unclosed bracket in the first file must not be closed by the second.
    let report = check_sources(&[("a.pine", "f("), ("b.pine", ")")]);
    let files: Vec<&str> = report.diagnostics.iter().map(|d| d.file.as_str()).collect();
    assert_eq!(files, vec!["a.pine", "b.pine"]);
    assert_eq!(report.diagnostics.len(), 2);
}

#[test]
fn test_order_is_stable_with_many_files_and_workers() {
    let options = CheckOptions {
        jobs: Some(4),
        ..CheckOptions::default()
    };
    let mut program = Program::new(options);
    let names: Vec<String> = (0..64).map(|i| format!("f{:02}.pine", i)).collect();
    for name in &names {
        program.add_source(name.as_str(), "x = (1\n");
    }
    let report = program.check().unwrap();
    let files: Vec<String> = report.diagnostics.iter().map(|d| d.file.clone()).collect();
    assert_eq!(files, names);
}

#[test]
fn test_check_is_repeatable() {
    let mut program = Program::new(CheckOptions::default());
    program.add_source("a.pine", "([)]\n/* open");
    let first = program.check().unwrap();
    let second = program.check().unwrap();
    assert_eq!(first.diagnostics, second.diagnostics);
}

#[test]
fn test_load_error_does_not_stop_other_files() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.pine");
    fs::write(&good, "(").unwrap();
    let missing = dir.path().join("missing.pine");

    let mut program = Program::new(CheckOptions::default());
    program.add_root_files(vec![missing.clone(), good.clone()]);
    let report = program.check().unwrap();

    assert_eq!(report.load_errors.len(), 1);
    assert_eq!(report.load_errors[0].path(), missing.as_path());
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.files_checked, 1);
    assert_eq!(report.exit_status(), ExitStatus::Fatal);
    assert_eq!(report.exit_status().code(), 2);
}

#[test]
fn test_discover_walks_directories() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("b.pine"), "]").unwrap();
    fs::write(dir.path().join("sub/a.pine"), "ok").unwrap();
    fs::write(dir.path().join("readme.md"), "(").unwrap();

    let program = Program::discover(&[dir.path().to_path_buf()], CheckOptions::default());
    assert_eq!(program.len(), 2);
    assert_eq!(
        program.file_names(),
        vec![dir.path().join("b.pine"), dir.path().join("sub").join("a.pine")]
    );

    let report = program.check().unwrap();
    assert_eq!(report.diagnostics.len(), 1);
    assert!(report.diagnostics.diagnostics()[0]
        .to_string()
        .ends_with("b.pine:1:1: error: Unmatched closing ']'"));
}

#[test]
fn test_crlf_files_report_columns_without_carriage_returns() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("crlf.pine");
    fs::write(&path, "s = 'abc\r\nx = 1\r\n").unwrap();

    let mut program = Program::new(CheckOptions::default());
    program.add_root_files(vec![PathBuf::from(&path)]);
    let report = program.check().unwrap();
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics.diagnostics()[0].column(), 9);
}

#[test]
fn test_empty_program() {
    let program = Program::new(CheckOptions::default());
    assert!(program.is_empty());
    let report = program.check().unwrap();
    assert_eq!(report.files_checked, 0);
    assert_eq!(report.exit_status(), ExitStatus::Success);
}
