//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Eight columns in the usual export layout: company is 2nd, location 5th,
/// skills 7th, description 8th.
const JOBS_CSV: &str = "\
Title,Company,Rating,Experience,Location,Salary,Skills,Description
Business Analyst,Acme,4.1,2-5 Yrs,Pune,Not disclosed,\"Python, SQL\",Great job
Data Analyst,Acme,4.1,1-3 Yrs,Bengaluru,Not disclosed,\"python,Excel\",
BA Lead,Globex,3.9,5-8 Yrs,Pune,Not disclosed,,job opportunity
";

fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn report_json(args: &[&str]) -> Value {
    let output = cmd().args(args).output().expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("report"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Report Command
// =============================================================================

#[test]
fn report_without_file_waits_for_input() {
    cmd()
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("Upload a spreadsheet"));
}

#[test]
fn report_without_file_json_reports_waiting() {
    let json = report_json(&["report", "--json"]);
    assert_eq!(json["status"], "waiting");
}

#[test]
fn report_json_contains_all_five_payloads() {
    let tmp = TempDir::new().unwrap();
    let file = write_fixture(tmp.path(), "jobs.csv", JOBS_CSV);

    let json = report_json(&["report", file.to_str().unwrap(), "--json"]);

    assert_eq!(json["rows"], 3);
    // Bars ascending for horizontal layout
    let companies = json["companies"]["entries"].as_array().unwrap();
    assert_eq!(companies[0]["label"], "Globex");
    assert_eq!(companies[1]["label"], "Acme");
    assert_eq!(companies[1]["count"], 2);

    let locations = json["locations"]["entries"].as_array().unwrap();
    assert_eq!(locations[0]["label"], "Pune");
    assert_eq!(locations[0]["count"], 2);

    let skills = json["skills"]["entries"].as_array().unwrap();
    assert_eq!(skills.last().unwrap()["label"], "python");
    assert_eq!(skills.last().unwrap()["count"], 2);

    assert_eq!(
        json["description_cloud"]["corpus"],
        "Great job  job opportunity"
    );
    assert_eq!(json["skills_cloud"]["corpus"], "python sql python excel");
    assert_eq!(json["mapping"]["skills"]["name"], "Skills");
}

#[test]
fn report_is_deterministic() {
    let tmp = TempDir::new().unwrap();
    let file = write_fixture(tmp.path(), "jobs.csv", JOBS_CSV);
    let path = file.to_str().unwrap();

    let first = report_json(&["report", path, "--json"]);
    let second = report_json(&["report", path, "--json"]);
    assert_eq!(first, second);
}

#[test]
fn report_text_preview_lists_sections() {
    let tmp = TempDir::new().unwrap();
    let file = write_fixture(tmp.path(), "jobs.csv", JOBS_CSV);

    cmd()
        .args(["--color", "never", "report", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Top Hiring Companies (Top 20)"))
        .stdout(predicate::str::contains("Top Job Locations (Treemap)"))
        .stdout(predicate::str::contains("Top Skills (Top 30)"))
        .stdout(predicate::str::contains("Word Cloud - Job Descriptions"))
        .stdout(predicate::str::contains("Word Cloud - Skills"));
}

#[test]
fn report_column_flags_override_defaults() {
    let tmp = TempDir::new().unwrap();
    let file = write_fixture(tmp.path(), "jobs.csv", JOBS_CSV);

    let json = report_json(&[
        "report",
        file.to_str().unwrap(),
        "--company",
        "Title",
        "--json",
    ]);
    assert_eq!(json["mapping"]["company"]["name"], "Title");
    assert_eq!(json["companies"]["entries"].as_array().unwrap().len(), 3);
}

#[test]
fn report_unknown_column_fails_with_named_error() {
    let tmp = TempDir::new().unwrap();
    let file = write_fixture(tmp.path(), "jobs.csv", JOBS_CSV);

    cmd()
        .args(["report", file.to_str().unwrap(), "--skills", "Tags"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Tags"));
}

#[test]
fn report_narrow_file_fails_on_default_mapping() {
    let tmp = TempDir::new().unwrap();
    let file = write_fixture(tmp.path(), "jobs.csv", "Company,Location\nAcme,Pune\n");

    cmd()
        .args(["report", file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("only 2 columns"));
}

#[test]
fn report_rejects_unreadable_workbook() {
    let tmp = TempDir::new().unwrap();
    let file = write_fixture(tmp.path(), "jobs.xlsx", "not a workbook");

    cmd()
        .args(["report", file.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to load"));
}

#[test]
fn report_writes_output_file() {
    let tmp = TempDir::new().unwrap();
    let file = write_fixture(tmp.path(), "jobs.csv", JOBS_CSV);
    let out = tmp.path().join("dashboard.json");

    cmd()
        .args([
            "report",
            file.to_str().unwrap(),
            "--output",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    let json: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["skills_cloud"]["max_words"], 150);
}

#[test]
fn report_reads_tsv() {
    let tmp = TempDir::new().unwrap();
    let file = write_fixture(
        tmp.path(),
        "jobs.tsv",
        "Company\tCity\tSkills\tText\nAcme\tPune\tSQL\tNice\n",
    );

    let json = report_json(&[
        "report",
        file.to_str().unwrap(),
        "--company",
        "Company",
        "--location",
        "City",
        "--skills",
        "Skills",
        "--description",
        "Text",
        "--json",
    ]);
    assert_eq!(json["skills"]["entries"][0]["label"], "sql");
}

// =============================================================================
// Columns & Schema Commands
// =============================================================================

#[test]
fn columns_lists_defaults() {
    let tmp = TempDir::new().unwrap();
    let file = write_fixture(tmp.path(), "jobs.csv", JOBS_CSV);

    let json = report_json(&["columns", file.to_str().unwrap(), "--json"]);
    assert_eq!(json["rows"], 3);
    assert_eq!(json["columns"][1]["name"], "Company");
    assert_eq!(json["columns"][1]["default_for"][0], "company");
    assert_eq!(json["columns"][7]["missing"], 1);
}

#[test]
fn columns_text_output() {
    let tmp = TempDir::new().unwrap();
    let file = write_fixture(tmp.path(), "jobs.csv", JOBS_CSV);

    cmd()
        .args(["--color", "never", "columns", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Description"))
        .stdout(predicate::str::contains("[default skills]"));
}

#[test]
fn schema_outputs_json_schema() {
    let json = report_json(&["schema"]);
    assert!(json["properties"]["companies"].is_object());
}

// =============================================================================
// Info Command & Global Flags
// =============================================================================

#[test]
fn info_json_outputs_valid_json() {
    let json = report_json(&["info", "--json"]);
    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn quiet_and_verbose_flags_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_never_accepted() {
    cmd().args(["--color", "never", "info"]).assert().success();
}

#[test]
fn invalid_subcommand_fails() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}
