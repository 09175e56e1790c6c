//! Configuration integration tests.
//!
//! These tests verify config discovery, format parsing, and precedence
//! from an end-to-end perspective using the compiled binary.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Run a command from a directory and parse its JSON output.
fn json_in(dir: &Path, args: &[&str]) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap()])
        .args(args)
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

const NARROW_CSV: &str = "\
Employer,City,Tags,Summary
Acme,Pune,SQL;Excel,Good role
Acme,Delhi,sql,
";

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let json = json_in(tmp.path(), &["info", "--json"]);

    assert_eq!(json["config"]["log_level"], "info");
    assert!(json["config"]["config_file"].is_null());
    assert_eq!(json["config"]["top"]["companies"], 20);
}

#[test]
fn discovers_dotfile_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".jobscope.toml"), r#"log_level = "debug""#).unwrap();

    let json = json_in(tmp.path(), &["info", "--json"]);

    assert_eq!(json["config"]["log_level"], "debug");
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(reported.ends_with(".jobscope.toml"), "{reported}");
}

#[test]
fn discovers_config_in_parent_directory() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("exports").join("2024");
    fs::create_dir_all(&sub_dir).unwrap();
    fs::write(tmp.path().join("jobscope.yaml"), "top:\n  skills: 5\n").unwrap();

    let json = json_in(&sub_dir, &["info", "--json"]);

    assert_eq!(json["config"]["top"]["skills"], 5);
}

#[test]
fn config_columns_drive_report_mapping() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("jobscope.toml"),
        r#"skills_delimiter = ";"

[columns]
company = "Employer"
location = "City"
skills = "Tags"
description = "Summary"
"#,
    )
    .unwrap();
    fs::write(tmp.path().join("jobs.csv"), NARROW_CSV).unwrap();

    let json = json_in(tmp.path(), &["report", "jobs.csv", "--json"]);

    assert_eq!(json["mapping"]["company"]["name"], "Employer");
    let skills = json["skills"]["entries"].as_array().unwrap();
    assert_eq!(skills.last().unwrap()["label"], "sql");
    assert_eq!(skills.last().unwrap()["count"], 2);
    assert_eq!(json["description_cloud"]["corpus"], "Good role ");
}

#[test]
fn cli_flag_overrides_config_column() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("jobscope.toml"),
        "[columns]\ncompany = \"Employer\"\nlocation = \"City\"\nskills = \"Tags\"\ndescription = \"Summary\"\n",
    )
    .unwrap();
    fs::write(tmp.path().join("jobs.csv"), NARROW_CSV).unwrap();

    let json = json_in(
        tmp.path(),
        &["report", "jobs.csv", "--company", "City", "--json"],
    );

    assert_eq!(json["mapping"]["company"]["name"], "City");
}

#[test]
fn top_limits_truncate_and_retitle() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("jobscope.toml"),
        "[top]\ncompanies = 1\n\n[columns]\ncompany = \"Employer\"\nlocation = \"City\"\nskills = \"Tags\"\ndescription = \"Summary\"\n",
    )
    .unwrap();
    fs::write(
        tmp.path().join("jobs.csv"),
        "Employer,City,Tags,Summary\nAcme,Pune,SQL,x\nGlobex,Pune,SQL,y\nAcme,Pune,SQL,z\n",
    )
    .unwrap();

    let json = json_in(tmp.path(), &["report", "jobs.csv", "--json"]);

    assert_eq!(json["companies"]["title"], "Top Hiring Companies (Top 1)");
    let companies = json["companies"]["entries"].as_array().unwrap();
    assert_eq!(companies.len(), 1);
    assert_eq!(companies[0]["label"], "Acme");
}

#[test]
fn input_limit_rejects_large_files() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("jobscope.toml"), "max_input_bytes = 10\n").unwrap();
    fs::write(tmp.path().join("jobs.csv"), NARROW_CSV).unwrap();

    let output = cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "report", "jobs.csv"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("input too large"));
}

#[test]
fn explicit_config_flag_wins() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("jobscope.toml"), r#"log_level = "warn""#).unwrap();
    let explicit = tmp.path().join("other.toml");
    fs::write(&explicit, r#"log_level = "error""#).unwrap();

    let json = json_in(
        tmp.path(),
        &["--config", explicit.to_str().unwrap(), "info", "--json"],
    );

    assert_eq!(json["config"]["log_level"], "error");
}

#[test]
fn invalid_config_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("jobscope.toml"), "[top]\nskills = \"many\"\n").unwrap();

    let output = cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("configuration"));
}
