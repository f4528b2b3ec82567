//! Integration tests for global CLI behavior.

mod common;

use common::{SALES_COMPONENT, TestFixture};
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    artifact_html!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("inspect"))
        .stdout(predicate::str::contains("call"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn version_flag() {
    artifact_html!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("artifact-html"));
}

#[test]
fn missing_subcommand_fails() {
    artifact_html!().assert().failure();
}

#[test]
fn config_and_no_config_conflict() {
    artifact_html!()
        .args(["--config", "a.toml", "--no-config", "inspect", "-"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn debug_logging_reports_extraction_stage() {
    let fixture = TestFixture::new();
    let input = fixture.create_file("sales.tsx", SALES_COMPONENT);

    artifact_html!()
        .env_remove("RUST_LOG")
        .env_remove("ARTIFACT_HTML_LOG")
        .args(["--no-config", "-vv", "inspect", input.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("usage-linked"));
}

#[test]
fn log_env_variable_overrides_verbosity() {
    artifact_html!()
        .env("ARTIFACT_HTML_LOG", "debug")
        .args(["--no-config", "inspect", "-"])
        .write_stdin("<PieChart></PieChart>")
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"));
}

#[test]
fn quiet_silences_logs() {
    artifact_html!()
        .env("ARTIFACT_HTML_LOG", "trace")
        .args(["--no-config", "-q", "inspect", "-"])
        .write_stdin("<PieChart></PieChart>")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
