//! Integration tests for CLI infrastructure

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo_bin;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use pagefold_testkit::{fixtures, temp_dir_in_workspace};

#[test]
fn test_cli_version_flag() {
    let mut cmd = Command::new(cargo_bin!(env!("CARGO_PKG_NAME")));
    let assert = cmd.arg("--version").assert();

    assert.success().stdout(predicate::str::contains("pagefold"));
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::new(cargo_bin!(env!("CARGO_PKG_NAME")));
    let assert = cmd.arg("--help").assert();

    assert
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn test_render_unknown_template_reports_not_found() {
    let temp = temp_dir_in_workspace();
    fixtures::write_sample_site(temp.path()).unwrap();

    let mut cmd = Command::new(cargo_bin!(env!("CARGO_PKG_NAME")));
    let assert = cmd
        .arg("render")
        .arg("missing.html")
        .arg("--dir")
        .arg(temp.path())
        .assert();

    assert
        .failure()
        .stderr(predicate::str::contains("TEMPLATE_NOT_FOUND"));
}

#[test]
fn test_render_malformed_template_reports_malformed() {
    let temp = temp_dir_in_workspace();
    fs::write(temp.path().join("broken.html"), "<html><head><title>T</title>").unwrap();

    let mut cmd = Command::new(cargo_bin!(env!("CARGO_PKG_NAME")));
    let assert = cmd
        .arg("render")
        .arg("broken.html")
        .arg("--dir")
        .arg(temp.path())
        .assert();

    assert
        .failure()
        .stderr(predicate::str::contains("TEMPLATE_MALFORMED"))
        .stderr(predicate::str::contains("broken.html"));
}

#[test]
fn test_check_reports_cycle() {
    let temp = temp_dir_in_workspace();
    fs::write(
        temp.path().join("loop.html"),
        "<html>\n<head>\n<meta name=\"layout\" content=\"loop.html\"/>\n</head>\n<body>x</body>\n</html>",
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!(env!("CARGO_PKG_NAME")));
    let assert = cmd
        .arg("check")
        .arg("loop.html")
        .arg("--dir")
        .arg(temp.path())
        .assert();

    assert
        .failure()
        .stderr(predicate::str::contains("LAYOUT_INHERITANCE_CYCLE"));
}

#[test]
fn test_list_empty_directory() {
    let temp = temp_dir_in_workspace();

    let mut cmd = Command::new(cargo_bin!(env!("CARGO_PKG_NAME")));
    let assert = cmd.arg("list").arg("--dir").arg(temp.path()).assert();

    assert
        .success()
        .stdout(predicate::str::contains("No '.html' templates found"));
}
