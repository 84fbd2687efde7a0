//! Integration tests for the ksmin command line

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

use crate::helpers::{fixtures_dir, temp_script};

/// ksmin with a config path that does not exist, so user config never leaks in.
fn ksmin(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ksmin").expect("ksmin binary");
    cmd.arg("--config").arg(config_dir.join("absent.toml"));
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to execute ksmin");
    assert!(output.status.success(), "{:?}", output);
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

// ============================================================================
// Help and Usage
// ============================================================================

#[test]
fn help_lists_stage_flags() {
    Command::cargo_bin("ksmin")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--remove-comments"))
        .stdout(predicate::str::contains("--bind-functions"))
        .stdout(predicate::str::contains("--no-use-shortcuts"))
        .stdout(predicate::str::contains("--external <ID>"))
        .stdout(predicate::str::contains("KSMIN_LOG"));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    Command::cargo_bin("ksmin")
        .unwrap()
        .args(["--squash", "boot.ks"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn no_files_is_a_usage_error() {
    Command::cargo_bin("ksmin")
        .unwrap()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<FILE>"));
}

#[test]
fn completions_are_printed() {
    Command::cargo_bin("ksmin")
        .unwrap()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ksmin"));
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn missing_file_exits_1_without_output() {
    let (dir, present) = temp_script("present.ks", "print 1.\n");
    let missing = dir.path().join("missing.ks");
    ksmin(dir.path())
        .arg(&present)
        .arg(&missing)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("File not found"))
        .stderr(predicate::str::contains("missing.ks"));
}

#[test]
fn aliasing_without_renaming_is_rejected() {
    let (dir, path) = temp_script("boot.ks", "print vdot(a, b).\n");
    ksmin(dir.path())
        .arg("-f")
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "--alias-functions requires --replace-vars",
        ));
}

#[test]
fn output_requires_single_input() {
    let (dir, path) = temp_script("boot.ks", "print 1.\n");
    ksmin(dir.path())
        .arg("-o")
        .arg(dir.path().join("out.ks"))
        .arg(&path)
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("single input"));
}

#[test]
fn malformed_config_exits_1() {
    let (dir, path) = temp_script("boot.ks", "print 1.\n");
    let config = dir.path().join("config.toml");
    fs::write(&config, "[minify\n").unwrap();
    Command::cargo_bin("ksmin")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid config file"));
}

// ============================================================================
// Minification
// ============================================================================

#[test]
fn default_run_renames_and_joins() {
    let (dir, path) = temp_script("boot.ks", "set myVar to 5.\nprint myVar.\n");
    let out = stdout_of(ksmin(dir.path()).arg(&path));
    insta::assert_snapshot!(out, @"set a to 5. print a.");
}

#[test]
fn countdown_fixture_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let out = stdout_of(ksmin(dir.path()).arg(fixtures_dir().join("countdown.ks")));
    insta::assert_snapshot!(out, @r#"parameter targetalt is 80000. set a to 3. until a=0{print "T-"+a. set a to a-1.}"#);
}

#[test]
fn explicit_flags_limit_the_stages() {
    let (dir, path) = temp_script("boot.ks", "print 1. // one\n\n\nprint 2.\n");
    let out = stdout_of(ksmin(dir.path()).arg("-c").arg(&path));
    assert_eq!(out, "print 1.\nprint 2.");
}

#[test]
fn external_ids_keep_their_names() {
    let (dir, path) = temp_script("boot.ks", "set keep to 1. set other to keep.\n");
    let out = stdout_of(ksmin(dir.path()).args(["-e", "Keep"]).arg(&path));
    assert_eq!(out, "set keep to 1. set a to keep.");
}

#[test]
fn config_flags_apply_without_cli_flags() {
    let (dir, path) = temp_script("boot.ks", "set myVar to 5. // five\nprint myVar.\n");
    let config = dir.path().join("config.toml");
    fs::write(
        &config,
        "[minify]\nflags = [\"remove-comments\", \"replace-vars\"]\nexternal_ids = [\"myvar\"]\n",
    )
    .unwrap();
    let mut cmd = Command::cargo_bin("ksmin").unwrap();
    let out = stdout_of(cmd.arg("--config").arg(&config).arg(&path));
    assert_eq!(out, "set myvar to 5.\nprint myvar.");
}

#[test]
fn multiple_files_keep_input_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = ksmin(dir.path());
    for i in 0..8 {
        let path = dir.path().join(format!("part{}.ks", i));
        fs::write(&path, format!("print {}.\n", i)).unwrap();
        cmd.arg(path);
    }
    let out = stdout_of(&mut cmd);
    let expected: Vec<String> = (0..8).map(|i| format!("print {}.", i)).collect();
    assert_eq!(out, expected.join("\n"));
}

#[test]
fn output_flag_writes_file() {
    let (dir, path) = temp_script("boot.ks", "set myVar to 5.\nprint myVar.\n");
    let target = dir.path().join("boot.min.ks");
    ksmin(dir.path())
        .arg("-o")
        .arg(&target)
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    assert_eq!(fs::read_to_string(&target).unwrap(), "set a to 5. print a.");
}

#[test]
fn stats_go_to_stderr() {
    let (dir, path) = temp_script("boot.ks", "set myVar to 5.\nprint myVar.\n");
    ksmin(dir.path())
        .arg("--stats")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("set a to 5. print a."))
        .stderr(predicate::str::contains("29 -> 20 bytes"));
}
