//! End-to-end tests for the `usgc` binary: exit codes and the shape of
//! stdout/stderr for a real child process.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn usgc_bin() -> Command {
    Command::new(PathBuf::from(env!("CARGO_BIN_EXE_usgc")))
}

fn write_help_text(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn help_flag_describes_the_binary() {
    usgc_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("docopt"));
}

#[test]
fn clean_input_exits_zero_and_prints_the_tree() {
    let dir = TempDir::new().unwrap();
    let input = write_help_text(&dir, "help.txt", "Usage:\n  prog FILE\n");

    usgc_bin()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("prog FILE"));
}

#[test]
fn missing_input_file_exits_one() {
    usgc_bin()
        .arg("/no/such/help.txt")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error"));
}

#[test]
fn diagnostics_do_not_fail_the_run_by_default() {
    let dir = TempDir::new().unwrap();
    let input = write_help_text(&dir, "help.txt", "Usage:\n  prog FILE\n  other FILE\n");

    usgc_bin()
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("expected program name"));
}

#[test]
fn warnings_as_errors_turns_diagnostics_into_exit_code_two() {
    let dir = TempDir::new().unwrap();
    let input = write_help_text(&dir, "help.txt", "Usage:\n  prog FILE\n  other FILE\n");

    usgc_bin()
        .arg(&input)
        .arg("--warnings-as-errors")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn emit_tree_prints_a_debug_form_instead_of_pretty_text() {
    let dir = TempDir::new().unwrap();
    let input = write_help_text(&dir, "help.txt", "Usage:\n  prog FILE\n");

    usgc_bin()
        .arg(&input)
        .arg("--emit-tree")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage(").or(predicate::str::contains("UsageData")));
}

#[test]
fn output_flag_writes_the_rendered_tree_to_a_file() {
    let dir = TempDir::new().unwrap();
    let input = write_help_text(&dir, "help.txt", "Usage:\n  prog FILE\n");
    let output = dir.path().join("out.txt");

    usgc_bin().arg(&input).arg("--output").arg(&output).assert().success();

    let rendered = std::fs::read_to_string(&output).unwrap();
    assert!(rendered.contains("prog FILE"));
}

#[test]
fn config_file_sets_emit_tree_without_a_cli_flag() {
    let dir = TempDir::new().unwrap();
    let input = write_help_text(&dir, "help.txt", "Usage:\n  prog FILE\n");
    let config_path = dir.path().join("usgc.toml");
    std::fs::write(&config_path, "emit_tree = true\n").unwrap();

    usgc_bin()
        .arg(&input)
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage(").or(predicate::str::contains("UsageData")));
}

#[test]
fn bad_config_file_exits_one() {
    let dir = TempDir::new().unwrap();
    let input = write_help_text(&dir, "help.txt", "Usage:\n  prog FILE\n");
    let config_path = dir.path().join("usgc.toml");
    std::fs::write(&config_path, "emit_tree = \"not a bool\"\n").unwrap();

    usgc_bin()
        .arg(&input)
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .code(1);
}
