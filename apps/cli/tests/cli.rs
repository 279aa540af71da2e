//! End-to-end tests for the `ojkit` binary

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ojkit(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ojkit").unwrap();
    cmd.current_dir(dir)
        .env_remove("OJKIT_CONFIG")
        .env_remove("OJKIT_LOG")
        .env_remove("RUST_LOG")
        .env_remove("OJKIT_NORMALIZE")
        .env_remove("OJKIT_LOG_TIME")
        .env_remove("OJKIT_LOG_SOURCE")
        .env_remove("OJKIT_LOG_COLORS")
        .env("OJKIT_LOG_FORMAT", "compact");
    cmd
}

fn workspace(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, content) in files {
        fs::write(dir.path().join(name), content).unwrap();
    }
    dir
}

#[test]
fn check_passes_within_int32() {
    let dir = workspace(&[("1.in", "3\n-5 0 2147483647\n")]);
    ojkit(dir.path())
        .args(["check", "1.in", "--int32", "allow"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ok").and(predicate::str::contains("1.in")));
}

#[test]
fn check_fails_outside_int32() {
    let dir = workspace(&[("big.in", "1 2147483648\n")]);
    ojkit(dir.path())
        .args(["check", "big.in", "--int32", "allow"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("FAIL").and(predicate::str::contains("2147483648")));
}

#[test]
fn check_report_mode_still_fails() {
    let dir = workspace(&[("big.in", "-1\n")]);
    ojkit(dir.path())
        .args(["check", "big.in", "--natural", "allow", "--report"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("FAIL  big.in"));
}

#[test]
fn check_explicit_range_and_any() {
    let dir = workspace(&[("1.in", "-100 5 100\n")]);
    ojkit(dir.path())
        .args(["check", "1.in", "--lo", "-10", "--hi", "10"])
        .assert()
        .code(1);
    ojkit(dir.path())
        .args(["check", "1.in", "--lo", "-10", "--hi", "10", "--any"])
        .assert()
        .success();
}

#[test]
fn check_time_limit_uses_configured_throughput() {
    let dir = workspace(&[("1.in", "1500\n"), ("ojkit.toml", "throughput = 1000\n")]);
    ojkit(dir.path())
        .args(["check", "1.in", "--time-limit", "1"])
        .assert()
        .code(1);
    ojkit(dir.path())
        .args(["check", "1.in", "--time-limit", "2"])
        .assert()
        .success();
    ojkit(dir.path())
        .args(["check", "1.in", "--time-limit", "1", "--throughput", "2000"])
        .assert()
        .success();
}

#[test]
fn check_without_constraints_is_an_error() {
    let dir = workspace(&[("1.in", "1\n")]);
    ojkit(dir.path())
        .args(["check", "1.in"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no constraints specified"));
}

#[test]
fn check_rejects_inverted_range() {
    let dir = workspace(&[("1.in", "1\n")]);
    ojkit(dir.path())
        .args(["check", "1.in", "--lo", "5", "--hi", "1"])
        .assert()
        .failure();
}

#[test]
fn check_rejects_non_integer_tokens() {
    let dir = workspace(&[("1.in", "1 abc\n")]);
    ojkit(dir.path())
        .args(["check", "1.in", "--int64", "allow"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("`abc` is not an integer"));
}

#[test]
fn pack_writes_default_archive() {
    let dir = workspace(&[]);
    let cases = dir.path().join("cases");
    fs::create_dir(&cases).unwrap();
    fs::write(cases.join("1.in"), "  1 2\n").unwrap();
    fs::write(cases.join("1.out"), "3\n").unwrap();

    ojkit(dir.path())
        .args(["pack", "cases", "--title", "sum", "--normalize"])
        .assert()
        .success()
        .stdout(predicate::str::contains("packed 1 test case(s)"));

    assert!(dir.path().join("sum.zip").is_file());
}

#[test]
fn pack_reports_missing_pair() {
    let dir = workspace(&[("1.in", "1\n")]);
    ojkit(dir.path())
        .args(["pack", ".", "--title", "p", "--out", "p.zip"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no matching output"));
}

#[test]
fn invalid_log_level_is_reported() {
    let dir = workspace(&[("1.in", "1\n")]);
    ojkit(dir.path())
        .args(["--log-level", "ojkit=loud", "check", "1.in", "--natural", "allow"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid filter"));
}

#[test]
fn pack_as_dir_writes_manifest() {
    let dir = workspace(&[]);
    let cases = dir.path().join("cases");
    fs::create_dir(&cases).unwrap();
    fs::write(cases.join("a.in"), "1\n").unwrap();
    fs::write(cases.join("a.out"), "1\n").unwrap();

    ojkit(dir.path())
        .args(["pack", "cases", "--title", "echo", "--as-dir", "--spj"])
        .assert()
        .success();

    let info = fs::read_to_string(dir.path().join("echo").join("info")).unwrap();
    assert!(info.starts_with(r#"{"spj": true, "testcases": {"a": {"#));
    assert!(dir.path().join("echo").join("a.in").is_file());
}

#[test]
fn env_switches_accept_common_spellings() {
    let dir = workspace(&[]);
    let cases = dir.path().join("cases");
    fs::create_dir(&cases).unwrap();
    fs::write(cases.join("1.in"), "    1 2   \n").unwrap();
    fs::write(cases.join("1.out"), "3\n").unwrap();

    ojkit(dir.path())
        .env("OJKIT_LOG_FORMAT", "JSON")
        .env("OJKIT_NORMALIZE", "1")
        .env("OJKIT_LOG_TIME", "0")
        .args(["pack", "cases", "--title", "sum", "--as-dir"])
        .assert()
        .success();

    let input = fs::read_to_string(dir.path().join("sum").join("1.in")).unwrap();
    assert_eq!(input, "1 2\n");
}
