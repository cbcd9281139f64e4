// Regression tests: the sample hosting program's console protocol and exit
// status, in both fail-fast modes.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

#[test]
fn sample_suite_prints_protocol_lines_and_exits_nonzero() {
    let mut cmd = Command::cargo_bin("sample_suite").unwrap();
    cmd.assert()
        .code(1)
        .stdout(
            contains("[PASS] test_one")
                .and(contains(":test_two: error: assertion failed: 10 == 16"))
                .and(contains("[FAIL] test_two"))
                .and(contains("[PASS] test_three"))
                .and(contains("REPORT: executed 3 tests, 1 failed (0 skipped).")),
        );
}

#[test]
fn sample_suite_failfast_skips_the_rest_of_the_run() {
    let mut cmd = Command::cargo_bin("sample_suite").unwrap();
    cmd.arg("failfast");
    cmd.assert()
        .code(1)
        .stdout(
            contains("REPORT: executed 2 tests, 1 failed (1 skipped) (failfast).")
                .and(contains("test_three").not()),
        );
}

#[test]
fn sample_suite_colors_wrap_tags_in_ansi_codes() {
    let mut cmd = Command::cargo_bin("sample_suite").unwrap();
    cmd.arg("colors");
    cmd.assert().code(1).stdout(
        contains("\x1b[32m[PASS]\x1b[0m test_one")
            .and(contains("\x1b[31m[FAIL]\x1b[0m test_two"))
            .and(contains("\x1b[31merror:\x1b[0m")),
    );
}

#[test]
fn plain_output_carries_no_escape_codes() {
    let mut cmd = Command::cargo_bin("sample_suite").unwrap();
    cmd.assert().code(1).stdout(contains("\x1b[").not());
}
