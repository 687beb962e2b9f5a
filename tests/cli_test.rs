//! End-to-end tests for the `sample-app` binary.
//!
//! To run these tests:
//! ```bash
//! cargo test --test cli_test
//! ```

use assert_cmd::Command;
use predicates::prelude::*;

fn sample_app() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sample-app"));
    // Keep the configured log level in effect regardless of the caller's shell
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_no_arguments_prints_banner_and_sum() {
    sample_app()
        .assert()
        .success()
        .code(0)
        .stdout("Java Application Started\n10 + 20 = 30\n");
}

#[test]
fn test_logs_stay_off_stdout() {
    sample_app()
        .args(["--log-level", "debug"])
        .assert()
        .success()
        .stdout("Java Application Started\n10 + 20 = 30\n")
        .stderr(predicate::str::contains("computed sum"));
}

#[test]
fn test_invalid_log_level_fails() {
    sample_app()
        .args(["--log-level", "verbose"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid log level: verbose"));
}

#[test]
fn test_unexpected_positional_argument_fails() {
    sample_app().arg("extra").assert().failure().code(2);
}
