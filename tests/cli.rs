use predicates::prelude::*;

#[test]
fn cli_prints_usage_for_help() {
    let mut cmd = assert_cmd::Command::cargo_bin("rotsim").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn cli_fails_without_a_subcommand() {
    let mut cmd = assert_cmd::Command::cargo_bin("rotsim").unwrap();

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
