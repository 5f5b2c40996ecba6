use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_remainder_policy_from_env() {
    let mut cmd = Command::new(cargo_bin!("loanflow"));
    cmd.env("LOANFLOW_REMAINDER", "extend-last")
        .args(["flow", "--years", "27", "--format", "csv"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1,Years 21–27,Principal,"));
}

#[test]
fn test_remainder_flag_overrides_env() {
    let mut cmd = Command::new(cargo_bin!("loanflow"));
    cmd.env("LOANFLOW_REMAINDER", "extend-last")
        .args(["flow", "--years", "27", "--format", "csv", "--remainder", "drop"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1,Years 21–25,Principal,"))
        .stdout(predicate::str::contains("Years 21–27").not());
}

#[test]
fn test_unit_scale_and_group_years() {
    let mut cmd = Command::new(cargo_bin!("loanflow"));
    cmd.args(["--unit-scale", "1", "--group-years", "10"])
        .args(["flow", "--principal", "250000", "--years", "30", "--format", "csv"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1,Years 1–10,Principal,"))
        .stdout(predicate::str::contains("1,Years 21–30,Interest,"))
        .stdout(predicate::str::contains("1,Principal,Total Paid,250000.00"));
}

#[test]
fn test_unit_scale_from_env() {
    let mut cmd = Command::new(cargo_bin!("loanflow"));
    cmd.env("LOANFLOW_UNIT_SCALE", "1")
        .args(["flow", "--principal", "1000", "--years", "5", "--format", "csv"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1,Principal,Total Paid,1000.00"));
}
