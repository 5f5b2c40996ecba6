use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_zero_principal_is_rejected() {
    let mut cmd = Command::new(cargo_bin!("loanflow"));
    cmd.args(["flow", "--principal", "0"]);

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Principal must be positive"));
}

#[test]
fn test_negative_rate_is_rejected() {
    let mut cmd = Command::new(cargo_bin!("loanflow"));
    cmd.args(["flow", "--rate=-0.01"]);

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Annual rate must be positive"));
}

#[test]
fn test_zero_and_fractional_terms_are_rejected() {
    for years in ["0", "12.5"] {
        let mut cmd = Command::new(cargo_bin!("loanflow"));
        cmd.args(["flow", "--years", years]);

        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("Term must be a positive whole number"));
    }
}

#[test]
fn test_term_shorter_than_one_period() {
    let mut cmd = Command::new(cargo_bin!("loanflow"));
    cmd.args(["flow", "--principal", "100", "--years", "3", "--format", "csv"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Years").not())
        .stdout(predicate::str::contains("1,Principal,Total Paid,100000.00"))
        .stdout(predicate::str::contains("1,Interest,Total Paid,"));
}

#[test]
fn test_slider_extremes() {
    for (principal, rate, years) in [("100", "0.01", "5"), ("900", "0.15", "30")] {
        let mut cmd = Command::new(cargo_bin!("loanflow"));
        cmd.args(["flow", "--principal", principal, "--rate", rate, "--years", years]);
        cmd.assert().success();
    }
}
