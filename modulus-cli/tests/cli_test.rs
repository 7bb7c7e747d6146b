use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_describes_the_client() {
    Command::cargo_bin("modulus")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Modulus command line client")
                .and(predicate::str::contains("--exponent")),
        );
}

#[test]
fn rejects_non_numeric_operands() {
    Command::cargo_bin("modulus")
        .unwrap()
        .args(["-m", "beef", "-b", "2", "-e", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
