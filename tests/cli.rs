use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use test_utils::stage_inputs;

fn bin() -> Command {
    Command::cargo_bin("member_recon_bin").unwrap()
}

#[test]
fn prints_summary_and_writes_clean_data() {
    let dir = tempfile::tempdir().unwrap();
    stage_inputs(
        dir.path(),
        Path::new("tests/resources/members.csv"),
        Path::new("tests/resources/mixed_payments.csv"),
    );

    bin()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(
            "Total clean rows: 4\nTotal Paid Amount: $117.75\nHighest Payer: Ann Lee, ID: 5, Amount: 40.00\n",
        );

    assert!(dir.path().join("output").join("cleanData.csv").is_file());
}

#[test]
fn empty_ledger_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    stage_inputs(
        dir.path(),
        Path::new("tests/resources/members.csv"),
        Path::new("tests/resources/empty_payments.csv"),
    );

    bin()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Highest Payer: None, ID: None, Amount: 0.00"));
}

#[test]
fn missing_data_dir_fails() {
    let dir = tempfile::tempdir().unwrap();

    bin()
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("data directory"));

    assert!(dir.path().join("output").is_dir());
}

#[test]
fn missing_member_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("data")).unwrap();
    fs::copy(
        "tests/resources/single_payment.csv",
        dir.path().join("data").join("memberPaidInfo.csv"),
    )
    .unwrap();

    bin()
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("memberInfo.csv"));
}
