//! Integration tests for the bilex CLI

use assert_cmd::Command;
use predicates::prelude::*;

fn bilex() -> Command {
    Command::cargo_bin("bilex").unwrap()
}

#[test]
fn lexizes_words_from_arguments() {
    bilex()
        .arg("running")
        .assert()
        .success()
        .stdout(predicate::str::contains("running\trun | running"));
}

#[test]
fn collapsed_stems_print_a_single_lexeme() {
    bilex()
        .arg("tests")
        .assert()
        .success()
        .stdout(predicate::str::contains("tests\ttest\n"));
}

#[test]
fn stopword_in_both_languages_prints_empty_query() {
    bilex()
        .arg("in")
        .assert()
        .success()
        .stdout(predicate::str::contains("in\t\n"));
}

#[test]
fn uppercase_input_is_folded() {
    bilex()
        .arg("RUNNING")
        .assert()
        .success()
        .stdout(predicate::str::contains("run | running"));
}

#[test]
fn reads_tokens_from_stdin() {
    bilex()
        .write_stdin("running tests\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("running\trun | running"))
        .stdout(predicate::str::contains("tests\ttest"));
}

#[test]
fn json_output_carries_lexemes_and_variant_flags() {
    let output = bilex()
        .args(["--format", "json", "running"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed[0]["word"], "running");
    assert_eq!(parsed[0]["lexemes"][0]["text"], "run");
    assert_eq!(parsed[0]["lexemes"][0]["is_variant"], false);
    assert_eq!(parsed[0]["lexemes"][1]["text"], "running");
    assert_eq!(parsed[0]["lexemes"][1]["is_variant"], true);
}

#[test]
fn unknown_encoding_label_fails() {
    bilex()
        .args(["--encoding", "klingon-8", "running"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown encoding label"));
}

#[test]
fn german_stopword_keeps_english_reading() {
    bilex()
        .arg("und")
        .assert()
        .success()
        .stdout(predicate::str::contains("und\tund"));
}
