use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn file_input_prints_stat_block_to_stdout() {
    let mut cmd = Command::cargo_bin("statblock").expect("Binary exists");
    cmd.arg("--file").arg(fixture("young_red_dragon.html"));

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("Young red dragons are vain and wrathful."))
        .stdout(predicate::str::contains("# Stats\nLarge dragon chaotic evil\n"))
        .stdout(predicate::str::ends_with("*Challenge* 10\n"));
}

#[test]
fn page_without_title_reports_unknown_monster() {
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("empty.html");
    std::fs::write(&page, "<html><body><p>Page not found</p></body></html>").unwrap();

    let mut cmd = Command::cargo_bin("statblock").expect("Binary exists");
    cmd.arg("--file").arg(&page);

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unknown monster"));
}

#[test]
fn empty_stdin_prints_usage() {
    let mut cmd = Command::cargo_bin("statblock").expect("Binary exists");
    cmd.write_stdin("   \n");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("usage: statblock"));
}

#[test]
fn disallowed_domain_is_refused_before_fetching() {
    let mut cmd = Command::cargo_bin("statblock").expect("Binary exists");
    cmd.env("STATBLOCK_BASE_URL", "https://example.com/monsters/")
        .arg("Goblin");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("domain example.com is not allowed"));
}
