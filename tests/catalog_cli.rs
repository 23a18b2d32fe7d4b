use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

const CATALOG: &str = "\
Zeta Stories:Some Writer:1000000000002:4
Alpha Tales:Other Writer:1000000000001:2
";

fn booktrack(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("booktrack").unwrap();
    cmd.current_dir(dir).env_remove("BOOKTRACK_LOG");
    cmd
}

fn write_catalog(dir: &Path, contents: &str) {
    fs::write(dir.join("books.txt"), contents).unwrap();
}

#[test]
fn title_search_prints_matches_and_statistics() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_catalog(temp_dir.path(), CATALOG);

    booktrack(temp_dir.path())
        .args(["books.txt", "alpha"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alpha Tales"))
        .stdout(predicate::str::contains("Zeta Stories").not())
        .stdout(predicate::str::contains("Valid records processed : 2"))
        .stdout(predicate::str::contains("Search results          : 1"));
}

#[test]
fn isbn_search_finds_single_book() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_catalog(temp_dir.path(), CATALOG);

    booktrack(temp_dir.path())
        .args(["books.txt", "1000000000002"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Zeta Stories"))
        .stdout(predicate::str::contains("Errors encountered      : 0"));
}

#[test]
fn add_rewrites_catalog_sorted_by_title() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_catalog(temp_dir.path(), CATALOG);

    booktrack(temp_dir.path())
        .args(["books.txt", "New Book:Some Author:1111111111111:1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Books added             : 1"));

    let contents = fs::read_to_string(temp_dir.path().join("books.txt")).unwrap();
    assert_eq!(
        contents,
        "Alpha Tales:Other Writer:1000000000001:2\n\
         New Book:Some Author:1111111111111:1\n\
         Zeta Stories:Some Writer:1000000000002:4\n"
    );
}

#[test]
fn invalid_lines_go_to_error_log() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_catalog(
        temp_dir.path(),
        "Dune:Frank Herbert:9780441013593:2\nBad:Author:12:2\n\nNo Copies:Someone:9780000000001:0\n",
    );

    booktrack(temp_dir.path())
        .args(["books.txt", "dune"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid records processed : 1"))
        .stdout(predicate::str::contains("Errors encountered      : 2"));

    let log = fs::read_to_string(temp_dir.path().join("errors.log")).unwrap();
    let lines: Vec<_> = log.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("INVALID LINE: \"Bad:Author:12:2\" - InvalidISBN:"));
    assert!(lines[1].contains("- MalformedEntry: Copies must be a positive integer, got: 0"));
}

#[test]
fn duplicate_isbn_is_reported_and_logged() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_catalog(
        temp_dir.path(),
        "First:A:1234567890123:1\nSecond:B:1234567890123:1\n",
    );

    booktrack(temp_dir.path())
        .args(["books.txt", "1234567890123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 books with ISBN 1234567890123"))
        .stdout(predicate::str::contains("Errors encountered      : 1"));

    let log = fs::read_to_string(temp_dir.path().join("errors.log")).unwrap();
    assert_eq!(log.lines().count(), 1);
    assert!(log.contains("DuplicateISBN"));
}

#[test]
fn missing_catalog_is_created_with_parents() {
    let temp_dir = tempfile::tempdir().unwrap();

    booktrack(temp_dir.path())
        .args(["nested/dir/books.txt", "anything"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created new catalog file"));

    assert!(temp_dir.path().join("nested/dir/books.txt").exists());
}

#[test]
fn wrong_extension_is_rejected_with_summary() {
    let temp_dir = tempfile::tempdir().unwrap();

    booktrack(temp_dir.path())
        .args(["books.csv", "dune"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog file must end with .txt"))
        .stdout(predicate::str::contains("Errors encountered      : 1"));

    assert!(!temp_dir.path().join("books.csv").exists());
}

#[test]
fn missing_operation_is_insufficient_input() {
    let temp_dir = tempfile::tempdir().unwrap();

    booktrack(temp_dir.path())
        .arg("books.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("At least 2 arguments required"))
        .stdout(predicate::str::contains("Errors encountered      : 1"));
}

#[test]
fn config_can_accept_other_extensions() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("booktrack.json"),
        r#"{ "catalog_extensions": ["lst"], "error_log_name": "rejects.log" }"#,
    )
    .unwrap();
    fs::write(temp_dir.path().join("books.lst"), "Broken\n").unwrap();

    booktrack(temp_dir.path())
        .args(["books.lst", "x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Errors encountered      : 1"));

    assert!(temp_dir.path().join("rejects.log").exists());
}

#[test]
fn json_output_carries_summary() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_catalog(temp_dir.path(), CATALOG);

    let output = booktrack(temp_dir.path())
        .args(["--json", "books.txt", "tales"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["summary"]["records_processed"], 2);
    assert_eq!(report["summary"]["search_results"], 1);
    assert_eq!(report["outcome"]["status"], "title_matches");
    assert_eq!(report["outcome"]["books"][0]["title"], "Alpha Tales");
}

#[test]
fn undecodable_line_is_logged_and_the_rest_still_load() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("books.txt"),
        b"Dune:Frank Herbert:9780441013593:2\nBad\xff:Author:9780000000001:1\nEmma:Jane Austen:9780141439587:1\n",
    )
    .unwrap();

    booktrack(temp_dir.path())
        .args(["books.txt", "emma"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Austen"))
        .stdout(predicate::str::contains("Valid records processed : 2"))
        .stdout(predicate::str::contains("Errors encountered      : 1"));

    let log = fs::read_to_string(temp_dir.path().join("errors.log")).unwrap();
    assert_eq!(log.lines().count(), 1);
    assert!(log.contains("MalformedEntry: Line is not valid UTF-8"));
}
