//! CLI integration tests using assert_cmd.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn vocab(book: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("vocab").unwrap();
    cmd.env("RUST_LOG", "off").arg("--book").arg(book);
    cmd
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn import_csv_skips_blank_rows() {
    let dir = TempDir::new().unwrap();
    let book = dir.path().join("words.json");
    let csv = write_file(
        &dir,
        "words.csv",
        "spanish,bulgarian\naprender,уча\n,\nhablar,говоря\n",
    );

    vocab(&book)
        .arg("import")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 2 word(s), rejected 0"))
        .stdout(predicate::str::contains("Unusable rows").not());

    vocab(&book)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("aprender = уча"))
        .stdout(predicate::str::contains("hablar = говоря"));
}

#[test]
fn import_reports_one_sided_rows() {
    let dir = TempDir::new().unwrap();
    let book = dir.path().join("words.json");
    let csv = write_file(
        &dir,
        "words.csv",
        "Español,Bulgarian Translation\ngato,\nperro,куче\n",
    );

    vocab(&book)
        .arg("import")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 1 word(s), rejected 1"))
        .stdout(predicate::str::contains(
            "row 1: Both 'spanish' and 'bulgarian' are required.",
        ));
}

#[test]
fn import_rejections_use_file_rows() {
    let dir = TempDir::new().unwrap();
    let book = dir.path().join("words.json");
    let csv = write_file(
        &dir,
        "words.csv",
        "spanish,bulgarian\n,\n,\ngato,\nperro,куче\n",
    );

    vocab(&book)
        .arg("import")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "row 3: Both 'spanish' and 'bulgarian' are required.",
        ));
}

#[test]
fn import_keeps_rows_after_bad_encoding() {
    let dir = TempDir::new().unwrap();
    let book = dir.path().join("words.json");
    let path = dir.path().join("words.csv");
    let mut content = b"spanish,bulgarian\ncasa,\xff\xfe\n".to_vec();
    content.extend_from_slice("sol,слънце\nluna,луна\n".as_bytes());
    fs::write(&path, content).unwrap();

    vocab(&book)
        .arg("import")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 2 word(s), rejected 1"))
        .stdout(predicate::str::contains("Unusable rows in file (1):"))
        .stdout(predicate::str::contains(
            "row 1: cell contains a spreadsheet error: invalid UTF-8",
        ));

    vocab(&book)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("sol = слънце"))
        .stdout(predicate::str::contains("luna = луна"))
        .stdout(predicate::str::contains("casa").not());
}

#[test]
fn import_header_only_fails() {
    let dir = TempDir::new().unwrap();
    let book = dir.path().join("words.json");
    let csv = write_file(&dir, "words.csv", "spanish,bulgarian\n");

    vocab(&book)
        .arg("import")
        .arg(&csv)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing header or data"));
    assert!(!book.exists());
}

#[test]
fn import_missing_columns_fails() {
    let dir = TempDir::new().unwrap();
    let book = dir.path().join("words.json");
    let csv = write_file(&dir, "words.csv", "spanish,english\ncasa,house\n");

    vocab(&book)
        .arg("import")
        .arg(&csv)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required columns"));
}

#[test]
fn import_dry_run_stores_nothing() {
    let dir = TempDir::new().unwrap();
    let book = dir.path().join("words.json");
    let json = write_file(
        &dir,
        "words.json.upload.json",
        r#"[["spanish", "bulgarian"], ["sol", "слънце"], [null, null]]"#,
    );

    vocab(&book)
        .arg("import")
        .arg(&json)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 word pair(s) ready to import."));
    assert!(!book.exists());
}

#[test]
fn import_json_output() {
    let dir = TempDir::new().unwrap();
    let book = dir.path().join("words.json");
    let csv = write_file(&dir, "words.csv", "spanish,bulgarian\nluna,луна\n");

    let output = vocab(&book)
        .arg("import")
        .arg(&csv)
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["file"]["accepted_count"], 1);
    assert_eq!(body["store"]["saved_count"], 1);
}

#[test]
fn import_unsupported_file_fails() {
    let dir = TempDir::new().unwrap();
    let book = dir.path().join("words.json");
    let txt = write_file(&dir, "words.txt", "spanish bulgarian");

    vocab(&book)
        .arg("import")
        .arg(&txt)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported file type"));
}

#[test]
fn add_then_update_word() {
    let dir = TempDir::new().unwrap();
    let book = dir.path().join("words.json");

    vocab(&book)
        .args(["add", "Casa", "къща"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Added Casa = къща.\n"));

    vocab(&book)
        .args(["add", "casa", "дом"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Updated casa = дом (was къща).\n"));

    vocab(&book)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("casa = дом"))
        .stdout(predicate::str::contains("1 word(s)."));
}

#[test]
fn add_rejects_incomplete_or_long_words() {
    let dir = TempDir::new().unwrap();
    let book = dir.path().join("words.json");

    vocab(&book)
        .args(["add", "gato", " "])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Both 'spanish' and 'bulgarian' are required.",
        ));

    vocab(&book)
        .args(["add", "gato", "котка", "--max-field-len", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Each field must be 3 characters or fewer."));
    assert!(!book.exists());
}

#[test]
fn check_reports_accent_warning() {
    let dir = TempDir::new().unwrap();
    vocab(&dir.path().join("words.json"))
        .args(["check", "aprender", "--expected", "aprénder", "--mode", "quiz_bg_to_es"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Correct, but be careful with accent or case.",
        ))
        .stdout(predicate::str::contains("Expected: aprénder"));
}

#[test]
fn check_treats_enye_as_distinct() {
    let dir = TempDir::new().unwrap();
    vocab(&dir.path().join("words.json"))
        .args(["check", "ano", "--expected", "año"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Incorrect."));
}

#[test]
fn check_accepts_alternatives() {
    let dir = TempDir::new().unwrap();
    vocab(&dir.path().join("words.json"))
        .args([
            "check",
            "Me llamo Ana.",
            "--expected",
            "Mi nombre es Ana.",
            "--alt",
            "Me llamo Ana",
            "--mode",
            "sentence_bg_to_es",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff("Correct.\n"));
}

#[test]
fn check_rejects_empty_answer_and_unknown_mode() {
    let dir = TempDir::new().unwrap();
    let book = dir.path().join("words.json");

    vocab(&book)
        .args(["check", "  ", "--expected", "casa"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("answer is empty"));

    vocab(&book)
        .args(["check", "casa", "--expected", "casa", "--mode", "quiz_fr"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown practice mode"));
}

#[test]
fn practice_reads_piped_answers() {
    let dir = TempDir::new().unwrap();
    let book = dir.path().join("words.json");
    let csv = write_file(
        &dir,
        "words.csv",
        "spanish,bulgarian\naño,година\ncafé,кафе\n",
    );
    vocab(&book).arg("import").arg(&csv).assert().success();

    // Words come back ordered by their Spanish key: "año", then "café".
    vocab(&book)
        .args(["practice", "--mode", "quiz_bg_to_es"])
        .write_stdin("\nano\ncafe\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please type an answer."))
        .stdout(predicate::str::contains("Expected: año"))
        .stdout(predicate::str::contains("Expected: café"))
        .stdout(predicate::str::contains("Score: 1/2 correct"));
}

#[test]
fn practice_with_empty_book() {
    let dir = TempDir::new().unwrap();
    vocab(&dir.path().join("words.json"))
        .arg("practice")
        .assert()
        .success()
        .stdout(predicate::str::contains("No words to practice"));
}
