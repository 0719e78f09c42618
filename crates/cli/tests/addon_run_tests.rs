//! Integration tests for the hello-addon binary.
//!
//! These exercise the full invocation contract: environment and file
//! inputs in, labeled stderr report and a single JSON instruction line
//! out, with structured exit codes on hard failures.

mod common;

use std::io::Write;
use std::path::{Path, PathBuf};

use common::addon_cmd;
use predicates::prelude::*;

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

/// With nothing provided, the run succeeds and every labeled line still
/// appears, rendered as absent.
#[test]
fn test_bare_invocation_emits_empty_object_and_full_report() {
    addon_cmd()
        .assert()
        .code(0)
        .stdout("{}\n")
        .stderr(predicate::str::contains("=== Docspell addon context ==="))
        .stderr(predicate::str::contains("User input file: (not available)"))
        .stderr(predicate::str::contains("ADDON_DIR: (not available)"))
        .stderr(predicate::str::contains("Item data: (not available)"))
        .stderr(predicate::str::contains("ITEM_ORIGINAL_JSON: 0 files"))
        .stderr(predicate::str::contains("ITEM_PDF_JSON: 0 files"))
        .stderr(predicate::str::contains("DSC_SESSION: (not available)"));
}

/// Full fixture matching a real Docspell invocation work directory.
#[test]
fn test_full_context_is_reported() {
    let work = tempfile::tempdir().unwrap();
    let item = work.path().join("item");
    std::fs::create_dir_all(&item).unwrap();

    let user_input = write_file(
        work.path(),
        "user-input",
        r#"{"name": "John", "customField": "value"}"#,
    );
    let item_data = write_file(
        &item,
        "item-data.json",
        r#"{
            "id": "UyZ-item-id",
            "name": "yearly report 2021",
            "collective": 1,
            "tags": ["tag-1"],
            "assumedTags": ["invoice"],
            "attachments": [{"id": "Apa-attach-id", "name": "report_year_2021.pdf", "pages": 2}],
            "assumedCorrOrg": {"id": "yf7XiqWp", "name": "Acme AG"},
            "assumedConcPerson": {"id": "7XLiAkeY", "name": "Derek Jeter"}
        }"#,
    );
    let item_args = write_file(
        &item,
        "given-data.json",
        r#"{"collective": 1, "tags": ["given-tag-1"], "skipDuplicate": true}"#,
    );
    let originals = write_file(
        &item,
        "source-files.json",
        r#"[{"id": "2M8JwSdbE", "name": "report_year_2021.pdf", "mimetype": "application/pdf"}]"#,
    );
    let pdfs = write_file(&item, "pdf-files.json", "[]");

    addon_cmd()
        .arg(&user_input)
        .env("ADDON_DIR", work.path())
        .env("ITEM_DIR", &item)
        .env("ITEM_DATA_JSON", &item_data)
        .env("ITEM_ARGS_JSON", &item_args)
        .env("ITEM_ORIGINAL_JSON", &originals)
        .env("ITEM_PDF_JSON", &pdfs)
        .assert()
        .code(0)
        .stdout("{}\n")
        .stderr(predicate::str::contains("UyZ-item-id"))
        .stderr(predicate::str::contains("yearly report 2021"))
        .stderr(predicate::str::contains("tag-1"))
        .stderr(predicate::str::contains("invoice"))
        .stderr(predicate::str::contains("assumedCorrOrg: Acme AG"))
        .stderr(predicate::str::contains("assumedConcPerson: Derek Jeter"))
        .stderr(predicate::str::contains("given-tag-1"))
        .stderr(predicate::str::contains("ITEM_ORIGINAL_JSON: 1 files"))
        .stderr(predicate::str::contains("ITEM_PDF_JSON: 0 files"));
}

/// The session token never reaches the report; only the marker does.
#[test]
fn test_session_token_is_redacted() {
    addon_cmd()
        .env("DSC_SESSION", "hunter2-session-token")
        .env("DSC_DOCSPELL_URL", "http://localhost:7880")
        .assert()
        .code(0)
        .stdout("{}\n")
        .stderr(predicate::str::contains("DSC_SESSION: ***"))
        .stderr(predicate::str::contains("hunter2-session-token").not());
}

/// Malformed metadata JSON is a hard failure: non-zero exit, no stdout JSON.
#[test]
fn test_malformed_item_data_fails_with_no_output() {
    let work = tempfile::tempdir().unwrap();
    let item_data = write_file(work.path(), "item-data.json", "{ not json at all");

    addon_cmd()
        .env("ITEM_DATA_JSON", &item_data)
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("ITEM_DATA_JSON"));
}

/// Non-JSON user input is kept as raw text, not an error.
#[test]
fn test_plain_text_user_input_is_reported_verbatim() {
    let work = tempfile::tempdir().unwrap();
    let user_input = write_file(work.path(), "user-input", "  just some notes\n");

    addon_cmd()
        .arg(&user_input)
        .assert()
        .code(0)
        .stdout("{}\n")
        .stderr(predicate::str::contains("User input: just some notes"));
}

/// A missing user-input path is a soft absence.
#[test]
fn test_missing_user_input_file_is_absent() {
    addon_cmd()
        .arg("/does/not/exist")
        .assert()
        .code(0)
        .stdout("{}\n")
        .stderr(predicate::str::contains("User input: (not available)"));
}

/// An empty argument means the same as no argument.
#[test]
fn test_empty_argument_is_treated_as_no_argument() {
    addon_cmd()
        .arg("")
        .assert()
        .code(0)
        .stdout("{}\n")
        .stderr(predicate::str::contains("User input file: (not available)"));
}

/// TMP_DIR falls back to TMPDIR.
#[test]
fn test_tmp_dir_fallback() {
    addon_cmd()
        .env("TMPDIR", "/fallback/tmp")
        .assert()
        .code(0)
        .stderr(predicate::str::contains("TMP_DIR: /fallback/tmp"));
}
