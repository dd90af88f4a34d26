//! Integration tests for export and tags commands

#![allow(deprecated)]

use chrono::Utc;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::aroma_cmd;

const HEADER: &str = "\"timestamp\",\"scent\",\"source\",\"intensity\",\"valence\",\"arousal\",\"moodTags\",\"place\",\"notes\"";

fn journal_with_entry() -> TempDir {
    let temp = TempDir::new().unwrap();
    aroma_cmd().arg("init").arg(temp.path()).assert().success();
    aroma_cmd()
        .current_dir(temp.path())
        .args([
            "add",
            "ink",
            "--source",
            "other",
            "--mood",
            "focus",
            "--mood",
            "calm",
            "--notes",
            "line one\nline two with a \"quote\"",
        ])
        .assert()
        .success();
    temp
}

fn exported_files(dir: &std::path::Path) -> Vec<String> {
    fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .filter(|name| name.ends_with(".csv"))
        .collect()
}

#[test]
fn test_export_stdout() {
    let temp = journal_with_entry();

    aroma_cmd()
        .current_dir(temp.path())
        .args(["export", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(HEADER))
        .stdout(predicate::str::contains("\"ink\",\"other\""))
        .stdout(predicate::str::contains("\"focus|calm\""))
        .stdout(predicate::str::contains(
            "\"line one line two with a \"\"quote\"\"\"",
        ));
}

#[test]
fn test_export_writes_dated_file_to_root() {
    let temp = journal_with_entry();

    aroma_cmd()
        .current_dir(temp.path())
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("aroma_journal_"));

    let files = exported_files(temp.path());
    assert_eq!(files.len(), 1);
    let name = &files[0];
    assert!(name.starts_with("aroma_journal_"));
    // aroma_journal_YYYY-MM-DD.csv
    assert_eq!(name.len(), "aroma_journal_".len() + 10 + ".csv".len());

    let content = fs::read_to_string(temp.path().join(name)).unwrap();
    assert!(content.starts_with(HEADER));
    assert_eq!(content.lines().count(), 2);
    assert!(!content.ends_with('\n'));
}

#[test]
fn test_export_file_named_by_utc_date() {
    let temp = journal_with_entry();

    for tz in ["Etc/GMT+12", "Etc/GMT-14"] {
        let before = Utc::now().date_naive();
        aroma_cmd()
            .current_dir(temp.path())
            .env("TZ", tz)
            .arg("export")
            .assert()
            .success();
        let after = Utc::now().date_naive();

        let files = exported_files(temp.path());
        assert_eq!(files.len(), 1, "TZ={}", tz);
        let expected: Vec<String> = [before, after]
            .iter()
            .map(|d| format!("aroma_journal_{}.csv", d.format("%Y-%m-%d")))
            .collect();
        assert!(expected.contains(&files[0]), "TZ={} wrote {}", tz, files[0]);

        fs::remove_file(temp.path().join(&files[0])).unwrap();
    }
}

#[test]
fn test_export_to_output_dir() {
    let temp = journal_with_entry();
    let out = TempDir::new().unwrap();

    aroma_cmd()
        .current_dir(temp.path())
        .arg("export")
        .arg("--output")
        .arg(out.path())
        .assert()
        .success();

    assert_eq!(exported_files(out.path()).len(), 1);
    assert!(exported_files(temp.path()).is_empty());
}

#[test]
fn test_export_missing_output_dir_fails() {
    let temp = journal_with_entry();

    aroma_cmd()
        .current_dir(temp.path())
        .args(["export", "--output", "does-not-exist"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("--stdout"));
}

#[test]
fn test_export_is_repeatable() {
    let temp = journal_with_entry();

    let first = aroma_cmd()
        .current_dir(temp.path())
        .args(["export", "--stdout"])
        .output()
        .unwrap();
    let second = aroma_cmd()
        .current_dir(temp.path())
        .args(["export", "--stdout"])
        .output()
        .unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_tags_lists_vocabulary() {
    aroma_cmd()
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("perfume, food, environment, other"))
        .stdout(predicate::str::contains("calm"));
}
