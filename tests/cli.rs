//! End-to-end runs of the compiled binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_doc_chunker"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_no_arguments_prints_usage() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &[]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
    assert!(!dir.path().join("chunked_documents").exists());
}

#[test]
fn test_too_many_arguments_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), "x").unwrap();
    let output = run_in(dir.path(), &["a.txt", "b.txt"]);
    assert!(!output.status.success());
    assert!(!dir.path().join("chunked_documents").exists());
}

#[test]
fn test_missing_input_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &["missing.txt"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("File missing.txt not found"));
    assert!(!dir.path().join("chunked_documents").exists());
}

#[test]
fn test_chunks_document_with_defaults() {
    let dir = TempDir::new().unwrap();
    let words: Vec<String> = (1..=240).map(|i| format!("từ{i}")).collect();
    fs::write(dir.path().join("handbook.txt"), words.join(" ")).unwrap();

    let output = run_in(dir.path(), &["handbook.txt"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Created: chunked_documents/handbook_chunk_001.txt"));
    assert!(stdout.contains("Created: chunked_documents/handbook_chunk_002.txt"));
    assert!(stdout.contains("Processed handbook.txt into 2 chunks"));
    assert!(stdout.contains("Successfully created 2 chunks"));

    let out = dir.path().join("chunked_documents");
    let second = fs::read_to_string(out.join("handbook_chunk_002.txt")).unwrap();
    assert_eq!(second, format!("# handbook - Phần 2/2\n\n{}", words[100..].join(" ")));
    assert!(!out.join("handbook_chunk_003.txt").exists());
}

#[test]
fn test_empty_document_reports_zero_chunks() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("blank.txt"), "\n\n").unwrap();

    let output = run_in(dir.path(), &["blank.txt"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Successfully created 0 chunks"));

    let out = dir.path().join("chunked_documents");
    assert!(out.is_dir());
    assert_eq!(fs::read_dir(out).unwrap().count(), 0);
}
