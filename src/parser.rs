use crate::error::{ChunkError, Result};
use crate::models::Document;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

static NEWLINE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n+").expect("static newline pattern is valid"));

/// Collapses runs of newlines to one and trims the ends.
pub fn clean_text(text: &str) -> String {
    NEWLINE_RUNS.replace_all(text, "\n").trim().to_string()
}

/// File name without its last extension, e.g. `report.v2.txt` -> `report.v2`.
pub fn base_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

pub fn read_document(path: &Path) -> Result<Document> {
    if !path.exists() {
        return Err(ChunkError::InputNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(|source| ChunkError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = clean_text(&content);
    debug!(path = %path.display(), bytes = content.len(), cleaned = text.len(), "read document");

    Ok(Document::new(base_name(path), text))
}
