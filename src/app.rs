use crate::error::{ChunkError, Result};
use crate::models::{ChunkConfig, ChunkSet};
use crate::parser;
use crate::utils;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const OUTPUT_DIR: &str = "chunked_documents";

/// What one run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkReport {
    pub output_dir: PathBuf,
    pub files: Vec<PathBuf>,
}

impl ChunkReport {
    pub fn total(&self) -> usize {
        self.files.len()
    }
}

/// Reads `input`, splits it and writes one file per chunk into `output_dir`.
///
/// The directory is created even when the document has no words. Files
/// already written stay on disk if a later write fails.
pub fn process_document(input: &Path, output_dir: &Path, config: ChunkConfig) -> Result<ChunkReport> {
    let document = parser::read_document(input)?;
    let chunks = utils::chunk_text(document.text(), config.chunk_size(), config.overlap())?;
    let set = ChunkSet::new(document.base_name(), chunks);
    info!(
        input = %input.display(),
        words = document.word_count(),
        chunks = set.len(),
        chunk_size = config.chunk_size(),
        overlap = config.overlap(),
        "chunked document"
    );
    drop(document);

    fs::create_dir_all(output_dir).map_err(|source| ChunkError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::with_capacity(set.len());
    for chunk in set.iter() {
        let path = output_dir.join(chunk.file_name());
        fs::write(&path, chunk.render()).map_err(|source| ChunkError::Write {
            path: path.clone(),
            source,
        })?;
        debug!(index = chunk.index, bytes = chunk.text.len(), "wrote chunk");
        println!("Created: {}", path.display());
        files.push(path);
    }

    println!("\nProcessed {} into {} chunks", input.display(), files.len());

    Ok(ChunkReport {
        output_dir: output_dir.to_path_buf(),
        files,
    })
}
