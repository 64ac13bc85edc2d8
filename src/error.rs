use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChunkError {
    #[error("File {} not found", .0.display())]
    InputNotFound(PathBuf),

    /// A stride of zero would never move the window forward.
    #[error("overlap ({overlap}) must be smaller than chunk size ({chunk_size})")]
    DegenerateConfiguration { chunk_size: usize, overlap: usize },

    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, ChunkError>;
