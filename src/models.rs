use crate::error::{ChunkError, Result};

pub const DEFAULT_CHUNK_SIZE: usize = 150;
pub const DEFAULT_OVERLAP: usize = 50;

/// Window parameters, measured in words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkConfig {
    chunk_size: usize,
    overlap: usize,
}

impl ChunkConfig {
    /// Fails with `DegenerateConfiguration` unless `overlap < chunk_size`.
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self> {
        if overlap >= chunk_size {
            return Err(ChunkError::DegenerateConfiguration { chunk_size, overlap });
        }
        Ok(Self { chunk_size, overlap })
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// How far the window start moves between chunks. Always >= 1.
    pub fn stride(&self) -> usize {
        self.chunk_size - self.overlap
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_OVERLAP,
        }
    }
}

/// Cleaned input text plus the name its chunks are filed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    base_name: String,
    text: String,
}

impl Document {
    pub fn new(base_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            text: text.into(),
        }
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Ordered chunks of one document. Positions are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkSet {
    base_name: String,
    chunks: Vec<String>,
}

impl ChunkSet {
    pub fn new(base_name: impl Into<String>, chunks: Vec<String>) -> Self {
        // blank windows are dropped before the total is fixed, so the
        // header's N always matches the number of files written
        let chunks = chunks
            .into_iter()
            .filter(|c| !c.trim().is_empty())
            .collect();
        Self {
            base_name: base_name.into(),
            chunks,
        }
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Chunk<'_>> {
        let total = self.chunks.len();
        self.chunks.iter().enumerate().map(move |(i, text)| Chunk {
            base_name: &self.base_name,
            index: i + 1,
            total,
            text,
        })
    }
}

/// One chunk, positioned within its set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub base_name: &'a str,
    pub index: usize,
    pub total: usize,
    pub text: &'a str,
}

impl Chunk<'_> {
    /// `<base>_chunk_<NNN>.txt`
    pub fn file_name(&self) -> String {
        format!("{}_chunk_{:03}.txt", self.base_name, self.index)
    }

    pub fn header(&self) -> String {
        format!("# {} - Phần {}/{}", self.base_name, self.index, self.total)
    }

    /// File body: header, blank line, chunk text.
    pub fn render(&self) -> String {
        format!("{}\n\n{}", self.header(), self.text)
    }
}
