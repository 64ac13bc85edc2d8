use crate::error::Result;
use crate::models::ChunkConfig;

/// Splits on runs of Unicode whitespace. Never yields an empty token.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Overlapping windows over a token slice.
///
/// Each window holds up to `chunk_size` tokens and starts `stride` tokens
/// after the previous one. The window that reaches the end of the slice is
/// the last one yielded, so the tail is never emitted twice.
pub struct WordWindows<'a> {
    words: &'a [&'a str],
    config: ChunkConfig,
    start: usize,
    done: bool,
}

impl<'a> WordWindows<'a> {
    pub fn new(words: &'a [&'a str], config: ChunkConfig) -> Self {
        Self {
            words,
            config,
            start: 0,
            done: false,
        }
    }
}

impl<'a> Iterator for WordWindows<'a> {
    type Item = &'a [&'a str];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.start >= self.words.len() {
            return None;
        }
        let size = self.config.chunk_size();
        let end = (self.start + size).min(self.words.len());
        let window = &self.words[self.start..end];

        if self.start + size >= self.words.len() {
            self.done = true;
        } else {
            self.start += self.config.stride();
        }
        Some(window)
    }
}

pub fn chunk_text(text: &str, chunk_size: usize, overlap: usize) -> Result<Vec<String>> {
    let config = ChunkConfig::new(chunk_size, overlap)?;
    let words = tokenize(text);
    let chunks = WordWindows::new(&words, config)
        .map(|window| window.join(" "))
        .filter(|chunk| !chunk.is_empty())
        .collect();
    Ok(chunks)
}
