//! Sentence chunking and pagination.
//!
//! Long text is split into sentences and grouped into fixed-size pages so
//! it can be read sequentially in small units. The paginator is rebuilt
//! from scratch whenever the source text or the profile changes; the
//! current index always starts at zero.

use serde::{Deserialize, Serialize};

/// Sentences per page; the final page may hold fewer.
pub const SENTENCES_PER_CHUNK: usize = 3;

/// Splits text into sentences on terminal punctuation.
///
/// Runs of `.`, `!`, `?` delimit sentences and are consumed; fragments are
/// trimmed and empty fragments discarded, so trailing punctuation never
/// produces a phantom sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// An ordered group of consecutive sentences forming one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    sentences: Vec<String>,
}

impl Chunk {
    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    /// The page's display text: sentences rejoined with `". "` plus one
    /// unconditional trailing period. Terminal `!`/`?` were consumed by the
    /// split, so paged display normalizes them to periods.
    pub fn display_text(&self) -> String {
        format!("{}.", self.sentences.join(". "))
    }
}

/// Pagination state over a chunked text.
///
/// `next`/`previous` are the only mutations and are saturating no-ops at
/// the bounds; `current` always satisfies `current < chunks.len()` when any
/// chunks exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginator {
    chunks: Vec<Chunk>,
    current: usize,
}

impl Paginator {
    /// Chunks `text` into pages of [`SENTENCES_PER_CHUNK`] sentences.
    pub fn from_text(text: &str) -> Self {
        Self::from_sentences(split_sentences(text))
    }

    /// Builds pages from an already-split sentence sequence.
    pub fn from_sentences(sentences: Vec<String>) -> Self {
        let chunks = sentences
            .chunks(SENTENCES_PER_CHUNK)
            .map(|group| Chunk {
                sentences: group.to_vec(),
            })
            .collect();
        Self { chunks, current: 0 }
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The page currently in view, if any chunks exist.
    pub fn current_chunk(&self) -> Option<&Chunk> {
        self.chunks.get(self.current)
    }

    /// Moves to the next page. No-op at the last page; returns whether the
    /// index moved.
    pub fn next(&mut self) -> bool {
        if self.current + 1 < self.chunks.len() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Moves to the previous page. No-op at the first page; returns whether
    /// the index moved.
    pub fn previous(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }
}
