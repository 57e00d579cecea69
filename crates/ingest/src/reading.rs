//! The pipeline's output: a titled, chunked reading sequence.

use focus_core::{BionicIntensity, Chunk, ChunkSize, ChunkSizeConfig, FormatHint};
use serde::{Deserialize, Serialize};

use crate::bionic;
use crate::chunker::{self, split_paragraphs};

/// Average silent reading speed used for time estimates.
pub const WORDS_PER_MINUTE: usize = 200;

/// A processed document ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingDocument {
    pub title: String,
    pub format: FormatHint,
    /// Normalized source text the chunks were cut from.
    pub text: String,
    pub chunks: Vec<Chunk>,
}

impl ReadingDocument {
    /// Re-chunk the same text under a different size. Every chunk gets a new id.
    pub fn rechunk(&self, config: &ChunkSizeConfig, intensity: Option<BionicIntensity>) -> Self {
        Self {
            title: self.title.clone(),
            format: self.format.clone(),
            text: self.text.clone(),
            chunks: chunker::chunk(&self.text, config, intensity),
        }
    }

    pub fn rechunk_preset(&self, size: ChunkSize, intensity: Option<BionicIntensity>) -> Self {
        self.rechunk(&size.config(), intensity)
    }

    /// Same chunks (ids and content), annotations re-derived from `content`.
    /// `None` removes them.
    pub fn with_intensity(&self, intensity: Option<BionicIntensity>) -> Self {
        Self {
            title: self.title.clone(),
            format: self.format.clone(),
            text: self.text.clone(),
            chunks: self
                .chunks
                .iter()
                .map(|c| bionic::reannotate(c, intensity))
                .collect(),
        }
    }

    pub fn stats(&self) -> ReadingStats {
        ReadingStats::of(self)
    }
}

/// Summary numbers for a processed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingStats {
    pub paragraphs: usize,
    pub chunks: usize,
    pub words: usize,
    pub characters: usize,
    pub estimated_minutes: usize,
}

impl ReadingStats {
    pub fn of(doc: &ReadingDocument) -> Self {
        let words = doc.text.split_whitespace().count();
        let estimated_minutes = if words == 0 {
            0
        } else {
            words.div_ceil(WORDS_PER_MINUTE).max(1)
        };
        Self {
            paragraphs: split_paragraphs(&doc.text).len(),
            chunks: doc.chunks.len(),
            words,
            characters: doc.text.chars().count(),
            estimated_minutes,
        }
    }
}
