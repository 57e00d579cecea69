//! Sentence-aware chunking into bounded reading units.
//!
//! Normalized text is split into paragraphs, paragraphs into sentences, and
//! sentences are packed greedily under a sentence-count and a character
//! ceiling. Chunks never cross a paragraph boundary.

mod accumulate;
mod helpers;

pub use accumulate::segment_text;
pub(crate) use helpers::split_paragraphs;

use focus_core::{BionicIntensity, Chunk, ChunkSizeConfig};

use crate::bionic;

/// Chunk `text` and optionally annotate each chunk.
///
/// Ids are fresh for every call; the content sequence is deterministic.
pub fn chunk(text: &str, config: &ChunkSizeConfig, intensity: Option<BionicIntensity>) -> Vec<Chunk> {
    let chunks: Vec<Chunk> = segment_text(text, config)
        .into_iter()
        .map(|content| {
            let bionic_content = intensity.map(|i| bionic::transform(&content, i));
            Chunk {
                bionic_content,
                ..Chunk::new(content)
            }
        })
        .collect();

    tracing::debug!(
        chunks = chunks.len(),
        max_sentences = config.max_sentences,
        max_characters = config.max_characters,
        "text segmented"
    );
    chunks
}
