//! Greedy sentence accumulation with the long-sentence clause overflow.

use focus_core::ChunkSizeConfig;

use super::helpers::{char_len, split_clauses, split_paragraphs, split_sentences};

/// Sentences waiting to become a chunk.
#[derive(Debug, Default)]
struct SentenceBuffer {
    sentences: Vec<String>,
    /// Length of the sentences joined with single spaces.
    chars: usize,
}

impl SentenceBuffer {
    fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    fn len_with(&self, candidate_chars: usize) -> usize {
        if self.is_empty() {
            candidate_chars
        } else {
            self.chars + 1 + candidate_chars
        }
    }

    fn would_overflow(&self, candidate_chars: usize, config: &ChunkSizeConfig) -> bool {
        self.sentences.len() + 1 > config.max_sentences
            || self.len_with(candidate_chars) > config.max_characters
    }

    fn push(&mut self, sentence: String) {
        self.chars = self.len_with(char_len(&sentence));
        self.sentences.push(sentence);
    }

    fn flush_into(&mut self, out: &mut Vec<String>) {
        if !self.is_empty() {
            out.push(self.sentences.join(" "));
            self.sentences.clear();
            self.chars = 0;
        }
    }
}

/// Pack the clauses of an over-long sentence into chunks of at most
/// `max_characters`, pushing every full chunk to `out`.
///
/// Returns the unflushed remainder, which seeds the next sentence buffer.
fn pack_clauses(sentence: &str, max_characters: usize, out: &mut Vec<String>) -> String {
    let mut working = String::new();
    for fragment in split_clauses(sentence) {
        let joined_len = char_len(format!("{working}{fragment}").trim());
        if !working.trim().is_empty() && joined_len > max_characters {
            out.push(working.trim().to_string());
            working = fragment.trim_start().to_string();
        } else {
            working.push_str(fragment);
        }
    }
    working.trim().to_string()
}

/// Chunk one paragraph. Chunks never cross the paragraph boundary.
fn segment_paragraph(paragraph: &str, config: &ChunkSizeConfig, out: &mut Vec<String>) {
    let mut buffer = SentenceBuffer::default();

    for sentence in split_sentences(paragraph) {
        let sentence_chars = char_len(&sentence);
        if buffer.would_overflow(sentence_chars, config) && !buffer.is_empty() {
            // The candidate starts the next buffer whole, even when it is
            // longer than the ceiling on its own.
            buffer.flush_into(out);
            buffer.push(sentence);
            continue;
        }

        if sentence_chars > config.max_characters {
            let remainder = pack_clauses(&sentence, config.max_characters, out);
            if !remainder.is_empty() {
                buffer.push(remainder);
            }
            continue;
        }

        buffer.push(sentence);
    }

    buffer.flush_into(out);
}

/// Split normalized text into chunk texts, in document order.
///
/// Paragraphs split on blank lines, sentences on terminator punctuation, and
/// sentences are packed greedily under `max_sentences` and `max_characters`.
/// A sentence longer than `max_characters` that arrives at an empty buffer is
/// split at clause boundaries; its last piece may be joined by the sentences
/// that follow it. Arriving after buffered sentences, it is kept whole.
pub fn segment_text(text: &str, config: &ChunkSizeConfig) -> Vec<String> {
    let mut chunks = Vec::new();
    for paragraph in split_paragraphs(text) {
        segment_paragraph(&paragraph, config, &mut chunks);
    }
    chunks
}
