//! Extract → normalize → chunk → annotate, for one document at a time.
//!
//! Every stage is a pure function of its input; nothing here keeps state
//! between documents, so independent documents can be processed in parallel.

use std::path::Path;

use focus_core::{
    BionicIntensity, Chunk, ChunkSizeConfig, ExtractionError, FormatHint, ReaderSettings,
};

use crate::bionic;
use crate::chunker;
use crate::document::{self, MIN_DOCUMENT_CHARS};
use crate::normalize::normalize;
use crate::reading::ReadingDocument;

const UNTITLED: &str = "Untitled";

/// Extract and normalize the text of one document.
///
/// Fails with [`ExtractionError::EmptyResult`] when fewer than
/// [`MIN_DOCUMENT_CHARS`] characters survive normalization.
pub fn extract(raw: &[u8], hint: &FormatHint) -> Result<String, ExtractionError> {
    let extracted = document::extract_text(raw, hint)?;
    let text = normalize(&extracted);
    let chars = text.chars().count();
    if chars < MIN_DOCUMENT_CHARS {
        tracing::debug!(format = %hint, chars, "normalized text below minimum");
        return Err(ExtractionError::EmptyResult {
            min_chars: MIN_DOCUMENT_CHARS,
        });
    }
    Ok(text)
}

/// Chunk normalized text without annotations.
pub fn segment(text: &str, config: &ChunkSizeConfig) -> Vec<Chunk> {
    chunker::chunk(text, config, None)
}

/// Bionic annotation of one chunk's content.
pub fn annotate(content: &str, intensity: BionicIntensity) -> String {
    bionic::transform(content, intensity)
}

/// Display title for a file: the last path component without its extension.
pub fn title_from_filename(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(UNTITLED)
        .to_string()
}

/// Runs documents through the pipeline under fixed reader settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pipeline {
    settings: ReaderSettings,
}

impl Pipeline {
    pub fn new(settings: ReaderSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ReaderSettings {
        &self.settings
    }

    /// Process a file, sniffing the format from its name.
    pub fn process(&self, raw: &[u8], filename: &str) -> Result<ReadingDocument, ExtractionError> {
        let hint = FormatHint::from_filename(filename);
        self.process_with_hint(raw, &title_from_filename(filename), hint)
    }

    /// Process bytes with an explicit format.
    pub fn process_with_hint(
        &self,
        raw: &[u8],
        title: &str,
        hint: FormatHint,
    ) -> Result<ReadingDocument, ExtractionError> {
        let text = extract(raw, &hint).inspect_err(|e| {
            tracing::warn!(title, format = %hint, error = %e, "extraction failed");
        })?;

        let config = self.settings.chunk_size.config();
        let chunks: Vec<Chunk> = segment(&text, &config)
            .into_iter()
            .map(|c| match self.settings.active_intensity() {
                Some(intensity) => {
                    let annotated = annotate(&c.content, intensity);
                    c.with_bionic_content(Some(annotated))
                }
                None => c,
            })
            .collect();

        tracing::info!(
            title,
            format = %hint,
            bytes = raw.len(),
            chars = text.chars().count(),
            chunks = chunks.len(),
            size = %self.settings.chunk_size,
            bionic = self.settings.bionic_enabled,
            "document processed"
        );

        Ok(ReadingDocument {
            title: title.to_string(),
            format: hint,
            text,
            chunks,
        })
    }
}
