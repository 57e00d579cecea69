//! Format dispatch: raw bytes in, raw extracted text out.
//!
//! Open formats go through a parser library; proprietary and scanned
//! containers are magic-gated and then scanned for printable text runs.

mod djvu;
mod docx;
mod epub;
pub mod heuristic;
mod markup;
mod mobi;
mod pdf;
mod txt;

use focus_core::{ExtractionError, FormatHint};

pub use djvu::extract_djvu;
pub use docx::extract_docx;
pub use epub::extract_epub;
pub use heuristic::{
    extract_printable_text, extract_printable_text_with, HeuristicThresholds,
    MIN_CONTAINER_TEXT_CHARS, MIN_DOCUMENT_CHARS,
};
pub use mobi::extract_mobi;
pub use pdf::extract_pdf;
pub use txt::{extract_md, extract_txt};

/// Extract raw (un-normalized) text from file bytes using the extractor for `hint`.
pub fn extract_text(bytes: &[u8], hint: &FormatHint) -> Result<String, ExtractionError> {
    match hint {
        FormatHint::Pdf => extract_pdf(bytes),
        FormatHint::Docx => extract_docx(bytes),
        FormatHint::Epub => extract_epub(bytes),
        FormatHint::Mobi => extract_mobi(bytes),
        FormatHint::Djvu => extract_djvu(bytes),
        FormatHint::PlainText => extract_txt(bytes),
        FormatHint::Markdown => extract_md(bytes),
        FormatHint::Unknown(ext) => Err(ExtractionError::UnsupportedFormat(if ext.is_empty() {
            "file has no extension".to_string()
        } else {
            format!(".{ext}")
        })),
    }
}

/// Guess a format from leading magic bytes, for callers with no usable
/// filename. Returns `None` when nothing matches; plain text is never guessed.
pub fn sniff_format(bytes: &[u8]) -> Option<FormatHint> {
    if pdf::has_magic(bytes) {
        Some(FormatHint::Pdf)
    } else if djvu::has_magic(bytes) {
        Some(FormatHint::Djvu)
    } else if mobi::has_magic(bytes) {
        Some(FormatHint::Mobi)
    } else if markup::is_zip(bytes) {
        // EPUB stores its mimetype uncompressed as the first member.
        let head = &bytes[..bytes.len().min(128)];
        if head.windows(20).any(|w| w == b"application/epub+zip") {
            Some(FormatHint::Epub)
        } else if head.windows(5).any(|w| w == b"word/") || head.windows(19).any(|w| w == b"[Content_Types].xml") {
            Some(FormatHint::Docx)
        } else {
            None
        }
    } else {
        None
    }
}
