use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Source format used to pick an extractor.
///
/// Detection by extension happens at the edge (CLI, UI); the pipeline only
/// ever sees the hint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatHint {
    Pdf,
    Docx,
    Epub,
    /// Legacy e-reader container (MOBI / PalmDOC / AZW).
    Mobi,
    /// Legacy scanned-document container.
    Djvu,
    PlainText,
    Markdown,
    Unknown(String),
}

impl FormatHint {
    pub fn from_extension(ext: &str) -> Self {
        match ext.trim_start_matches('.').to_lowercase().as_str() {
            "pdf" => FormatHint::Pdf,
            "docx" => FormatHint::Docx,
            "epub" => FormatHint::Epub,
            "mobi" | "azw" | "azw3" | "prc" | "pdb" => FormatHint::Mobi,
            "djvu" | "djv" => FormatHint::Djvu,
            "txt" | "text" => FormatHint::PlainText,
            "md" | "markdown" => FormatHint::Markdown,
            other => FormatHint::Unknown(other.to_string()),
        }
    }

    /// Sniff from a filename's extension. Names without one are `Unknown("")`.
    pub fn from_filename(filename: &str) -> Self {
        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        Self::from_extension(ext)
    }

    /// Human-readable format name used in error messages.
    pub fn label(&self) -> &str {
        match self {
            FormatHint::Pdf => "PDF",
            FormatHint::Docx => "DOCX",
            FormatHint::Epub => "EPUB",
            FormatHint::Mobi => "MOBI",
            FormatHint::Djvu => "DjVu",
            FormatHint::PlainText => "text",
            FormatHint::Markdown => "Markdown",
            FormatHint::Unknown(ext) if ext.is_empty() => "unknown",
            FormatHint::Unknown(ext) => ext,
        }
    }
}

impl fmt::Display for FormatHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
