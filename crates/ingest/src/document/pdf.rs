use focus_core::ExtractionError;

const FORMAT: &str = "PDF";

/// The header may be preceded by junk, but must appear in the first 1 KiB.
const HEADER_SEARCH_WINDOW: usize = 1024;

pub(crate) fn has_magic(bytes: &[u8]) -> bool {
    let window = &bytes[..bytes.len().min(HEADER_SEARCH_WINDOW)];
    window.windows(5).any(|w| w == b"%PDF-")
}

/// pdf-extract separates pages with form feeds; turn them into paragraph
/// breaks and drop pages with no text.
fn join_pages(text: &str) -> String {
    text.split('\x0C')
        .map(str::trim)
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractionError> {
    if !has_magic(bytes) {
        return Err(ExtractionError::failed(FORMAT, "missing %PDF- header"));
    }

    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractionError::failed(FORMAT, e))?;

    let text = join_pages(&text);
    if text.is_empty() {
        // Parsed fine but nothing to read: scanned or image-only pages.
        tracing::warn!("PDF has no text layer");
        return Err(ExtractionError::no_text_layer(FORMAT));
    }

    tracing::debug!(chars = text.len(), "PDF text layer extracted");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magic_gate_rejects_non_pdf() {
        let err = extract_pdf(b"PK\x03\x04 definitely a zip file").unwrap_err();
        assert_eq!(err, ExtractionError::failed("PDF", "missing %PDF- header"));
    }

    #[test]
    fn magic_may_follow_leading_junk() {
        assert!(has_magic(b"\x00\x00junk%PDF-1.7\n"));
        assert!(!has_magic(b""));
    }

    #[test]
    fn corrupt_body_is_extraction_failure() {
        let err = extract_pdf(b"%PDF-1.4\nthis is not a real pdf body").unwrap_err();
        assert!(matches!(err, ExtractionError::ExtractionFailed { ref format, .. } if format == "PDF"));
    }

    #[test]
    fn pages_become_paragraphs() {
        let text = join_pages("Page one text.\n\x0C\x0C  \x0CPage three text.\n");
        assert_eq!(text, "Page one text.\n\nPage three text.");
    }
}
