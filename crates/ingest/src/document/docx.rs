//! Word-processor XML (`.docx`): text runs from `word/document.xml`.

use std::sync::LazyLock;

use focus_core::ExtractionError;
use regex::Regex;

use super::markup::{decode_entities, open_zip, read_entry};

const FORMAT: &str = "DOCX";
const MAIN_PART: &str = "word/document.xml";

/// Tab-stop definitions, paragraph ends, tabs, breaks and text runs, in
/// document order. Tab stops are matched only so they can be skipped.
static BODY_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)<w:tabs\b[^>]*/>|<w:tabs\b.*?</w:tabs>|</w:p>|<w:(?P<brk>tab|br|cr)\b[^>]*/>|<w:t(?:\s[^>]*)?>(?P<text>[^<]*)</w:t>",
    )
    .expect("valid regex")
});

/// Flatten WordprocessingML into text with blank lines between paragraphs.
fn document_xml_to_text(xml: &str) -> String {
    let mut out = String::with_capacity(xml.len() / 4);
    for caps in BODY_TOKEN.captures_iter(xml) {
        if let Some(run) = caps.name("text") {
            out.push_str(&decode_entities(run.as_str()));
            continue;
        }
        match caps.name("brk").map(|m| m.as_str()) {
            Some("tab") => out.push('\t'),
            Some(_) => out.push('\n'),
            None if &caps[0] == "</w:p>" => out.push_str("\n\n"),
            None => {}
        }
    }
    out
}

pub fn extract_docx(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = open_zip(bytes, FORMAT)?;
    let xml = read_entry(&mut archive, MAIN_PART, FORMAT)?;
    let text = document_xml_to_text(&xml);
    if text.trim().is_empty() {
        return Err(ExtractionError::no_text_layer(FORMAT));
    }
    tracing::debug!(chars = text.len(), "DOCX body extracted");
    Ok(text)
}
