use focus_core::ExtractionError;

/// Decode text bytes: UTF-8 first (minus any BOM), lossy otherwise.
fn decode(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    String::from_utf8(bytes.to_vec()).unwrap_or_else(|_| String::from_utf8_lossy(bytes).into_owned())
}

pub fn extract_txt(bytes: &[u8]) -> Result<String, ExtractionError> {
    Ok(decode(bytes))
}

/// Markdown is read as text with heading markers removed, so `## Methods`
/// reads as `Methods`.
pub fn extract_md(bytes: &[u8]) -> Result<String, ExtractionError> {
    let text = decode(bytes);
    let lines: Vec<&str> = text
        .lines()
        .map(|line| {
            if line.starts_with('#') {
                line.trim_start_matches('#').trim()
            } else {
                line
            }
        })
        .collect();
    Ok(lines.join("\n"))
}
