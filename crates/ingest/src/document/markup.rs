//! Shared helpers for the zip-packaged XML formats (DOCX, EPUB).

use std::io::{Cursor, Read};
use std::sync::LazyLock;

use focus_core::ExtractionError;
use regex::Regex;
use zip::ZipArchive;

static ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|[a-zA-Z]+);").expect("valid regex"));

static DROPPED_ELEMENTS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    ["head", "script", "style"]
        .map(|name| Regex::new(&format!(r"(?is)<{name}\b[^>]*>.*?</{name}\s*>")).expect("valid regex"))
});

static BLOCK_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</(p|div|h[1-6]|li|blockquote|section|article|tr|pre|dd|dt)\s*>|<br\s*/?>|<hr\s*/?>")
        .expect("valid regex")
});

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("valid regex"));

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_][\w:.-]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("valid regex")
});

const ZIP_MAGIC: &[u8; 4] = b"PK\x03\x04";

pub(crate) fn is_zip(bytes: &[u8]) -> bool {
    bytes.starts_with(ZIP_MAGIC)
}

/// Open a zip container, failing fast when the local header magic is absent.
pub(crate) fn open_zip<'a>(
    bytes: &'a [u8],
    format: &str,
) -> Result<ZipArchive<Cursor<&'a [u8]>>, ExtractionError> {
    if !is_zip(bytes) {
        return Err(ExtractionError::failed(format, "not a zip container"));
    }
    ZipArchive::new(Cursor::new(bytes)).map_err(|e| ExtractionError::failed(format, e))
}

/// Read one archive member as UTF-8 (lossy).
pub(crate) fn read_entry(
    archive: &mut ZipArchive<Cursor<&[u8]>>,
    name: &str,
    format: &str,
) -> Result<String, ExtractionError> {
    let mut entry = archive
        .by_name(name)
        .map_err(|e| ExtractionError::failed(format, format!("{name}: {e}")))?;
    let mut raw = Vec::new();
    entry
        .read_to_end(&mut raw)
        .map_err(|e| ExtractionError::failed(format, format!("{name}: {e}")))?;
    Ok(String::from_utf8(raw).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
}

/// Decode the XML predefined entities, `&nbsp;`, and numeric references.
/// Unknown named entities are left as written.
pub(crate) fn decode_entities(text: &str) -> String {
    ENTITY
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let name = &caps[1];
            let decoded = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = name.strip_prefix('#') {
                dec.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                match name {
                    "amp" => Some('&'),
                    "lt" => Some('<'),
                    "gt" => Some('>'),
                    "quot" => Some('"'),
                    "apos" => Some('\''),
                    "nbsp" => Some(' '),
                    "mdash" => Some('—'),
                    "ndash" => Some('–'),
                    "hellip" => Some('…'),
                    "rsquo" => Some('’'),
                    "lsquo" => Some('‘'),
                    "rdquo" => Some('”'),
                    "ldquo" => Some('“'),
                    _ => None,
                }
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

/// Flatten an (X)HTML document to text: drop `head`/`script`/`style`,
/// turn block ends into paragraph breaks, strip remaining tags.
pub(crate) fn html_to_text(html: &str) -> String {
    let text = DROPPED_ELEMENTS
        .iter()
        .fold(html.to_string(), |acc, re| re.replace_all(&acc, "").into_owned());
    let text = BLOCK_BOUNDARY.replace_all(&text, "\n\n");
    let text = TAG.replace_all(&text, "");
    decode_entities(&text)
}

/// Attribute map of a single start tag, in source order.
pub(crate) fn attributes(tag: &str) -> Vec<(&str, &str)> {
    ATTRIBUTE
        .captures_iter(tag)
        .filter_map(|caps| {
            let name = caps.get(1)?.as_str();
            let value = caps.get(2).or_else(|| caps.get(3))?.as_str();
            Some((name, value))
        })
        .collect()
}

pub(crate) fn attribute<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    attributes(tag)
        .into_iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    /// Build an in-memory zip with the given members, stored uncompressed
    /// like an EPUB `mimetype` entry.
    pub(crate) fn zip_bytes(entries: &[(&str, &str)]) -> Vec<u8> {
        let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, body) in entries {
            writer.start_file(*name, options).unwrap();
            writer.write_all(body.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn decodes_entities() {
        assert_eq!(
            decode_entities("Tom &amp; Jerry &lt;3 &#65;&#x42; &unknown; &nbsp;x"),
            "Tom & Jerry <3 AB &unknown;  x"
        );
    }

    #[test]
    fn html_blocks_become_paragraphs() {
        let html = "<html><head><title>Skip me</title></head><body>\
                    <h1>Chapter One</h1><p>First <em>para</em>.</p>\
                    <script>var x = 1;</script><p>Second&#8212;para.</p></body></html>";
        let text = html_to_text(html);
        assert!(!text.contains("Skip me"));
        assert!(!text.contains("var x"));
        assert!(text.contains("Chapter One\n\n"));
        assert!(text.contains("First para.\n\n"));
        assert!(text.contains("Second—para."));
    }

    #[test]
    fn parses_attributes_in_any_quote_style() {
        let tag = r#"<item href='ch1.xhtml' id="c1" media-type="application/xhtml+xml"/>"#;
        assert_eq!(attribute(tag, "id"), Some("c1"));
        assert_eq!(attribute(tag, "href"), Some("ch1.xhtml"));
        assert_eq!(attribute(tag, "properties"), None);
    }

    #[test]
    fn open_zip_rejects_other_containers() {
        let err = open_zip(b"%PDF-1.4", "DOCX").unwrap_err();
        assert_eq!(err, ExtractionError::failed("DOCX", "not a zip container"));
    }

    #[test]
    fn reads_members() {
        let bytes = zip_bytes(&[("a.txt", "alpha")]);
        let mut archive = open_zip(&bytes, "EPUB").unwrap();
        assert_eq!(read_entry(&mut archive, "a.txt", "EPUB").unwrap(), "alpha");
        assert!(read_entry(&mut archive, "missing.txt", "EPUB").is_err());
    }
}
