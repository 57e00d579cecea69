//! E-book archives (`.epub`): spine documents in reading order.

use std::collections::HashMap;
use std::sync::LazyLock;

use focus_core::ExtractionError;
use regex::Regex;

use super::markup::{attribute, html_to_text, open_zip, read_entry};

const FORMAT: &str = "EPUB";
const CONTAINER: &str = "META-INF/container.xml";

static ROOTFILE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<rootfile\b[^>]*>").expect("valid regex"));
static MANIFEST_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<item\b[^>]*>").expect("valid regex"));
static SPINE_ITEMREF: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<itemref\b[^>]*>").expect("valid regex"));

/// Package document path from `META-INF/container.xml`.
fn rootfile_path(container_xml: &str) -> Option<String> {
    ROOTFILE
        .find_iter(container_xml)
        .find_map(|tag| attribute(tag.as_str(), "full-path"))
        .map(str::to_string)
}

/// Resolve a manifest href against the package document's directory,
/// folding `.` and `..` segments.
fn resolve_href(opf_path: &str, href: &str) -> String {
    let href = href.split('#').next().unwrap_or(href);
    let mut parts: Vec<&str> = match opf_path.rfind('/') {
        Some(idx) => opf_path[..idx].split('/').collect(),
        None => Vec::new(),
    };
    for segment in href.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            other => parts.push(other),
        }
    }
    parts.join("/")
}

/// Archive paths of the spine documents, in reading order.
fn spine_documents(opf_path: &str, opf: &str) -> Vec<String> {
    let manifest: HashMap<&str, &str> = MANIFEST_ITEM
        .find_iter(opf)
        .filter_map(|tag| {
            let tag = tag.as_str();
            Some((attribute(tag, "id")?, attribute(tag, "href")?))
        })
        .collect();

    SPINE_ITEMREF
        .find_iter(opf)
        .filter_map(|tag| {
            let tag = tag.as_str();
            if attribute(tag, "linear") == Some("no") {
                return None;
            }
            let href = manifest.get(attribute(tag, "idref")?)?;
            Some(resolve_href(opf_path, href))
        })
        .collect()
}

/// Fallback when there is no usable spine: every (X)HTML member in archive order.
fn html_members(names: impl Iterator<Item = String>) -> Vec<String> {
    names
        .filter(|n| {
            let lower = n.to_lowercase();
            lower.ends_with(".xhtml") || lower.ends_with(".html") || lower.ends_with(".htm")
        })
        .collect()
}

pub fn extract_epub(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = open_zip(bytes, FORMAT)?;

    let container = read_entry(&mut archive, CONTAINER, FORMAT)?;
    let opf_path = rootfile_path(&container)
        .ok_or_else(|| ExtractionError::failed(FORMAT, "container.xml has no rootfile"))?;
    let opf = read_entry(&mut archive, &opf_path, FORMAT)?;

    let mut documents = spine_documents(&opf_path, &opf);
    if documents.is_empty() {
        tracing::debug!(opf = %opf_path, "empty spine, falling back to archive order");
        documents = html_members(archive.file_names().map(str::to_string));
    }

    let mut sections = Vec::with_capacity(documents.len());
    for path in &documents {
        match read_entry(&mut archive, path, FORMAT) {
            Ok(html) => sections.push(html_to_text(&html)),
            // A dangling spine entry loses one chapter, not the book.
            Err(e) => tracing::warn!(path = %path, error = %e, "skipping unreadable spine document"),
        }
    }

    let text = sections.join("\n\n");
    if text.trim().is_empty() {
        return Err(ExtractionError::no_text_layer(FORMAT));
    }
    tracing::debug!(documents = documents.len(), chars = text.len(), "EPUB spine extracted");
    Ok(text)
}
