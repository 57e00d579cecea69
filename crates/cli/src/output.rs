//! Machine-readable renderings: JSON and standalone HTML.

use anyhow::{Context, Result};
use focus_ingest::{bionic::render_html, BionicSpan, ReadingDocument, ReadingStats};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonDocument<'a> {
    #[serde(flatten)]
    document: &'a ReadingDocument,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<ReadingStats>,
}

/// Serialize processed documents. A single document is emitted as an object,
/// several as an array in input order.
pub fn to_json(docs: &[ReadingDocument], with_stats: bool) -> Result<String> {
    let wrapped: Vec<JsonDocument<'_>> = docs
        .iter()
        .map(|document| JsonDocument {
            document,
            stats: with_stats.then(|| document.stats()),
        })
        .collect();
    let json = match wrapped.as_slice() {
        [single] => serde_json::to_string_pretty(single),
        many => serde_json::to_string_pretty(many),
    };
    json.context("failed to serialize reading documents")
}

fn escape(text: &str) -> String {
    render_html(&[BionicSpan::Plain(text.to_string())])
}

/// Render processed documents as one HTML page, one `<article>` per document
/// and one `<p>` per chunk. Annotated chunks use their `<b>` markup as-is.
pub fn to_html(docs: &[ReadingDocument], with_stats: bool) -> String {
    let title = match docs {
        [single] => escape(&single.title),
        _ => "Focus Reader".to_string(),
    };

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{title}</title>\n"));
    html.push_str(
        "<style>body{max-width:40em;margin:2em auto;line-height:1.6}\
         .chunk{margin:0 0 1.2em}.stats{color:#666}</style>\n",
    );
    html.push_str("</head>\n<body>\n");

    for doc in docs {
        html.push_str("<article>\n");
        html.push_str(&format!("<h1>{}</h1>\n", escape(&doc.title)));
        if with_stats {
            let stats = doc.stats();
            html.push_str(&format!(
                "<p class=\"stats\">{} words, ~{} min read</p>\n",
                stats.words, stats.estimated_minutes
            ));
        }
        for chunk in &doc.chunks {
            let body = match &chunk.bionic_content {
                Some(annotated) => annotated.clone(),
                None => escape(&chunk.content),
            };
            html.push_str(&format!(
                "<p class=\"chunk\" id=\"chunk-{}\">{}</p>\n",
                chunk.id, body
            ));
        }
        html.push_str("</article>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}
