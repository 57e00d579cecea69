//! End-to-end tests: raw bytes in, reading sequence out.

use std::io::{Cursor, Write};

use focus_core::{BionicIntensity, ChunkSize, ExtractionError, FormatHint, ReaderSettings};
use focus_ingest::{extract, segment, Pipeline};
use zip::write::SimpleFileOptions;

fn settings(chunk_size: ChunkSize, bionic_enabled: bool) -> ReaderSettings {
    ReaderSettings {
        chunk_size,
        bionic_intensity: BionicIntensity::Medium,
        bionic_enabled,
    }
}

fn zip_bytes(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, body) in entries {
        writer.start_file(*name, SimpleFileOptions::default()).unwrap();
        writer.write_all(body.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

fn palm_database(marker: &[u8; 8], body: &[u8]) -> Vec<u8> {
    let mut bytes = vec![0u8; 60];
    bytes.extend_from_slice(marker);
    bytes.extend_from_slice(&[0x00, 0x00, 0x01, 0x8F]);
    bytes.extend_from_slice(body);
    bytes.push(0x00);
    bytes
}

const ESSAY: &str = "Attention is a muscle.   It gets tired.\r\n\r\n\r\n\
Short chunks help. They give the eye a place to rest. Bold prefixes guide it.";

#[test]
fn plain_text_end_to_end() {
    let doc = Pipeline::new(settings(ChunkSize::Medium, true))
        .process(ESSAY.as_bytes(), "focus/Attention Notes.txt")
        .unwrap();

    assert_eq!(doc.title, "Attention Notes");
    assert_eq!(doc.format, FormatHint::PlainText);
    let contents: Vec<&str> = doc.chunks.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(
        contents,
        vec![
            "Attention is a muscle. It gets tired.",
            "Short chunks help. They give the eye a place to rest.",
            "Bold prefixes guide it.",
        ]
    );
    assert_eq!(
        doc.chunks[2].bionic_content.as_deref(),
        Some("<b>Bo</b>ld <b>pref</b>ixes <b>gui</b>de <b>i</b>t.")
    );
}

#[test]
fn chunks_reconstruct_normalized_text() {
    let text = extract(ESSAY.as_bytes(), &FormatHint::PlainText).unwrap();
    let chunks = segment(&text, &ChunkSize::Small.config());
    let rebuilt: Vec<String> = text
        .split("\n\n")
        .map(|p| p.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect();
    let joined: String = chunks.iter().map(|c| c.content.as_str()).collect::<Vec<_>>().join(" ");
    assert_eq!(joined, rebuilt.join(" "));
}

#[test]
fn markdown_headings_are_their_own_paragraphs() {
    let md = b"# Deep Work\n\nFocus is rare. It is valuable.\n\n## Rules\n\nWork deeply.";
    let doc = Pipeline::new(settings(ChunkSize::Large, false))
        .process(md, "deep-work.md")
        .unwrap();
    let contents: Vec<&str> = doc.chunks.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(
        contents,
        vec!["Deep Work", "Focus is rare. It is valuable.", "Rules", "Work deeply."]
    );
}

#[test]
fn docx_end_to_end() {
    let xml = "<w:document><w:body>\
        <w:p><w:r><w:t>Chapter one begins here.</w:t></w:r></w:p>\
        <w:p><w:r><w:t>It   continues</w:t></w:r><w:r><w:t xml:space=\"preserve\"> on the next paragraph.</w:t></w:r></w:p>\
        </w:body></w:document>";
    let bytes = zip_bytes(&[("word/document.xml", xml)]);
    let doc = Pipeline::new(settings(ChunkSize::Large, false))
        .process(&bytes, "draft.docx")
        .unwrap();
    assert_eq!(doc.text, "Chapter one begins here.\n\nIt continues on the next paragraph.");
    assert_eq!(doc.chunks.len(), 2);
}

#[test]
fn legacy_ebook_recovers_uncompressed_text() {
    let body = b"Call me Ishmael. Some years ago, never mind how long precisely, I went to sea.";
    let bytes = palm_database(b"BOOKMOBI", body);
    let doc = Pipeline::new(settings(ChunkSize::Small, true))
        .process(&bytes, "moby.mobi")
        .unwrap();
    assert_eq!(doc.chunks[0].content, "Call me Ishmael.");
    assert_eq!(doc.chunks.len(), 2);
}

#[test]
fn legacy_ebook_without_header_fails_fast() {
    let body = b"Call me Ishmael. Some years ago, never mind how long precisely, I went to sea.";
    let err = Pipeline::default().process(body, "moby.mobi").unwrap_err();
    assert!(matches!(err, ExtractionError::ExtractionFailed { ref format, .. } if format == "MOBI"));
}

#[test]
fn scanned_container_without_text_layer() {
    let mut bytes = b"AT&TFORM\x00\x00\x40\x00DJVU".to_vec();
    bytes.extend(std::iter::repeat(0xC3u8).take(512));
    let err = Pipeline::default().process(&bytes, "scan.djvu").unwrap_err();
    assert_eq!(err, ExtractionError::NoTextLayer { format: "DjVu".to_string() });
    assert!(err.to_string().contains("DjVu"));
}

#[test]
fn unknown_extension_is_unsupported() {
    let err = Pipeline::default().process(b"a,b,c\n1,2,3", "table.csv").unwrap_err();
    assert_eq!(err, ExtractionError::UnsupportedFormat(".csv".to_string()));
}

#[test]
fn whitespace_only_file_is_empty_result() {
    let err = Pipeline::default().process(b" \r\n\t \n", "blank.txt").unwrap_err();
    assert!(matches!(err, ExtractionError::EmptyResult { min_chars: 10 }));
}

#[test]
fn explicit_hint_overrides_filename() {
    let doc = Pipeline::default()
        .process_with_hint(b"Plain words in a file.", "Upload", FormatHint::PlainText)
        .unwrap();
    assert_eq!(doc.title, "Upload");
    assert_eq!(doc.chunks.len(), 1);
}

#[test]
fn output_serializes_for_consumers() {
    let doc = Pipeline::new(settings(ChunkSize::Small, true))
        .process(b"Stay on task. Take breaks.", "tips.txt")
        .unwrap();
    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(json["title"], "tips");
    assert_eq!(json["format"], "plaintext");
    assert_eq!(json["chunks"][0]["content"], "Stay on task.");
    assert_eq!(json["chunks"][0]["bionicContent"], "<b>St</b>ay <b>o</b>n <b>ta</b>sk.");
    assert!(json["chunks"][1]["id"].is_string());
}
