//! Legacy e-reader containers (MOBI / PalmDOC / AZW).
//!
//! These are Palm database files whose type/creator pair sits at a fixed
//! offset in the header. Only that marker is checked; text recovery is the
//! generic printable-run scan.

use focus_core::ExtractionError;

use super::heuristic::extract_container_text;

const FORMAT: &str = "MOBI";

/// Offset of the 8-byte type/creator field in a Palm database header.
const TYPE_CREATOR_OFFSET: usize = 60;

const KNOWN_TYPE_CREATORS: [&[u8; 8]; 2] = [b"BOOKMOBI", b"TEXtREAd"];

pub(crate) fn has_magic(bytes: &[u8]) -> bool {
    bytes
        .get(TYPE_CREATOR_OFFSET..TYPE_CREATOR_OFFSET + 8)
        .is_some_and(|marker| KNOWN_TYPE_CREATORS.iter().any(|m| marker == &m[..]))
}

pub fn extract_mobi(bytes: &[u8]) -> Result<String, ExtractionError> {
    if !has_magic(bytes) {
        return Err(ExtractionError::failed(
            FORMAT,
            "missing BOOKMOBI/TEXtREAd marker at offset 60",
        ));
    }
    extract_container_text(bytes, FORMAT)
}
