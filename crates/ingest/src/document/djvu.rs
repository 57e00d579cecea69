//! Legacy scanned-document containers (DjVu).
//!
//! DjVu files are IFF85 containers: `AT&T` magic, a `FORM` chunk, a length,
//! then the form type. Pages are usually images, so a missing text layer is
//! the common case rather than an error in the file.

use focus_core::ExtractionError;

use super::heuristic::extract_container_text;

const FORMAT: &str = "DjVu";

const IFF_MAGIC: &[u8; 8] = b"AT&TFORM";
const FORM_TYPE_OFFSET: usize = 12;
const FORM_TYPES: [&[u8; 4]; 2] = [b"DJVU", b"DJVM"];

pub(crate) fn has_magic(bytes: &[u8]) -> bool {
    let magic_ok = bytes.get(..8).is_some_and(|m| m == &IFF_MAGIC[..]);
    let form_ok = bytes
        .get(FORM_TYPE_OFFSET..FORM_TYPE_OFFSET + 4)
        .is_some_and(|t| FORM_TYPES.iter().any(|f| t == &f[..]));
    magic_ok && form_ok
}

pub fn extract_djvu(bytes: &[u8]) -> Result<String, ExtractionError> {
    if !has_magic(bytes) {
        return Err(ExtractionError::failed(FORMAT, "missing AT&TFORM DJVU/DJVM header"));
    }
    extract_container_text(bytes, FORMAT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn djvu_bytes(form: &[u8; 4], body: &[u8]) -> Vec<u8> {
        let mut bytes = IFF_MAGIC.to_vec();
        bytes.extend_from_slice(&[0x00, 0x00, 0x10, 0x00]);
        bytes.extend_from_slice(form);
        bytes.extend_from_slice(b"INFO\x00\x00\x00\x0A\x09\xF6\x0C\xE4\x00\x64\x16\x00\x01\x00");
        bytes.extend_from_slice(body);
        bytes
    }

    #[test]
    fn recovers_hidden_text_layer() {
        let body = b"\x00\x01Scanned minutes of the annual meeting of the village council.\x00";
        let text = extract_djvu(&djvu_bytes(b"DJVU", body)).unwrap();
        assert_eq!(text, "Scanned minutes of the annual meeting of the village council.");
    }

    #[test]
    fn image_only_scan_has_no_text_layer() {
        let body = [0xAAu8; 256];
        let err = extract_djvu(&djvu_bytes(b"DJVM", &body)).unwrap_err();
        assert_eq!(err, ExtractionError::no_text_layer("DjVu"));
    }

    #[test]
    fn rejects_other_iff_forms() {
        let body = b"\x00Scanned minutes of the annual meeting of the village council.\x00";
        let err = extract_djvu(&djvu_bytes(b"AIFF", body)).unwrap_err();
        assert!(matches!(err, ExtractionError::ExtractionFailed { .. }));
    }
}
