//! Format-agnostic recovery of printable text runs from binary containers.
//!
//! Used for formats with no structured parser (legacy e-reader and scanned
//! document containers). This is byte scanning, not a container parser: it
//! recovers whatever uncompressed ASCII text happens to be stored in the file.

use focus_core::ExtractionError;

/// Minimum normalized document length accepted by the pipeline.
pub const MIN_DOCUMENT_CHARS: usize = 10;

/// Minimum recovered text length for proprietary containers. Anything shorter
/// is treated as a missing text layer.
pub const MIN_CONTAINER_TEXT_CHARS: usize = 50;

/// Tunable acceptance thresholds for the run scanner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicThresholds {
    /// A run is kept only if its trimmed length is strictly greater than this.
    pub min_run_chars: usize,
    /// A run is kept only if its letter-or-whitespace fraction is strictly
    /// greater than this.
    pub min_linguistic_ratio: f64,
}

impl Default for HeuristicThresholds {
    fn default() -> Self {
        Self {
            min_run_chars: 20,
            min_linguistic_ratio: 0.7,
        }
    }
}

fn is_text_byte(b: u8) -> bool {
    matches!(b, 0x20..=0x7E | b'\t' | b'\n' | b'\r')
}

/// Fraction of characters in `run` that are letters or whitespace.
fn linguistic_ratio(run: &str) -> f64 {
    let total = run.chars().count();
    if total == 0 {
        return 0.0;
    }
    let linguistic = run
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .count();
    linguistic as f64 / total as f64
}

/// Collect candidate runs of consecutive text-like bytes, trimmed, that pass
/// the length floor.
fn printable_runs(bytes: &[u8], min_run_chars: usize) -> Vec<String> {
    let mut runs = Vec::new();
    let mut keep = |run: &[u8]| {
        // Text-like bytes are all ASCII, so this never fails.
        if let Ok(s) = std::str::from_utf8(run) {
            let s = s.trim();
            if s.len() > min_run_chars {
                runs.push(s.to_string());
            }
        }
    };

    let mut start: Option<usize> = None;
    for (i, &b) in bytes.iter().enumerate() {
        match (is_text_byte(b), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                keep(&bytes[s..i]);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        keep(&bytes[s..]);
    }
    runs
}

/// Scan `bytes` for readable text with the default thresholds.
pub fn extract_printable_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    extract_printable_text_with(bytes, &HeuristicThresholds::default())
}

/// Scan `bytes` for readable text runs and join the survivors with blank lines.
///
/// Fails with [`ExtractionError::ExtractionEmpty`] when no run survives.
pub fn extract_printable_text_with(
    bytes: &[u8],
    thresholds: &HeuristicThresholds,
) -> Result<String, ExtractionError> {
    let candidates = printable_runs(bytes, thresholds.min_run_chars);
    let candidate_count = candidates.len();

    let kept: Vec<String> = candidates
        .into_iter()
        .filter(|run| linguistic_ratio(run) > thresholds.min_linguistic_ratio)
        .collect();

    tracing::debug!(
        bytes = bytes.len(),
        candidates = candidate_count,
        kept = kept.len(),
        "heuristic text scan"
    );

    let joined = kept.join("\n\n");
    if joined.trim().is_empty() {
        return Err(ExtractionError::ExtractionEmpty);
    }
    Ok(joined)
}

/// Run the scanner for a magic-gated container and apply the container
/// acceptance threshold, reporting a missing text layer for `format`.
pub(crate) fn extract_container_text(bytes: &[u8], format: &str) -> Result<String, ExtractionError> {
    let text = match extract_printable_text(bytes) {
        Ok(text) => text,
        Err(ExtractionError::ExtractionEmpty) => {
            return Err(ExtractionError::no_text_layer(format));
        }
        Err(e) => return Err(e),
    };
    let chars = text.chars().count();
    if chars < MIN_CONTAINER_TEXT_CHARS {
        tracing::debug!(format, chars, "recovered text below container threshold");
        return Err(ExtractionError::no_text_layer(format));
    }
    Ok(text)
}
