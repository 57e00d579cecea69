//! Document → reading sequence pipeline.
//!
//! Raw file bytes are turned into text (structured parsers for open formats,
//! printable-run scanning for proprietary containers), normalized, split into
//! bounded sentence-aware chunks, and optionally bionic-annotated.

pub mod bionic;
pub mod chunker;
pub mod document;
pub mod normalize;
pub mod pipeline;
pub mod reading;

pub use bionic::{annotate_spans, transform, BionicSpan};
pub use chunker::{chunk, segment_text};
pub use document::{extract_text, sniff_format};
pub use normalize::normalize;
pub use pipeline::{annotate, extract, segment, title_from_filename, Pipeline};
pub use reading::{ReadingDocument, ReadingStats};
