use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque chunk identifier. Unique per segmentation call; re-chunking
/// produces a fresh set.
pub type ChunkId = Uuid;

/// One bounded reading unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chunk {
    pub id: ChunkId,
    /// Plain, trimmed, non-empty text. Never spans a paragraph.
    pub content: String,
    /// `content` with bold markers applied; `None` when bionic reading is off.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bionic_content: Option<String>,
}

impl Chunk {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            bionic_content: None,
        }
    }

    /// A new chunk value with the same id and content and the given annotation.
    pub fn with_bionic_content(&self, bionic_content: Option<String>) -> Self {
        Self {
            id: self.id,
            content: self.content.clone(),
            bionic_content,
        }
    }

    /// Character count of `content` (not bytes).
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }
}
