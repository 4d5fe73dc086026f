use std::ops::Range;

use uuid::Uuid;

/// A bounded span of normalized text, indexed independently downstream.
///
/// Offsets are measured in `char`s of the normalized text the chunk was cut
/// from, and `text` is exactly the characters in `source_offset_start..source_offset_end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub document_id: DocumentId,
    pub sequence_index: usize,
    pub text: String,
    pub source_offset_start: usize,
    pub source_offset_end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl Chunk {
    pub fn new(
        document_id: DocumentId,
        sequence_index: usize,
        text: String,
        span: Range<usize>,
    ) -> Self {
        Self {
            document_id,
            sequence_index,
            text,
            source_offset_start: span.start,
            source_offset_end: span.end,
        }
    }

    pub fn span(&self) -> Range<usize> {
        self.source_offset_start..self.source_offset_end
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
