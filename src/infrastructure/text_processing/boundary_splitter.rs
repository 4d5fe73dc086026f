use std::ops::Range;

use async_trait::async_trait;

use crate::application::ports::{TextSplitter, TextSplitterError};
use crate::domain::{Chunk, DocumentId, NormalizedText};

/// Sliding-window chunker that prefers to cut after a sentence or at a word.
///
/// Windows are `chunk_size` chars. When a window does not reach the end of
/// the text, its end is pulled back to just after the last '.', or failing
/// that to the last ' ', provided the boundary lies past the window midpoint.
/// The next window starts `chunk_size - chunk_overlap` after the previous
/// start, or at the previous end if that is further along.
#[derive(Debug, Clone)]
pub struct BoundarySplitter {
    chunk_size: usize,
    chunk_overlap: usize,
    min_chunk_length: usize,
}

impl BoundarySplitter {
    pub fn new(
        chunk_size: usize,
        chunk_overlap: usize,
        min_chunk_length: usize,
    ) -> Result<Self, TextSplitterError> {
        if chunk_size == 0 {
            return Err(TextSplitterError::InvalidConfiguration(
                "chunk_size must be greater than zero".to_string(),
            ));
        }
        if chunk_overlap >= chunk_size {
            return Err(TextSplitterError::InvalidConfiguration(format!(
                "chunk_overlap ({chunk_overlap}) must be smaller than chunk_size ({chunk_size})"
            )));
        }

        Ok(Self {
            chunk_size,
            chunk_overlap,
            min_chunk_length,
        })
    }

    pub fn chunk(&self, text: &str, document_id: DocumentId) -> Vec<Chunk> {
        let chars: Vec<char> = text.chars().collect();

        self.windows(&chars)
            .into_iter()
            .filter_map(|window| trimmed_span(&chars, window))
            .filter(|span| span.len() >= self.min_chunk_length)
            .enumerate()
            .map(|(sequence_index, span)| {
                let chunk_text: String = chars[span.clone()].iter().collect();
                Chunk::new(document_id, sequence_index, chunk_text, span)
            })
            .collect()
    }

    fn windows(&self, chars: &[char]) -> Vec<Range<usize>> {
        let total_len = chars.len();

        if total_len == 0 {
            return Vec::new();
        }
        if total_len <= self.chunk_size {
            return vec![0..total_len];
        }

        let stride = self.chunk_size - self.chunk_overlap;
        let mut windows = Vec::new();
        let mut start = 0;

        while start < total_len {
            let end = self.window_end(chars, start);
            windows.push(start..end);
            start = (start + stride).max(end);
        }

        windows
    }

    fn window_end(&self, chars: &[char], start: usize) -> usize {
        let naive_end = (start + self.chunk_size).min(chars.len());
        if naive_end >= chars.len() {
            return naive_end;
        }

        let midpoint = start + self.chunk_size / 2;

        if let Some(period) = last_index_of(chars, '.', naive_end).filter(|&p| p > midpoint) {
            return period + 1;
        }
        if let Some(space) = last_index_of(chars, ' ', naive_end).filter(|&s| s > midpoint) {
            return space;
        }

        naive_end
    }
}

#[async_trait]
impl TextSplitter for BoundarySplitter {
    async fn split(
        &self,
        text: &NormalizedText,
        document_id: DocumentId,
    ) -> Result<Vec<Chunk>, TextSplitterError> {
        Ok(self.chunk(text.as_str(), document_id))
    }
}

/// Last position `<= from` holding `needle`.
fn last_index_of(chars: &[char], needle: char, from: usize) -> Option<usize> {
    let upper = from.min(chars.len().saturating_sub(1));
    chars[..=upper].iter().rposition(|&c| c == needle)
}

fn trimmed_span(chars: &[char], window: Range<usize>) -> Option<Range<usize>> {
    let slice = &chars[window.clone()];
    let leading = slice.iter().take_while(|c| c.is_whitespace()).count();
    if leading == slice.len() {
        return None;
    }
    let trailing = slice.iter().rev().take_while(|c| c.is_whitespace()).count();

    Some(window.start + leading..window.end - trailing)
}
