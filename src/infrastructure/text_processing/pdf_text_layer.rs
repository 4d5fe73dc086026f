use std::io::Write;

use pdf_oxide::PdfDocument;

use crate::application::ports::{RenderError, TextLayerExtractor};

/// Reads embedded PDF text through `pdf_oxide`. Used when recognition
/// finds nothing on any page and for text-only previews.
#[derive(Debug, Default)]
pub struct PdfTextLayer;

impl PdfTextLayer {
    pub fn new() -> Self {
        Self
    }
}

impl TextLayerExtractor for PdfTextLayer {
    fn extract_text_layer(&self, data: &[u8]) -> Result<String, RenderError> {
        let mut temp_file = tempfile::NamedTempFile::new().map_err(|e| {
            RenderError::BackendUnavailable(format!("failed to create temp file: {e}"))
        })?;
        temp_file.write_all(data).map_err(|e| {
            RenderError::BackendUnavailable(format!("failed to write temp file: {e}"))
        })?;

        let mut doc = PdfDocument::open(temp_file.path())
            .map_err(|e| RenderError::DocumentUnreadable(format!("failed to parse PDF: {e}")))?;

        let page_count = doc.page_count().map_err(|e| {
            RenderError::DocumentUnreadable(format!("failed to read page count: {e}"))
        })?;

        let pages: Vec<String> = (0..page_count)
            .filter_map(|page_index| doc.extract_text(page_index).ok())
            .filter(|text| !text.trim().is_empty())
            .collect();

        tracing::debug!(
            page_count,
            pages_with_text = pages.len(),
            "PDF text layer read"
        );

        Ok(pages.join("\n"))
    }
}
