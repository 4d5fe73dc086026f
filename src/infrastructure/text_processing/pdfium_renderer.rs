use image::RgbImage;
use pdfium_render::prelude::*;

use crate::application::ports::{PageRenderer, PageSink, RenderError};

const POINTS_PER_INCH: f32 = 72.0;

/// Renders PDF pages through the system pdfium library. The library is
/// bound and the document parsed once per `render_pages` call.
#[derive(Debug, Default)]
pub struct PdfiumRenderer;

impl PdfiumRenderer {
    pub fn new() -> Self {
        Self
    }

    fn bind() -> Result<Pdfium, RenderError> {
        let bindings = Pdfium::bind_to_system_library()
            .map_err(|e| RenderError::BackendUnavailable(format!("pdfium bind failed: {e}")))?;
        Ok(Pdfium::new(bindings))
    }
}

fn render_one(doc: &PdfDocument<'_>, page_index: usize, dpi: f32) -> Result<RgbImage, RenderError> {
    let page = doc
        .pages()
        .get(page_index as u16)
        .map_err(|e| RenderError::PageFailed {
            page_index,
            reason: format!("page access failed: {e}"),
        })?;

    let width = (page.width().value * dpi / POINTS_PER_INCH) as i32;
    let height = (page.height().value * dpi / POINTS_PER_INCH) as i32;

    let bitmap = page
        .render_with_config(
            &PdfRenderConfig::new()
                .set_target_width(width)
                .set_target_height(height),
        )
        .map_err(|e| RenderError::PageFailed {
            page_index,
            reason: format!("render failed: {e}"),
        })?;

    Ok(bitmap.as_image().to_rgb8())
}

impl PageRenderer for PdfiumRenderer {
    fn render_pages(
        &self,
        data: &[u8],
        dpi: f32,
        max_pages: usize,
        sink: &mut PageSink<'_>,
    ) -> Result<usize, RenderError> {
        let pdfium = Self::bind()?;
        let doc = pdfium
            .load_pdf_from_byte_slice(data, None)
            .map_err(|e| RenderError::DocumentUnreadable(format!("pdfium open failed: {e}")))?;

        let page_count = doc.pages().len() as usize;

        for page_index in 0..page_count.min(max_pages) {
            if !sink(page_index, render_one(&doc, page_index, dpi)) {
                break;
            }
        }

        Ok(page_count)
    }
}
