use image::RgbImage;

/// Receives each rendered page in order. Returning `false` stops rendering.
pub type PageSink<'a> = dyn FnMut(usize, Result<RgbImage, RenderError>) -> bool + 'a;

/// Rasterizes pages of a paginated document. Implementations are blocking
/// and are driven from `spawn_blocking`.
pub trait PageRenderer: Send + Sync {
    /// Opens `data` once and renders its first `max_pages` pages at `dpi`,
    /// handing every page outcome to `sink`. Returns the document's total
    /// page count.
    fn render_pages(
        &self,
        data: &[u8],
        dpi: f32,
        max_pages: usize,
        sink: &mut PageSink<'_>,
    ) -> Result<usize, RenderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("rendering backend unavailable: {0}")]
    BackendUnavailable(String),
    #[error("document unreadable: {0}")]
    DocumentUnreadable(String),
    #[error("page {page_index} failed: {reason}")]
    PageFailed { page_index: usize, reason: String },
}
