use super::page_renderer::RenderError;

/// Reads the embedded text layer of a paginated document, if any.
pub trait TextLayerExtractor: Send + Sync {
    fn extract_text_layer(&self, data: &[u8]) -> Result<String, RenderError>;
}
