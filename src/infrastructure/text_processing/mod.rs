mod boundary_splitter;
mod composite_file_loader;
mod pdf_text_layer;
mod pdfium_renderer;
mod scanned_document_loader;
mod text_layer_loader;
mod text_normalizer;

pub use boundary_splitter::BoundarySplitter;
pub use composite_file_loader::CompositeFileLoader;
pub use pdf_text_layer::PdfTextLayer;
pub use pdfium_renderer::PdfiumRenderer;
pub use scanned_document_loader::{
    DEFAULT_EXTRACTION_TIMEOUT, DEFAULT_MAX_PAGES, DEFAULT_RENDER_DPI, PipelineSettings,
    ScannedDocumentLoader,
};
pub use text_layer_loader::TextLayerLoader;
pub use text_normalizer::{normalize_text, strip_separator_artifacts};
