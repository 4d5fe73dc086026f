use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use image::RgbImage;
use tokio::sync::mpsc;

use crate::application::ports::{
    FileLoader, FileLoaderError, PageRenderer, RenderError, TextLayerExtractor,
};
use crate::domain::{
    DocumentExtraction, DocumentKind, ExtractionResult, ExtractionSource, NormalizedText, PageImage,
    RawDocument,
};
use crate::infrastructure::ocr::{SelectionError, StrategySelector};

use super::text_normalizer::{normalize_text, strip_separator_artifacts};

pub const DEFAULT_RENDER_DPI: f32 = 300.0;
pub const DEFAULT_MAX_PAGES: usize = 200;
pub const DEFAULT_EXTRACTION_TIMEOUT: Duration = Duration::from_secs(300);

#[derive(Debug, Clone, Copy)]
pub struct PipelineSettings {
    pub render_dpi: f32,
    pub max_pages: usize,
    pub extraction_timeout: Duration,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            render_dpi: DEFAULT_RENDER_DPI,
            max_pages: DEFAULT_MAX_PAGES,
            extraction_timeout: DEFAULT_EXTRACTION_TIMEOUT,
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum PageFailure {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

type RenderedPage = (usize, Result<RgbImage, RenderError>);

/// Recognition pipeline for scanned uploads.
///
/// Raster images are decoded into a single page. PDFs are rendered page by
/// page; a page that fails to render or recognize is logged and skipped.
/// When no PDF page is recognized the embedded text layer is tried before
/// falling back to the unrecognized-page notices. Separator artifacts are
/// stripped from raster text only.
pub struct ScannedDocumentLoader {
    selector: Arc<StrategySelector>,
    renderer: Arc<dyn PageRenderer>,
    text_layer: Arc<dyn TextLayerExtractor>,
    settings: PipelineSettings,
}

impl ScannedDocumentLoader {
    pub fn new(
        selector: Arc<StrategySelector>,
        renderer: Arc<dyn PageRenderer>,
        text_layer: Arc<dyn TextLayerExtractor>,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            selector,
            renderer,
            text_layer,
            settings,
        }
    }

    async fn extract_raster(
        &self,
        document: &RawDocument,
    ) -> Result<DocumentExtraction, FileLoaderError> {
        let data = document.shared_data();

        let bitmap =
            tokio::task::spawn_blocking(move || image::load_from_memory(&data).map(|i| i.to_rgb8()))
                .await
                .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))?
                .map_err(|e| FileLoaderError::DecodeFailed(format!("image decode failed: {e}")))?;

        tracing::info!(
            width = bitmap.width(),
            height = bitmap.height(),
            "Image decoded, starting recognition"
        );

        let pages = match self
            .selector
            .select(PageImage::new(0, bitmap), document.filename())
            .await
        {
            Ok(mut result) => {
                if result.is_recognized() {
                    result.chosen_text = strip_separator_artifacts(&result.chosen_text);
                }
                vec![result]
            }
            Err(e) => {
                tracing::warn!(error = %e, "Image recognition failed");
                Vec::new()
            }
        };

        Ok(assemble_pages(pages))
    }

    async fn extract_pdf(
        &self,
        document: &RawDocument,
    ) -> Result<DocumentExtraction, FileLoaderError> {
        let renderer = Arc::clone(&self.renderer);
        let data = document.shared_data();
        let dpi = self.settings.render_dpi;
        let max_pages = self.settings.max_pages;

        // Rendering runs at most one page ahead of recognition.
        let (page_tx, mut page_rx) = mpsc::channel::<RenderedPage>(1);

        let render_task = tokio::task::spawn_blocking(move || {
            renderer.render_pages(&data, dpi, max_pages, &mut |page_index, bitmap| {
                page_tx.blocking_send((page_index, bitmap)).is_ok()
            })
        });

        let mut pages = Vec::new();
        while let Some((page_index, bitmap)) = page_rx.recv().await {
            match self.process_page(document, page_index, bitmap).await {
                Ok(result) => pages.push(result),
                Err(e) => tracing::warn!(page_index, error = %e, "Page skipped"),
            }
        }

        let page_count = render_task
            .await
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))?
            .map_err(render_error_to_loader_error)?;

        if page_count > max_pages {
            tracing::warn!(
                page_count,
                max_pages,
                "Page cap reached, trailing pages skipped"
            );
        }

        if pages.iter().any(ExtractionResult::is_recognized) {
            return Ok(assemble_pages(pages));
        }

        match self.read_text_layer(document).await {
            Some(text) => {
                tracing::info!("No page recognized, using embedded text layer");
                Ok(DocumentExtraction {
                    text,
                    pages,
                    source: ExtractionSource::TextLayer,
                })
            }
            None => Ok(assemble_pages(pages)),
        }
    }

    async fn process_page(
        &self,
        document: &RawDocument,
        page_index: usize,
        bitmap: Result<RgbImage, RenderError>,
    ) -> Result<ExtractionResult, PageFailure> {
        let bitmap = bitmap?;

        let source_name = format!("{}, p. {}", document.filename(), page_index + 1);
        let result = self
            .selector
            .select(PageImage::new(page_index as u32, bitmap), &source_name)
            .await?;

        Ok(result)
    }

    async fn read_text_layer(&self, document: &RawDocument) -> Option<NormalizedText> {
        let text_layer = Arc::clone(&self.text_layer);
        let data = document.shared_data();

        let outcome = tokio::task::spawn_blocking(move || text_layer.extract_text_layer(&data)).await;

        match outcome {
            Ok(Ok(raw)) => Some(normalize_text(&raw)).filter(|text| !text.is_empty()),
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Text layer unavailable");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "Text layer task failed");
                None
            }
        }
    }
}

/// Joins page texts in page order and normalizes the result.
fn assemble_pages(pages: Vec<ExtractionResult>) -> DocumentExtraction {
    if pages.is_empty() {
        return DocumentExtraction::nothing(pages);
    }

    let source = if pages.iter().any(ExtractionResult::is_recognized) {
        ExtractionSource::Recognition
    } else {
        ExtractionSource::UnrecognizedNotice
    };

    let joined = pages
        .iter()
        .map(|page| page.chosen_text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    DocumentExtraction {
        text: normalize_text(&joined),
        pages,
        source,
    }
}

fn render_error_to_loader_error(error: RenderError) -> FileLoaderError {
    match error {
        RenderError::DocumentUnreadable(reason) => FileLoaderError::DecodeFailed(reason),
        other => FileLoaderError::ExtractionFailed(other.to_string()),
    }
}

#[async_trait]
impl FileLoader for ScannedDocumentLoader {
    #[tracing::instrument(
        skip(self, document),
        fields(
            document_id = %document.id().as_uuid(),
            filename = %document.filename(),
            kind = document.kind().as_str(),
        )
    )]
    async fn extract_text(
        &self,
        document: &RawDocument,
    ) -> Result<DocumentExtraction, FileLoaderError> {
        let timeout = self.settings.extraction_timeout;

        let extraction = tokio::time::timeout(timeout, async {
            match document.kind() {
                DocumentKind::Pdf => self.extract_pdf(document).await,
                DocumentKind::RasterImage => self.extract_raster(document).await,
            }
        })
        .await
        .map_err(|_| FileLoaderError::TimedOut {
            filename: document.filename().to_string(),
            seconds: timeout.as_secs(),
        })??;

        tracing::info!(
            pages = extraction.pages.len(),
            recognized = extraction.pages.iter().filter(|p| p.is_recognized()).count(),
            source = extraction.source.as_str(),
            text_length = extraction.text.char_len(),
            "Extraction complete"
        );

        Ok(extraction)
    }
}
