use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError, RenderError, TextLayerExtractor};
use crate::domain::{DocumentExtraction, DocumentKind, ExtractionSource, RawDocument};

use super::text_normalizer::normalize_text;

const TEXT_LAYER_TIMEOUT: Duration = Duration::from_secs(30);

/// Extracts a PDF's embedded text without rendering or recognition.
pub struct TextLayerLoader {
    text_layer: Arc<dyn TextLayerExtractor>,
}

impl TextLayerLoader {
    pub fn new(text_layer: Arc<dyn TextLayerExtractor>) -> Self {
        Self { text_layer }
    }
}

#[async_trait]
impl FileLoader for TextLayerLoader {
    #[tracing::instrument(
        skip(self, document),
        fields(
            document_id = %document.id().as_uuid(),
            filename = %document.filename(),
        )
    )]
    async fn extract_text(
        &self,
        document: &RawDocument,
    ) -> Result<DocumentExtraction, FileLoaderError> {
        if document.kind() != DocumentKind::Pdf {
            return Err(FileLoaderError::UnsupportedContentType(
                document.kind().as_str().to_string(),
            ));
        }

        let text_layer = Arc::clone(&self.text_layer);
        let data = document.shared_data();

        let raw = tokio::time::timeout(
            TEXT_LAYER_TIMEOUT,
            tokio::task::spawn_blocking(move || text_layer.extract_text_layer(&data)),
        )
        .await
        .map_err(|_| FileLoaderError::TimedOut {
            filename: document.filename().to_string(),
            seconds: TEXT_LAYER_TIMEOUT.as_secs(),
        })?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))?
        .map_err(|e| match e {
            RenderError::DocumentUnreadable(reason) => FileLoaderError::DecodeFailed(reason),
            other => FileLoaderError::ExtractionFailed(other.to_string()),
        })?;

        let text = normalize_text(&raw);
        tracing::info!(text_length = text.char_len(), "PDF text layer extracted");

        let source = if text.is_empty() {
            ExtractionSource::Nothing
        } else {
            ExtractionSource::TextLayer
        };

        Ok(DocumentExtraction {
            text,
            pages: Vec::new(),
            source,
        })
    }
}
