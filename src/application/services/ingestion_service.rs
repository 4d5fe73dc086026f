use std::sync::Arc;

use crate::application::ports::{
    FileLoader, FileLoaderError, TextSplitter, TextSplitterError, VectorStore, VectorStoreError,
};
use crate::domain::{DocumentExtraction, DocumentId, RawDocument};

/// Outcome of ingesting one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestionReport {
    pub document_id: DocumentId,
    pub filename: String,
    pub extracted_text: String,
    pub chunks_created: usize,
    pub text_length: usize,
}

/// Extract, chunk and store one document at a time.
///
/// `file_loader` runs the full recognition pipeline; `preview_loader` backs
/// [`IngestionService::extract_only`] and may take cheaper paths.
pub struct IngestionService<F, V, T: ?Sized>
where
    F: FileLoader,
    V: VectorStore,
    T: TextSplitter,
{
    file_loader: Arc<F>,
    preview_loader: Arc<dyn FileLoader>,
    vector_store: Arc<V>,
    text_splitter: Arc<T>,
}

impl<F, V, T: ?Sized> IngestionService<F, V, T>
where
    F: FileLoader,
    V: VectorStore,
    T: TextSplitter,
{
    pub fn new(
        file_loader: Arc<F>,
        preview_loader: Arc<dyn FileLoader>,
        vector_store: Arc<V>,
        text_splitter: Arc<T>,
    ) -> Self {
        Self {
            file_loader,
            preview_loader,
            vector_store,
            text_splitter,
        }
    }

    #[tracing::instrument(
        skip(self, document),
        fields(document_id = %document.id().as_uuid(), filename = %document.filename())
    )]
    pub async fn ingest(&self, document: RawDocument) -> Result<IngestionReport, IngestionError> {
        let filename = document.filename().to_string();
        let document_id = document.id();

        let extraction = self.file_loader.extract_text(&document).await?;
        if extraction.is_empty() {
            return Err(IngestionError::NoTextExtracted(filename));
        }

        let chunks = self
            .text_splitter
            .split(&extraction.text, document_id)
            .await?;
        if chunks.is_empty() {
            return Err(IngestionError::EmptyChunkSet(filename));
        }

        let stored = self.vector_store.store_chunks(&chunks, &filename).await?;
        if stored == 0 {
            return Err(IngestionError::NothingStored(filename));
        }

        tracing::info!(chunks_stored = stored, "Document ingested");

        Ok(IngestionReport {
            document_id,
            text_length: extraction.text.char_len(),
            extracted_text: extraction.text.into_string(),
            chunks_created: stored,
            filename,
        })
    }

    /// Extraction without chunking or storage.
    #[tracing::instrument(skip(self, document), fields(filename = %document.filename()))]
    pub async fn extract_only(
        &self,
        document: RawDocument,
    ) -> Result<DocumentExtraction, IngestionError> {
        Ok(self.preview_loader.extract_text(&document).await?)
    }

    pub async fn clear_documents(&self) -> Result<(), IngestionError> {
        self.vector_store.clear().await?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IngestionError {
    #[error("file loading: {0}")]
    FileLoading(#[from] FileLoaderError),
    #[error("no text could be extracted from: {0}")]
    NoTextExtracted(String),
    #[error("text splitting: {0}")]
    Splitting(#[from] TextSplitterError),
    #[error("no valid text chunks could be created from: {0}")]
    EmptyChunkSet(String),
    #[error("storage: {0}")]
    Storage(#[from] VectorStoreError),
    #[error("failed to store any chunks for: {0}")]
    NothingStored(String),
}
