use async_trait::async_trait;

use crate::domain::{DocumentExtraction, RawDocument};

/// Turns an uploaded document into normalized text.
///
/// An empty extraction is not an error; callers decide what "no text" means.
#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_text(
        &self,
        document: &RawDocument,
    ) -> Result<DocumentExtraction, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("document could not be decoded: {0}")]
    DecodeFailed(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("extraction timed out after {seconds}s for {filename}")]
    TimedOut { filename: String, seconds: u64 },
}
