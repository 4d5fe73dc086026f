use crate::application::ports::{SearchResult, VectorStore, VectorStoreError};
use crate::domain::Chunk;

const PLACEHOLDER_SCORE: f32 = 0.95;

/// Stand-in store: accepts every chunk and answers each search with one
/// placeholder hit that carries no source.
#[derive(Debug, Default)]
pub struct MockVectorStore;

impl MockVectorStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl VectorStore for MockVectorStore {
    async fn store_chunks(
        &self,
        chunks: &[Chunk],
        source: &str,
    ) -> Result<usize, VectorStoreError> {
        tracing::debug!(source, chunk_count = chunks.len(), "Chunks accepted");
        Ok(chunks.len())
    }

    async fn search(
        &self,
        query: &str,
        _limit: usize,
    ) -> Result<Vec<SearchResult>, VectorStoreError> {
        Ok(vec![SearchResult {
            content: format!("Sample result for: {query}"),
            source: None,
            score: PLACEHOLDER_SCORE,
        }])
    }

    async fn clear(&self) -> Result<(), VectorStoreError> {
        tracing::info!("All documents cleared");
        Ok(())
    }

    async fn health_check(&self) -> Result<(), VectorStoreError> {
        Ok(())
    }
}
