use async_trait::async_trait;

use super::{SearchResult, VectorStoreError};
use crate::domain::Chunk;

#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Returns the number of chunks accepted.
    async fn store_chunks(&self, chunks: &[Chunk], source: &str)
    -> Result<usize, VectorStoreError>;

    async fn search(&self, query: &str, limit: usize)
    -> Result<Vec<SearchResult>, VectorStoreError>;

    async fn clear(&self) -> Result<(), VectorStoreError>;

    async fn health_check(&self) -> Result<(), VectorStoreError>;
}
