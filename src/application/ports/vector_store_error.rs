#[derive(Debug, thiserror::Error)]
pub enum VectorStoreError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("store failed: {0}")]
    StoreFailed(String),
    #[error("search failed: {0}")]
    SearchFailed(String),
    #[error("clear failed: {0}")]
    ClearFailed(String),
}
