use async_trait::async_trait;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// `context` and `sources` are parallel: `context[i]` came from `sources[i]`.
    async fn generate(
        &self,
        query: &str,
        context: &[String],
        sources: &[String],
    ) -> Result<String, LlmClientError>;

    async fn health_check(&self) -> Result<(), LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
