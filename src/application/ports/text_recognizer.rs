use std::sync::Arc;

use async_trait::async_trait;
use image::RgbImage;

use crate::domain::RecognitionConfig;

/// Black-box recognition engine: bitmap in, raw text out.
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    async fn recognize(
        &self,
        bitmap: Arc<RgbImage>,
        config: &RecognitionConfig,
    ) -> Result<String, RecognitionError>;

    async fn is_available(&self) -> bool {
        true
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RecognitionError {
    #[error("recognition engine unavailable: {0}")]
    EngineUnavailable(String),
    #[error("recognition engine failed: {0}")]
    EngineFailed(String),
    #[error("bitmap staging failed: {0}")]
    Staging(String),
}
