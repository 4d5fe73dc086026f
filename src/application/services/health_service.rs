use std::sync::Arc;

use crate::application::ports::{LlmClient, TextRecognizer, VectorStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollaboratorHealth {
    pub ocr: bool,
    pub vector_store: bool,
    pub llm: bool,
}

impl CollaboratorHealth {
    pub fn all_healthy(&self) -> bool {
        self.ocr && self.vector_store && self.llm
    }
}

/// Probes every external collaborator the pipeline depends on.
pub struct HealthService {
    recognizer: Arc<dyn TextRecognizer>,
    vector_store: Arc<dyn VectorStore>,
    llm_client: Arc<dyn LlmClient>,
}

impl HealthService {
    pub fn new(
        recognizer: Arc<dyn TextRecognizer>,
        vector_store: Arc<dyn VectorStore>,
        llm_client: Arc<dyn LlmClient>,
    ) -> Self {
        Self {
            recognizer,
            vector_store,
            llm_client,
        }
    }

    pub async fn check(&self) -> CollaboratorHealth {
        let (ocr, vector_store, llm) = tokio::join!(
            self.recognizer.is_available(),
            self.vector_store.health_check(),
            self.llm_client.health_check(),
        );

        if let Err(e) = &vector_store {
            tracing::warn!(error = %e, "Vector store health check failed");
        }
        if let Err(e) = &llm {
            tracing::warn!(error = %e, "LLM health check failed");
        }

        CollaboratorHealth {
            ocr,
            vector_store: vector_store.is_ok(),
            llm: llm.is_ok(),
        }
    }
}
