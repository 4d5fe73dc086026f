use std::sync::Arc;

use crate::application::ports::{FileLoader, LlmClient, TextSplitter, VectorStore};
use crate::application::services::{HealthService, IngestionService, RetrievalService};
use crate::presentation::config::Settings;

pub struct AppState<F, L, V, T: ?Sized>
where
    F: FileLoader,
    L: LlmClient,
    V: VectorStore,
    T: TextSplitter,
{
    pub ingestion_service: Arc<IngestionService<F, V, T>>,
    pub retrieval_service: Arc<RetrievalService<L, V>>,
    pub health_service: Arc<HealthService>,
    pub settings: Settings,
}

impl<F, L, V, T: ?Sized> Clone for AppState<F, L, V, T>
where
    F: FileLoader,
    L: LlmClient,
    V: VectorStore,
    T: TextSplitter,
{
    fn clone(&self) -> Self {
        Self {
            ingestion_service: Arc::clone(&self.ingestion_service),
            retrieval_service: Arc::clone(&self.retrieval_service),
            health_service: Arc::clone(&self.health_service),
            settings: self.settings.clone(),
        }
    }
}
