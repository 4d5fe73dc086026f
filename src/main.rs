use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use docsift::application::ports::{FileLoader, LlmClient, TextRecognizer, VectorStore};
use docsift::application::services::{HealthService, IngestionService, RetrievalService};
use docsift::domain::{DocumentKind, RecognitionConfig};
use docsift::infrastructure::llm::SimulatedLlmClient;
use docsift::infrastructure::observability::{TracingConfig, init_tracing};
use docsift::infrastructure::ocr::{SelectionPolicy, StrategySelector, TesseractRecognizer};
use docsift::infrastructure::persistence::MockVectorStore;
use docsift::infrastructure::text_processing::{
    BoundarySplitter, CompositeFileLoader, PdfTextLayer, PdfiumRenderer, PipelineSettings,
    ScannedDocumentLoader, TextLayerLoader,
};
use docsift::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::new(
        environment.as_str(),
        &settings.logging.level,
        settings.logging.enable_json,
    ));

    let recognizer: Arc<dyn TextRecognizer> =
        Arc::new(TesseractRecognizer::new(&settings.ocr.tesseract_path));
    if !recognizer.is_available().await {
        tracing::warn!(
            tesseract_path = %settings.ocr.tesseract_path,
            "Tesseract not found, image recognition will fail"
        );
    }

    let recognition_config = RecognitionConfig::new(&settings.ocr.language)
        .with_char_whitelist(settings.ocr.char_whitelist.clone());
    let selector = Arc::new(StrategySelector::new(
        Arc::clone(&recognizer),
        recognition_config,
        SelectionPolicy {
            selection_threshold: settings.extraction.selection_threshold,
            retry_min_chars: settings.ocr.retry_min_chars,
        },
    ));

    let text_layer = Arc::new(PdfTextLayer::new());
    let scanned_loader = Arc::new(ScannedDocumentLoader::new(
        selector,
        Arc::new(PdfiumRenderer::new()),
        text_layer.clone(),
        PipelineSettings {
            render_dpi: settings.extraction.render_dpi,
            max_pages: settings.extraction.max_pages,
            extraction_timeout: settings.extraction.document_timeout(),
        },
    ));
    let preview_loader: Arc<dyn FileLoader> = Arc::new(CompositeFileLoader::new(vec![
        (
            DocumentKind::Pdf,
            Arc::new(TextLayerLoader::new(text_layer)) as Arc<dyn FileLoader>,
        ),
        (
            DocumentKind::RasterImage,
            scanned_loader.clone() as Arc<dyn FileLoader>,
        ),
    ]));

    let text_splitter = Arc::new(
        BoundarySplitter::new(
            settings.chunking.chunk_size,
            settings.chunking.chunk_overlap,
            settings.chunking.min_chunk_length,
        )
        .context("Invalid chunking settings")?,
    );
    let vector_store = Arc::new(MockVectorStore::new());
    let llm_client = Arc::new(SimulatedLlmClient::new());

    let ingestion_service = Arc::new(IngestionService::new(
        scanned_loader,
        preview_loader,
        Arc::clone(&vector_store),
        text_splitter,
    ));
    let retrieval_service = Arc::new(RetrievalService::new(
        Arc::clone(&llm_client),
        Arc::clone(&vector_store),
        settings.retrieval.top_k,
    ));
    let health_service = Arc::new(HealthService::new(
        recognizer,
        vector_store as Arc<dyn VectorStore>,
        llm_client as Arc<dyn LlmClient>,
    ));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;

    let state = AppState {
        ingestion_service,
        retrieval_service,
        health_service,
        settings,
    };
    let router = create_router(state);

    tracing::info!(%addr, environment = %environment, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
