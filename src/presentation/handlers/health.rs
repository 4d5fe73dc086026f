use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmClient, TextSplitter, VectorStore};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ServiceBanner {
    pub message: &'static str,
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub ocr: &'static str,
    pub vector_store: &'static str,
    pub llm: &'static str,
}

pub async fn root_handler() -> impl IntoResponse {
    Json(ServiceBanner {
        message: "Document OCR and query service",
        status: "running",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn health_handler<F, L, V, T>(
    State(state): State<AppState<F, L, V, T>>,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
    V: VectorStore + 'static,
    T: TextSplitter + 'static + ?Sized,
{
    let health = state.health_service.check().await;

    let (status_code, status) = if health.all_healthy() {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        status_code,
        Json(HealthResponse {
            status,
            ocr: if health.ocr { "available" } else { "unavailable" },
            vector_store: if health.vector_store { "connected" } else { "disconnected" },
            llm: if health.llm { "connected" } else { "disconnected" },
        }),
    )
}
