use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmClient, TextSplitter, VectorStore};
use crate::presentation::state::AppState;

use super::error_response::error_response;

#[derive(Serialize)]
pub struct DocumentsOverview {
    pub message: &'static str,
    pub available_operations: [&'static str; 5],
}

#[derive(Serialize)]
pub struct ClearResponse {
    pub message: &'static str,
}

pub async fn list_documents_handler() -> impl IntoResponse {
    Json(DocumentsOverview {
        message: "Use specific endpoints to query documents",
        available_operations: [
            "POST /api/v1/upload - Upload documents",
            "POST /api/v1/extract-text - Extract text without storing",
            "POST /api/v1/query - Query documents",
            "POST /api/v1/ask - Ask with explicit context",
            "DELETE /api/v1/documents - Clear all documents",
        ],
    })
}

#[tracing::instrument(skip(state))]
pub async fn clear_documents_handler<F, L, V, T>(
    State(state): State<AppState<F, L, V, T>>,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
    V: VectorStore + 'static,
    T: TextSplitter + 'static + ?Sized,
{
    match state.ingestion_service.clear_documents().await {
        Ok(()) => {
            tracing::info!("All documents cleared");
            (
                StatusCode::OK,
                Json(ClearResponse {
                    message: "All documents cleared successfully",
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to clear documents");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to clear documents: {e}"),
            )
        }
    }
}
