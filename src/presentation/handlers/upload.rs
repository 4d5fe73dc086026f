use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmClient, TextSplitter, VectorStore};
use crate::application::services::IngestionReport;
use crate::presentation::state::AppState;

use super::error_response::error_response;
use super::upload_form::read_documents;

const MAX_FILES_PER_UPLOAD: usize = 3;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub documents: Vec<DocumentInfo>,
    pub total_documents: usize,
}

#[derive(Debug, Serialize)]
pub struct DocumentInfo {
    pub document_id: Option<String>,
    pub filename: String,
    pub content: String,
    pub chunks_created: usize,
    pub text_length: usize,
}

impl From<IngestionReport> for DocumentInfo {
    fn from(report: IngestionReport) -> Self {
        Self {
            document_id: Some(report.document_id.as_uuid().to_string()),
            filename: report.filename,
            content: report.extracted_text,
            chunks_created: report.chunks_created,
            text_length: report.text_length,
        }
    }
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler<F, L, V, T>(
    State(state): State<AppState<F, L, V, T>>,
    multipart: Multipart,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
    V: VectorStore + 'static,
    T: TextSplitter + 'static + ?Sized,
{
    let documents = match read_documents(multipart).await {
        Ok(documents) => documents,
        Err(response) => return response,
    };

    if documents.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "At least 1 file required");
    }
    if documents.len() > MAX_FILES_PER_UPLOAD {
        return error_response(
            StatusCode::BAD_REQUEST,
            format!("Maximum {MAX_FILES_PER_UPLOAD} files allowed"),
        );
    }

    tracing::info!(file_count = documents.len(), "Processing upload");

    let mut processed = Vec::with_capacity(documents.len());
    for document in documents {
        let filename = document.filename().to_string();
        match state.ingestion_service.ingest(document).await {
            Ok(report) => processed.push(DocumentInfo::from(report)),
            Err(e) => {
                tracing::error!(filename = %filename, error = %e, "Document processing failed");
                return error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to process {filename}: {e}"),
                );
            }
        }
    }

    let total_documents = processed.len();
    (
        StatusCode::OK,
        Json(UploadResponse {
            message: format!("Successfully processed {total_documents} document(s)"),
            documents: processed,
            total_documents,
        }),
    )
        .into_response()
}

#[derive(Debug, Serialize)]
pub struct SingleUploadResponse {
    pub message: String,
    pub chunks_created: usize,
    pub text_length: usize,
}

/// Ingests the first file of the form and reports it in the flat
/// single-document shape.
#[tracing::instrument(skip(state, multipart))]
pub async fn upload_single_handler<F, L, V, T>(
    State(state): State<AppState<F, L, V, T>>,
    multipart: Multipart,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
    V: VectorStore + 'static,
    T: TextSplitter + 'static + ?Sized,
{
    let document = match read_documents(multipart).await {
        Ok(documents) => documents.into_iter().next(),
        Err(response) => return response,
    };
    let Some(document) = document else {
        return error_response(StatusCode::BAD_REQUEST, "A file is required");
    };

    tracing::info!(filename = %document.filename(), "Processing single upload");

    match state.ingestion_service.ingest(document).await {
        Ok(report) => (
            StatusCode::OK,
            Json(SingleUploadResponse {
                message: format!("Successfully processed {}", report.filename),
                chunks_created: report.chunks_created,
                text_length: report.text_length,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Single upload failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Processing error: {e}"),
            )
        }
    }
}
