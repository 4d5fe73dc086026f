use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::ports::{FileLoader, FileLoaderError, LlmClient, TextSplitter, VectorStore};
use crate::application::services::IngestionError;
use crate::presentation::state::AppState;

use super::error_response::error_response;
use super::upload::{DocumentInfo, UploadResponse};
use super::upload_form::read_documents;

/// Extracts text from the first uploaded file without storing anything.
#[tracing::instrument(skip(state, multipart))]
pub async fn extract_text_handler<F, L, V, T>(
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

    let Some(document) = documents.into_iter().next() else {
        return error_response(StatusCode::BAD_REQUEST, "No files provided");
    };
    let filename = document.filename().to_string();

    let extraction = match state.ingestion_service.extract_only(document).await {
        Ok(extraction) => extraction,
        Err(IngestionError::FileLoading(FileLoaderError::DecodeFailed(reason))) => {
            tracing::warn!(filename = %filename, reason = %reason, "Undecodable upload");
            return error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Could not decode {filename}: {reason}"),
            );
        }
        Err(e) => {
            tracing::error!(filename = %filename, error = %e, "Text extraction failed");
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Text extraction error: {e}"),
            );
        }
    };

    if extraction.is_empty() {
        return (
            StatusCode::OK,
            Json(UploadResponse {
                message: "No text found - the document may require OCR".to_string(),
                documents: Vec::new(),
                total_documents: 0,
            }),
        )
            .into_response();
    }

    let text = extraction.text.into_string();
    tracing::info!(text_length = text.chars().count(), "Text extraction completed");

    (
        StatusCode::OK,
        Json(UploadResponse {
            message: format!("Text extraction successful:\n\n{text}"),
            documents: vec![DocumentInfo {
                document_id: None,
                filename,
                text_length: text.chars().count(),
                content: text,
                chunks_created: 1,
            }],
            total_documents: 1,
        }),
    )
        .into_response()
}
