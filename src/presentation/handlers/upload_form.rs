use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::response::Response;

use crate::domain::{DocumentKind, RawDocument};

use super::error_response::error_response;

pub(super) const SUPPORTED_FORMATS: &str = "PDF, JPG, JPEG, PNG, BMP, TIFF";

/// Every file part of a multipart upload, in submission order.
pub(super) async fn read_documents(mut multipart: Multipart) -> Result<Vec<RawDocument>, Response> {
    let mut documents = Vec::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return Err(error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Failed to read multipart: {e}"),
                ));
            }
        };

        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        let content_type = field.content_type().map(str::to_string);

        let kind = DocumentKind::from_filename(&filename)
            .or_else(|| content_type.as_deref().and_then(DocumentKind::from_mime));
        let Some(kind) = kind else {
            tracing::warn!(filename = %filename, "Unsupported file type");
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                format!("Unsupported file type: {filename}. Supported formats: {SUPPORTED_FORMATS}"),
            ));
        };

        let data = match field.bytes().await {
            Ok(data) => data,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read file bytes");
                return Err(error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Failed to read file: {e}"),
                ));
            }
        };

        if data.is_empty() {
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                format!("Empty file detected: {filename}"),
            ));
        }

        tracing::debug!(filename = %filename, bytes = data.len(), kind = kind.as_str(), "File received");
        documents.push(RawDocument::new(filename, kind, data.to_vec()));
    }

    Ok(documents)
}
