use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{FileLoader, LlmClient, TextSplitter, VectorStore};
use crate::infrastructure::observability::sanitize_for_log;
use crate::presentation::state::AppState;

use super::error_response::error_response;

#[derive(Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

#[derive(Serialize)]
pub struct QueryResponse {
    pub answer: String,
    pub explanation: String,
    pub sources: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_document_analysis: Option<String>,
}

#[tracing::instrument(skip(state, request))]
pub async fn query_handler<F, L, V, T>(
    State(state): State<AppState<F, L, V, T>>,
    Json(request): Json<QueryRequest>,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
    V: VectorStore + 'static,
    T: TextSplitter + 'static + ?Sized,
{
    if request.query.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Query cannot be empty");
    }

    tracing::debug!(query = %sanitize_for_log(&request.query), "Processing query");

    match state.retrieval_service.query(&request.query).await {
        Ok(response) => (
            StatusCode::OK,
            Json(QueryResponse {
                answer: response.answer,
                explanation: response.explanation,
                sources: response.sources,
                cross_document_analysis: response.cross_document_analysis,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Query failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Query failed: {e}"),
            )
        }
    }
}
