use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{FileLoader, LlmClient, TextSplitter, VectorStore};
use crate::infrastructure::observability::sanitize_for_log;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
}

#[derive(Serialize)]
pub struct AskResponse {
    pub response: String,
    pub reasoning: Vec<String>,
    pub success: bool,
}

#[tracing::instrument(skip(state, request))]
pub async fn ask_handler<F, L, V, T>(
    State(state): State<AppState<F, L, V, T>>,
    Json(request): Json<AskRequest>,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
    V: VectorStore + 'static,
    T: TextSplitter + 'static + ?Sized,
{
    let query = request.query.unwrap_or_default();
    if query.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(AskResponse {
                response: "Query cannot be empty".to_string(),
                reasoning: vec!["No query provided".to_string()],
                success: false,
            }),
        );
    }

    tracing::debug!(query = %sanitize_for_log(&query), "Processing ask request");

    let context = request.context.unwrap_or_default();
    let response = state.retrieval_service.ask(&query, &context).await;

    tracing::info!(response_length = response.chars().count(), "Ask request answered");

    (
        StatusCode::OK,
        Json(AskResponse {
            response,
            reasoning: vec![
                "AI analysis completed".to_string(),
                "Used provided context".to_string(),
                "Generated structured response".to_string(),
            ],
            success: true,
        }),
    )
}
