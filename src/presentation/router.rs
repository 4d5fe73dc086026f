use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{FileLoader, LlmClient, TextSplitter, VectorStore};
use crate::infrastructure::observability::request_context_middleware;
use crate::presentation::handlers::{
    ask_handler, clear_documents_handler, extract_text_handler, health_handler,
    list_documents_handler, query_handler, root_handler, upload_handler, upload_single_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<F, L, V, T>(state: AppState<F, L, V, T>) -> Router
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
    V: VectorStore + 'static,
    T: TextSplitter + 'static + ?Sized,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = DefaultBodyLimit::max(state.settings.server.max_upload_bytes());

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler::<F, L, V, T>))
        .route("/api/v1/upload", post(upload_handler::<F, L, V, T>))
        .route(
            "/api/v1/upload-single",
            post(upload_single_handler::<F, L, V, T>),
        )
        .route(
            "/api/v1/extract-text",
            post(extract_text_handler::<F, L, V, T>),
        )
        .route("/api/v1/query", post(query_handler::<F, L, V, T>))
        .route("/api/v1/ask", post(ask_handler::<F, L, V, T>))
        .route(
            "/api/v1/documents",
            get(list_documents_handler).delete(clear_documents_handler::<F, L, V, T>),
        )
        .layer(body_limit)
        .layer(middleware::from_fn(request_context_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
