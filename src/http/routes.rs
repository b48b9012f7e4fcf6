use super::handlers;
use super::state::AppState;
use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

/// Whisper caps uploads at 25 MB; match it instead of axum's 2 MB default.
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Transcription
        .route(
            "/transcribe",
            get(handlers::transcribe_info).post(handlers::transcribe),
        )
        // Summarization
        .route(
            "/summarize",
            get(handlers::summarize_info).post(handlers::summarize),
        )
        // Browser UI
        .fallback_service(ServeDir::new(static_dir))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
