//! HTTP API server
//!
//! This module provides the REST surface driven by the browser UI:
//! - GET/POST /transcribe - Upload an audio file, get text + segments back
//! - GET/POST /summarize - Turn a transcript into a structured summary
//! - GET /health - Health check
//!
//! The static client UI is served from the configured asset directory.

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
