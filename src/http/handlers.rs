use super::state::AppState;
use crate::llm::LlmError;
use crate::stt::{SttError, TranscriptSegment};
use crate::summary::{self, SummaryType};
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info};

/// MIME types accepted for upload.
const ALLOWED_AUDIO_TYPES: [&str; 6] = [
    "audio/mp3",
    "audio/wav",
    "audio/mpeg",
    "audio/mp4",
    "audio/m4a",
    "audio/webm",
];

/// Verbose JSON mode does not report a confidence score; the response carries
/// this fixed placeholder instead. Deliberately not a computed value.
const PLACEHOLDER_CONFIDENCE: f64 = 0.95;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub transcript: Option<String>,

    /// One of "general" | "meeting" | "technical"; anything else (or absent)
    /// is treated as general.
    #[serde(rename = "summaryType")]
    pub summary_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TranscriptPayload {
    pub text: String,
    pub confidence: f64,
    pub segments: Vec<TranscriptSegment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TranscribeResponse {
    pub success: bool,
    pub transcript: TranscriptPayload,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub success: bool,
    pub summary: Value,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct EndpointInfo {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /transcribe
pub async fn transcribe_info() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(EndpointInfo {
            message: "Transcribe API endpoint".to_string(),
        }),
    )
}

/// POST /transcribe
/// Accept one multipart `file` field and forward it to the STT service.
pub async fn transcribe(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    // Pull out the `file` field; other fields are ignored.
    let mut upload: Option<(String, String, Vec<u8>)> = None;
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or("audio").to_string();
        let mime = field.content_type().unwrap_or_default().to_string();
        match field.bytes().await {
            Ok(bytes) => {
                upload = Some((filename, mime, bytes.to_vec()));
                break;
            }
            Err(e) => {
                error!("Failed to read upload: {}", e);
                break;
            }
        }
    }

    let Some((filename, mime, bytes)) = upload else {
        return error_response(StatusCode::BAD_REQUEST, "No audio file provided");
    };

    if !ALLOWED_AUDIO_TYPES.contains(&mime.as_str()) {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Invalid file type. Please upload an audio file.",
        );
    }

    info!("Transcribing upload: {} ({}, {} bytes)", filename, mime, bytes.len());

    match state.stt.transcribe(bytes, &filename, &mime).await {
        Ok(transcription) => (
            StatusCode::OK,
            Json(TranscribeResponse {
                success: true,
                transcript: TranscriptPayload {
                    text: transcription.text,
                    confidence: PLACEHOLDER_CONFIDENCE,
                    segments: transcription.segments,
                    language: transcription.language,
                },
                message: "Transcription completed successfully".to_string(),
            }),
        )
            .into_response(),
        Err(SttError::MissingApiKey) => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "OpenAI API key not configured")
        }
        Err(e) => {
            // The original error is logged only; the client gets a fixed
            // instructional message.
            error!("Transcription error: {}", e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to process audio file. Please check your OpenAI API key and try again.",
            )
        }
    }
}

/// GET /summarize
pub async fn summarize_info() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(EndpointInfo {
            message: "Summarize API endpoint".to_string(),
        }),
    )
}

/// POST /summarize
/// Select a prompt template by summary type, run one generation call, and
/// return the parsed (or degraded) summary.
pub async fn summarize(
    State(state): State<AppState>,
    Json(req): Json<SummarizeRequest>,
) -> impl IntoResponse {
    let Some(transcript) = req.transcript.filter(|t| !t.is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, "No transcript provided");
    };

    let requested = req.summary_type.unwrap_or_else(|| "general".to_string());
    let kind = SummaryType::parse(&requested);

    info!(
        "Summarizing {} chars as {} summary",
        transcript.len(),
        kind.as_str()
    );

    let prompt = summary::render_prompt(kind, &transcript);

    match state.llm.generate(&prompt).await {
        Ok(reply) => (
            StatusCode::OK,
            Json(SummarizeResponse {
                success: true,
                summary: summary::parse_reply(&reply, &requested),
                message: "Summarization completed successfully".to_string(),
            }),
        )
            .into_response(),
        Err(LlmError::MissingApiKey) => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "OpenAI API key not configured")
        }
        Err(e) => {
            error!("Summarization error: {}", e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to summarize transcript. Details: {}", e),
            )
        }
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
