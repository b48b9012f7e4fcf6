//! Speech-to-text upstream client
//!
//! The `/transcribe` endpoint delegates all recognition work to an external
//! service behind the [`SpeechToText`] trait. The production implementation
//! is [`OpenAiStt`] (Whisper via the OpenAI audio API); handlers only see the
//! trait so tests can substitute doubles.

mod openai;

pub use openai::OpenAiStt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SttError {
    #[error("OpenAI API key not configured")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Request(String),

    #[error("HTTP {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// One timestamped segment of a transcription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

/// What the upstream service actually provides. There is no confidence
/// score here: verbose JSON mode does not report one, and the endpoint
/// substitutes a fixed placeholder instead.
#[derive(Debug, Clone)]
pub struct Transcription {
    pub text: String,
    pub segments: Vec<TranscriptSegment>,
    pub language: Option<String>,
}

#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe one uploaded audio file, forwarded byte-for-byte.
    async fn transcribe(
        &self,
        bytes: Vec<u8>,
        filename: &str,
        mime: &str,
    ) -> Result<Transcription, SttError>;
}
