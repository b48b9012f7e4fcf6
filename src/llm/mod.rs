//! Text-generation upstream client
//!
//! Summarization is one prompt in, one free-form reply out. The reply is
//! expected (but not guaranteed) to be JSON; dealing with that is the
//! summary module's job, not the client's.

mod openai;

pub use openai::OpenAiChat;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("OpenAI API key not configured")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Request(String),

    #[error("HTTP {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Run one generation call. No retries, no streaming.
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}
