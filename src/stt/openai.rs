use super::{SpeechToText, SttError, Transcription, TranscriptSegment};
use crate::config::OpenAiConfig;
use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;
use std::time::Duration;
use tracing::info;

const TIMEOUT_SECS: u64 = 120;
const RESPONSE_FORMAT: &str = "verbose_json";

/// OpenAI Whisper transcription client.
pub struct OpenAiStt {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl OpenAiStt {
    pub fn new(cfg: &OpenAiConfig, api_key: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            endpoint: format!("{}/audio/transcriptions", cfg.api_base.trim_end_matches('/')),
            model: cfg.whisper_model.clone(),
            api_key,
        }
    }
}

/// Subset of the `verbose_json` transcription body we care about.
/// Unknown fields (tokens, avg_logprob, ...) are ignored.
#[derive(Debug, Deserialize)]
struct VerboseTranscription {
    text: String,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    segments: Vec<VerboseSegment>,
}

#[derive(Debug, Deserialize)]
struct VerboseSegment {
    start: f64,
    end: f64,
    text: String,
}

#[async_trait]
impl SpeechToText for OpenAiStt {
    async fn transcribe(
        &self,
        bytes: Vec<u8>,
        filename: &str,
        mime: &str,
    ) -> Result<Transcription, SttError> {
        let api_key = self.api_key.as_deref().ok_or(SttError::MissingApiKey)?;

        info!("Whisper STT: transcribing {} ({} bytes)", filename, bytes.len());

        let file_part = multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(mime)
            .map_err(|e| SttError::Request(e.to_string()))?;

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("response_format", RESPONSE_FORMAT)
            .text("timestamp_granularities[]", "segment")
            .part("file", file_part);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| SttError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SttError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let verbose: VerboseTranscription = response
            .json()
            .await
            .map_err(|e| SttError::InvalidResponse(e.to_string()))?;

        Ok(Transcription {
            text: verbose.text,
            segments: verbose
                .segments
                .into_iter()
                .map(|s| TranscriptSegment {
                    start: s.start,
                    end: s.end,
                    text: s.text,
                })
                .collect(),
            language: verbose.language,
        })
    }
}
